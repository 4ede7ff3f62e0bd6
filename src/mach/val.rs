/// ## Scalar values
///
/// Every variable and every expression result is one of these.
/// Whole-valued numbers are kept as `Integer` wherever a result is
/// produced, see [`Val::from_f64`].

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(String),
}

impl Val {
    /// Normalizes a numeric result. A finite value with no fractional
    /// part that fits an `i64` becomes an `Integer`.
    pub fn from_f64(n: f64) -> Val {
        if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Val::Integer(n as i64)
        } else {
            Val::Float(n)
        }
    }

    /// Parses numeric text such as `42`, `-3.5` or `1e3`.
    pub fn parse_number(s: &str) -> Option<Val> {
        s.parse::<f64>().ok().map(Val::from_f64)
    }

    /// Numeric coercion. Strings that do not hold a number are zero.
    pub fn to_f64(&self) -> f64 {
        match self {
            Val::Integer(n) => *n as f64,
            Val::Float(n) => *n,
            Val::String(s) => s.parse::<f64>().unwrap_or(0.0),
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.to_string())
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Self {
        Val::Integer(n)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => write!(f, "{}", format_float(*n)),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

// Shortest digits that round-trip. Exponent form below 1e-4 and from 1e6 up.
fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let sci = format!("{:e}", n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if exp < -4 || exp >= 6 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        format!("{}", n)
    }
}
