use super::{Operation, Val, Var};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

// A `+` or `-` right after one of these is a sign, not an operator.
const SIGN_CONTEXT: &[u8] = b"*/+-(<>=";

/// ## Expression evaluator
///
/// Expressions are evaluated straight from their text. There is no
/// tokenizer and no tree. The text is split at the rightmost top level
/// `+` or `-`, or failing that the rightmost `*` or `/`, and both halves
/// are evaluated recursively. Splitting at the rightmost operator of the
/// loosest binding class gives the usual precedence and left to right
/// associativity. Parentheses are not supported.
///
/// For example: `A - B - C` splits into `A - B` and `C`, and
/// `A + B * C` splits into `A` and `B * C`.

pub struct Expression<'a> {
    var: &'a Var,
}

impl<'a> Expression<'a> {
    pub fn new(var: &'a Var) -> Expression<'a> {
        Expression { var }
    }

    /// Evaluates, in order of recognition: a quoted string literal,
    /// a bound variable name, a number, then arithmetic.
    pub fn evaluate(&self, expr: &str) -> Result<Val> {
        let expr = expr.trim();
        match self.operand(expr) {
            Some(val) => Ok(val),
            None => self.arithmetic(expr),
        }
    }

    /// Tests `>`, then `<`, then `=`, splitting at the first occurrence of
    /// the first one present. A condition with none of them is false.
    pub fn condition(&self, cond: &str) -> Result<bool> {
        let cond = cond.trim();
        for &op in ['>', '<', '='].iter() {
            if let Some((lhs, rhs)) = cond.split_once(op) {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                return Ok(match op {
                    '>' => Operation::greater(&lhs, &rhs),
                    '<' => Operation::less(&lhs, &rhs),
                    _ => Operation::equal(&lhs, &rhs),
                });
            }
        }
        Ok(false)
    }

    fn operand(&self, expr: &str) -> Option<Val> {
        if let Some(s) = unquote(expr) {
            return Some(Val::from(s));
        }
        if let Some(val) = self.var.get(expr) {
            return Some(val.clone());
        }
        Val::parse_number(expr)
    }

    // Left halves are split again in this loop rather than by recursion,
    // so `1 + 1 + ... + 1` costs no stack per operator. Right halves are
    // evaluated afterwards, innermost first.
    fn arithmetic(&self, expr: &str) -> Result<Val> {
        let mut pending: Vec<(u8, &str)> = vec![];
        let mut lhs = expr;
        let mut acc = loop {
            let (i, op) = match split_point(lhs) {
                Some(split) => split,
                None => return Err(error!(CannotEvaluate; lhs)),
            };
            pending.push((op, &lhs[i + 1..]));
            lhs = lhs[..i].trim();
            if let Some(val) = self.operand(lhs) {
                break val;
            }
        };
        for (op, rhs) in pending.into_iter().rev() {
            let rhs = self.evaluate(rhs)?;
            acc = match op {
                b'+' => Operation::sum(acc, rhs)?,
                b'-' => Operation::subtract(acc, rhs)?,
                b'*' => Operation::multiply(acc, rhs)?,
                _ => Operation::divide(acc, rhs)?,
            };
        }
        Ok(acc)
    }
}

/// Position of the operator to split at: the rightmost `+` or `-` that is
/// not a sign, or failing that the rightmost `*` or `/`.
fn split_point(expr: &str) -> Option<(usize, u8)> {
    let bytes = expr.as_bytes();
    for i in (1..bytes.len()).rev() {
        let op = bytes[i];
        if (op == b'+' || op == b'-') && !SIGN_CONTEXT.contains(&bytes[i - 1]) {
            return Some((i, op));
        }
    }
    (0..bytes.len())
        .rev()
        .find(|&i| bytes[i] == b'*' || bytes[i] == b'/')
        .map(|i| (i, bytes[i]))
}

/// Contents of a `"..."` literal. No escapes.
pub fn unquote(s: &str) -> Option<&str> {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}
