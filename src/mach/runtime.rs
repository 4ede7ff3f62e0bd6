use super::expression::unquote;
use super::{Console, Expression, Listing, Stack, Stdio, Val, Var};
use crate::error;
use crate::lang::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// ## BASIC runtime
///
/// Loads a program and executes it one line at a time. The program
/// counter is a position in the listing's ascending line index. Each
/// statement reports a [`Flow`] telling the runtime where to go next.
///
/// ```
/// use basic::mach::{Runtime, Scripted};
/// let mut r = Runtime::with_console(Scripted::default());
/// r.run("20 PRINT A * 2\n10 LET A = 21").unwrap();
/// assert_eq!(r.output(), ["42"]);
/// ```

pub struct Runtime<C: Console = Stdio> {
    listing: Listing,
    var: Var,
    loops: Stack<ForLoop>,
    output: Vec<String>,
    console: C,
}

/// Where execution continues after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// The following line.
    Next,
    /// This position of the line index.
    Jump(usize),
    /// Stop without error.
    End,
}

#[derive(Debug, Clone)]
struct ForLoop {
    var_name: String,
    end: f64,
    step: f64,
    line_number: LineNumber,
}

impl Default for Runtime<Stdio> {
    fn default() -> Self {
        Runtime::with_console(Stdio)
    }
}

impl Runtime<Stdio> {
    pub fn new() -> Runtime<Stdio> {
        Runtime::default()
    }
}

impl<C: Console> Runtime<C> {
    pub fn with_console(console: C) -> Runtime<C> {
        Runtime {
            listing: Listing::default(),
            var: Var::new(),
            loops: Stack::new("too many nested FOR loops"),
            output: vec![],
            console,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Every line printed since the program was loaded.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn run(&mut self, text: &str) -> Result<()> {
        self.load_program(text)?;
        self.execute()
    }

    /// Replaces the program and starts a fresh session: variables,
    /// active loops and output are all discarded.
    pub fn load_program(&mut self, text: &str) -> Result<()> {
        self.listing = Listing::load_str(text);
        self.var.clear();
        self.loops.clear();
        self.output.clear();
        Ok(())
    }

    /// Runs the loaded program from its lowest line number.
    pub fn execute(&mut self) -> Result<()> {
        let listing = self.listing.clone();
        let mut pc = 0;
        while let Some(line) = listing.line(pc) {
            let line_number = line.number();
            tracing::trace!(line_number, statement = line.statement(), "dispatch");
            match self.statement(line_number, line.statement()) {
                Ok(Flow::Next) => pc += 1,
                Ok(Flow::Jump(addr)) => pc = addr,
                Ok(Flow::End) => break,
                Err(error) => {
                    let error = error.in_line_number(line_number);
                    tracing::debug!(%error, "execution aborted");
                    return Err(error);
                }
            }
        }
        tracing::debug!(output = self.output.len(), "execution finished");
        Ok(())
    }

    fn statement(&mut self, line_number: LineNumber, statement: &str) -> Result<Flow> {
        let statement = statement.trim();
        if let Some(rest) = statement.strip_prefix("PRINT") {
            self.exec_print(rest)
        } else if let Some(rest) = statement.strip_prefix("LET") {
            self.exec_let(rest)
        } else if let Some(rest) = statement.strip_prefix("GOTO") {
            self.exec_goto(rest)
        } else if let Some(rest) = statement.strip_prefix("IF") {
            self.exec_if(line_number, rest)
        } else if let Some(rest) = statement.strip_prefix("FOR") {
            self.exec_for(line_number, rest)
        } else if let Some(rest) = statement.strip_prefix("NEXT") {
            self.exec_next(rest)
        } else if let Some(rest) = statement.strip_prefix("INPUT") {
            self.exec_input(rest)
        } else if statement.starts_with("REM") {
            Ok(Flow::Next)
        } else if statement.starts_with("END") {
            Ok(Flow::End)
        } else {
            Err(error!(SyntaxError; format!("syntax error: unknown command '{}'", statement)))
        }
    }

    fn exec_print(&mut self, rest: &str) -> Result<Flow> {
        let mut strings: Vec<String> = vec![];
        for part in print_parts(rest.trim()) {
            match unquote(part) {
                Some(s) => strings.push(s.to_string()),
                None => {
                    let val = Expression::new(&self.var)
                        .evaluate(part)
                        .map_err(|e| e.context(format!("error evaluating expression '{}'", part)))?;
                    strings.push(val.to_string());
                }
            }
        }
        let line = strings.join(" ");
        self.console.print(&line).map_err(io_error)?;
        self.output.push(line);
        Ok(Flow::Next)
    }

    fn exec_let(&mut self, rest: &str) -> Result<Flow> {
        let (var_name, expr) = match rest.trim().split_once('=') {
            Some(split) => split,
            None => return Err(error!(SyntaxError; "invalid LET syntax")),
        };
        let val = Expression::new(&self.var).evaluate(expr)?;
        self.var.store(var_name.trim(), val);
        Ok(Flow::Next)
    }

    fn exec_goto(&mut self, rest: &str) -> Result<Flow> {
        let target = match rest.trim().parse::<LineNumber>() {
            Ok(num) => num,
            Err(_) => return Err(error!(SyntaxError; "invalid GOTO syntax")),
        };
        match self.listing.index_of(target) {
            Some(addr) => {
                tracing::trace!(line = target, "GOTO");
                Ok(Flow::Jump(addr))
            }
            None => Err(error!(UndefinedLine; format!("undefined line number {} in GOTO statement", target))),
        }
    }

    fn exec_if(&mut self, line_number: LineNumber, rest: &str) -> Result<Flow> {
        let parts: Vec<&str> = rest.trim().split(" THEN ").collect();
        if parts.len() != 2 {
            return Err(error!(SyntaxError; "invalid IF syntax"));
        }
        if !Expression::new(&self.var).condition(parts[0])? {
            return Ok(Flow::Next);
        }
        // END after THEN only ends the IF.
        match self.statement(line_number, parts[1])? {
            Flow::End => Ok(Flow::Next),
            flow => Ok(flow),
        }
    }

    fn exec_for(&mut self, line_number: LineNumber, rest: &str) -> Result<Flow> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() < 5 || parts[1] != "=" || parts[3] != "TO" {
            return Err(error!(SyntaxError; "invalid FOR syntax"));
        }
        let expr = Expression::new(&self.var);
        let start = expr.evaluate(parts[2])?;
        let end = expr.evaluate(parts[4])?.to_f64();
        let step = if parts.len() >= 7 && parts[5] == "STEP" {
            expr.evaluate(parts[6])?.to_f64()
        } else {
            1.0
        };
        self.var.store(parts[0], start);
        self.loops.push(ForLoop {
            var_name: parts[0].to_string(),
            end,
            step,
            line_number,
        })?;
        Ok(Flow::Next)
    }

    fn exec_next(&mut self, rest: &str) -> Result<Flow> {
        let for_loop = match self.loops.last() {
            Some(for_loop) => for_loop,
            None => return Err(error!(NextWithoutFor)),
        };
        let var_name = rest.trim();
        if !var_name.is_empty() && var_name != for_loop.var_name {
            return Err(error!(NextMismatch;
                format!("NEXT {} doesn't match FOR {}", var_name, for_loop.var_name)));
        }
        let current = self.var.get(&for_loop.var_name).map_or(0.0, Val::to_f64);
        let value = current + for_loop.step;
        self.var.store(&for_loop.var_name, Val::from_f64(value));
        let again = (for_loop.step > 0.0 && value <= for_loop.end)
            || (for_loop.step < 0.0 && value >= for_loop.end);
        if !again {
            self.loops.pop();
            return Ok(Flow::Next);
        }
        match self.listing.index_of(for_loop.line_number) {
            Some(addr) => {
                tracing::trace!(line = for_loop.line_number, "NEXT");
                Ok(Flow::Jump(addr + 1))
            }
            None => Err(error!(UndefinedLine;
                format!("undefined line number {} in NEXT statement", for_loop.line_number))),
        }
    }

    fn exec_input(&mut self, rest: &str) -> Result<Flow> {
        let rest = rest.trim();
        let var_name = match rest.split_once(';') {
            Some((prompt, var_name)) => {
                if let Some(prompt) = unquote(prompt.trim()) {
                    self.console.prompt(prompt).map_err(io_error)?;
                }
                var_name.trim()
            }
            None => {
                self.console.prompt("? ").map_err(io_error)?;
                rest
            }
        };
        let line = match self.console.read_line().map_err(io_error)? {
            Some(line) => line,
            None => return Err(error!(InputPastEnd)),
        };
        let line = line.trim();
        let val = Val::parse_number(line).unwrap_or_else(|| Val::from(line));
        self.var.store(var_name, val);
        Ok(Flow::Next)
    }
}

/// Splits `PRINT` arguments on semicolons outside of quotes.
/// Empty parts are dropped.
fn print_parts(s: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut start = 0;
    let mut quoted = false;
    for (i, ch) in s.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            ';' if !quoted => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn io_error(e: std::io::Error) -> Error {
    error!(IoError; e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_parts() {
        assert_eq!(print_parts(r#"A; " "; B"#), ["A", "\" \"", "B"]);
        assert_eq!(print_parts(r#""A;B"; C"#), ["\"A;B\"", "C"]);
        assert_eq!(print_parts(";;X;"), ["X"]);
        assert!(print_parts("").is_empty());
    }
}
