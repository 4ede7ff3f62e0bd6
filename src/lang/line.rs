use super::LineNumber;

/// ## A single numbered source line
///
/// The statement text is kept verbatim. Nothing is tokenized until the
/// statement executes.

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    statement: String,
}

impl Line {
    /// Splits a physical line into its line number and statement.
    /// Returns `None` for blank lines, lines without a leading integer,
    /// and lines with nothing after the number.
    pub fn new(s: &str) -> Option<Line> {
        let s = s.trim();
        let split = s.find(char::is_whitespace)?;
        let (number, statement) = s.split_at(split);
        let number = number.parse::<LineNumber>().ok()?;
        let statement = statement.trim_start();
        if statement.is_empty() {
            return None;
        }
        Some(Line {
            number,
            statement: statement.to_string(),
        })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.statement)
    }
}

#[cfg(test)]
#[path = "tests/line_test.rs"]
mod tests;
