use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: String,
    context: Option<String>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
            context: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    /// Prefix the cause with what was being done when it happened.
    pub fn context<S: Into<String>>(self, context: S) -> Error {
        debug_assert!(self.context.is_none());
        Error {
            context: Some(context.into()),
            ..self
        }
    }

    fn cause(&self) -> String {
        let cause = self.bare_cause();
        match &self.context {
            Some(context) => format!("{}: {}", context, cause),
            None => cause,
        }
    }

    fn bare_cause(&self) -> String {
        if self.message.is_empty() {
            self.code.to_string()
        } else if self.code.prefixes_message() {
            format!("{}: {}", self.code, self.message)
        } else {
            self.message.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    CannotEvaluate,
    DivisionByZero,
    UndefinedLine,
    NextWithoutFor,
    NextMismatch,
    InputPastEnd,
    IoError,
    OutOfMemory,
}

impl ErrorCode {
    // These messages are complete sentences on their own.
    fn prefixes_message(self) -> bool {
        !matches!(
            self,
            ErrorCode::SyntaxError | ErrorCode::UndefinedLine | ErrorCode::NextMismatch
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SyntaxError => "syntax error",
            CannotEvaluate => "cannot evaluate expression",
            DivisionByZero => "division by zero",
            UndefinedLine => "undefined line number",
            NextWithoutFor => "NEXT without FOR",
            NextMismatch => "NEXT variable mismatch",
            InputPastEnd => "INPUT past end",
            IoError => "i/o error",
            OutOfMemory => "out of memory",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.line_number {
            Some(line_number) => write!(f, "error at line {}: {}", line_number, self.cause()),
            None => write!(f, "{}", self.cause()),
        }
    }
}

impl std::error::Error for Error {}
