use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
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
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    /// Failures while computing a value, as opposed to errors in the
    /// shape of a statement. These print as `?ERROR: <text>`.
    pub fn is_evaluation(&self) -> bool {
        [
            ErrorCode::Overflow,
            ErrorCode::OutOfMemory,
            ErrorCode::DivisionByZero,
            ErrorCode::TypeMismatch,
            ErrorCode::InternalError,
        ]
        .iter()
        .any(|&code| code as u16 == self.code)
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    Break = 0,
    NextWithoutFor = 1,
    SyntaxError = 2,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    DivisionByZero = 11,
    IllegalDirect = 12,
    TypeMismatch = 13,
    LineBufferOverflow = 23,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            0 => "BREAK",
            1 => "NEXT WITHOUT FOR",
            2 => "SYNTAX ERROR",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            11 => "DIVISION BY ZERO",
            12 => "ILLEGAL DIRECT",
            13 => "TYPE MISMATCH",
            23 => "LINE BUFFER OVERFLOW",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        let message = if self.message.is_empty() {
            String::new()
        } else {
            format!("; {}", self.message)
        };
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}{}", self.code, message)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}{}", self.code, suffix, message)
            }
        } else if suffix.is_empty() {
            write!(f, "{}{}", code_str, message)
        } else {
            write!(f, "{} IN{}{}", code_str, suffix, message)
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(error!(SyntaxError, Some(20)).to_string(), "SYNTAX ERROR IN 20");
        assert_eq!(
            error!(IllegalFunctionCall; "COLOR MUST BE 0 TO 15").to_string(),
            "ILLEGAL FUNCTION CALL; COLOR MUST BE 0 TO 15"
        );
        assert_eq!(
            error!(Break, Some(40)).to_string(),
            "BREAK IN 40"
        );
    }

    #[test]
    fn test_line_number_added_later() {
        let e = error!(DivisionByZero).in_line_number(Some(30));
        assert!(!e.is_direct());
        assert_eq!(e.to_string(), "DIVISION BY ZERO IN 30");
    }

    #[test]
    fn test_evaluation_errors() {
        assert!(error!(DivisionByZero).is_evaluation());
        assert!(error!(TypeMismatch).is_evaluation());
        assert!(error!(OutOfMemory; "TOO MANY VARIABLES").is_evaluation());
        assert!(!error!(SyntaxError).is_evaluation());
        assert!(!error!(NextWithoutFor).is_evaluation());
        assert!(!error!(IllegalFunctionCall).is_evaluation());
    }
}
