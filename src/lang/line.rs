use super::ast::Statement;
use super::error::Error;
use super::lex::lex;
use super::parse::parse;
use super::LineNumber;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## A line of input
///
/// Program lines keep their statement text verbatim (case preserved);
/// parsing happens each time the line executes.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    text: Rc<str>,
}

impl Line {
    pub fn new(s: &str) -> Result<Line> {
        let (number, text) = lex(s)?;
        Ok(Line {
            number,
            text: text.into(),
        })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn statement(&self) -> Result<Statement> {
        parse(self.number, &self.text)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
