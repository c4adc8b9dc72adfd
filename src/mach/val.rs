use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

/// A variable's value. Names carry no type; either kind may be stored
/// under any name.
#[derive(Debug, PartialEq, Clone)]
pub enum Val {
    String(Rc<str>),
    Integer(i32),
}

impl Default for Val {
    fn default() -> Self {
        Val::Integer(0)
    }
}

impl Val {
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::String(s) => !s.is_empty(),
            Val::Integer(n) => *n != 0,
        }
    }
}

impl From<i32> for Val {
    fn from(n: i32) -> Self {
        Val::Integer(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.into())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Self {
        Val::String(s.into())
    }
}

impl TryFrom<Val> for i32 {
    type Error = Error;
    fn try_from(value: Val) -> std::result::Result<Self, Self::Error> {
        match value {
            Val::Integer(n) => Ok(n),
            Val::String(s) => match s.trim().parse::<i32>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(TypeMismatch)),
            },
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Integer(n) => write!(f, "{}", n),
        }
    }
}
