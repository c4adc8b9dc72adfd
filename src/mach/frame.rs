use super::Address;
use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// One active FOR loop.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopFrame {
    pub var_name: Rc<str>,
    pub limit: i32,
    pub step: i32,
    /// Index into the run snapshot that execution continues from
    /// when the loop goes around again.
    pub resume: Address,
}

impl LoopFrame {
    /// The control variable's next value and whether the loop body runs again.
    /// A step of zero counts as ascending.
    pub fn advance(&self, current: i32) -> Result<(i32, bool)> {
        let next = match current.checked_add(self.step) {
            Some(n) => n,
            None => return Err(error!(Overflow)),
        };
        let again = if self.step >= 0 {
            next <= self.limit
        } else {
            next >= self.limit
        };
        Ok((next, again))
    }
}
