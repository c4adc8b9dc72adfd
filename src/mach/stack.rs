use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u8::max_value() as usize
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vec.get(idx)
    }
    /// Index of the topmost entry matching `predicate`.
    pub fn rposition<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.vec.iter().rposition(predicate)
    }
    /// Discards the entry at `len` and everything above it.
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len() {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(InternalError; "UNDERFLOW")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_from_match() {
        let mut stack: Stack<char> = Stack::new("TEST OVERFLOW");
        for ch in "IJKJ".chars() {
            stack.push(ch).unwrap();
        }
        let index = stack.rposition(|c| *c == 'J').unwrap();
        assert_eq!(index, 3);
        stack.truncate(stack.rposition(|c| *c == 'I').unwrap());
        assert!(stack.is_empty());
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_overflow() {
        let mut stack: Stack<u8> = Stack::new("TOO DEEP");
        for n in 0..=254 {
            stack.push(n).unwrap();
        }
        let err = stack.push(255).unwrap_err();
        assert_eq!(err.to_string(), "OUT OF MEMORY; TOO DEEP");
        assert_eq!(stack.len(), 255);
    }
}
