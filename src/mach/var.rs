use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Unassigned variables read as integer zero.
    pub fn fetch(&self, var_name: &str) -> Val {
        match self.vars.get(var_name) {
            Some(val) => val.clone(),
            None => Val::default(),
        }
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) -> Result<()> {
        debug_assert!(!var_name.chars().any(|c| c.is_ascii_lowercase()));
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                if self.vars.len() >= u16::max_value() as usize {
                    return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
                }
                self.vars.insert(var_name.clone(), value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let var = Var::new();
        assert_eq!(var.fetch("NOPE"), Val::Integer(0));
        assert!(!var.contains("NOPE"));
    }

    #[test]
    fn test_type_may_change() {
        let mut var = Var::new();
        let name: Rc<str> = "A".into();
        var.store(&name, Val::Integer(3)).unwrap();
        assert_eq!(var.fetch("A"), Val::Integer(3));
        var.store(&name, Val::from("HI")).unwrap();
        assert_eq!(var.fetch("A"), Val::from("HI"));
        assert_eq!(var.len(), 1);
        var.clear();
        assert!(var.is_empty());
    }
}
