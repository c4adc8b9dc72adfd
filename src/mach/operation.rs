use super::Val;
use crate::error;
use crate::lang::{Error, Operator, Relation};
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn apply(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        match op {
            Operator::Plus => Operation::sum(lhs, rhs),
            Operator::Minus => Operation::subtract(lhs, rhs),
            Operator::Multiply => Operation::multiply(lhs, rhs),
            Operator::Divide => Operation::divide(lhs, rhs),
        }
    }

    pub fn negate(val: i32) -> Result<i32> {
        match val.checked_neg() {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    /// Integer division, truncating toward zero.
    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    /// Integers compare numerically and strings lexicographically.
    /// Mixed values compare as numbers when the string holds one,
    /// otherwise by their printed form.
    pub fn compare(lhs: &Val, relation: Relation, rhs: &Val) -> bool {
        use Val::*;
        let ordering = match (lhs, rhs) {
            (Integer(l), Integer(r)) => l.cmp(r),
            (String(l), String(r)) => l.cmp(r),
            (Integer(l), String(r)) => match r.trim().parse::<i32>() {
                Ok(r) => l.cmp(&r),
                Err(_) => l.to_string().as_str().cmp(&**r),
            },
            (String(l), Integer(r)) => match l.trim().parse::<i32>() {
                Ok(l) => l.cmp(r),
                Err(_) => (&**l).cmp(r.to_string().as_str()),
            },
        };
        match relation {
            Relation::Equal => ordering == Ordering::Equal,
            Relation::NotEqual => ordering != Ordering::Equal,
            Relation::Less => ordering == Ordering::Less,
            Relation::LessEqual => ordering != Ordering::Greater,
            Relation::Greater => ordering == Ordering::Greater,
            Relation::GreaterEqual => ordering != Ordering::Less,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(Operation::divide(7, 2).unwrap(), 3);
        assert_eq!(Operation::divide(-7, 2).unwrap(), -3);
        assert_eq!(
            Operation::divide(1, 0).unwrap_err().to_string(),
            "DIVISION BY ZERO"
        );
        assert_eq!(
            Operation::multiply(i32::max_value(), 2)
                .unwrap_err()
                .to_string(),
            "OVERFLOW"
        );
        assert!(Operation::negate(i32::min_value()).is_err());
    }

    #[test]
    fn test_compare() {
        let one = Val::Integer(1);
        let two = Val::Integer(2);
        assert!(Operation::compare(&one, Relation::Less, &two));
        assert!(Operation::compare(&one, Relation::NotEqual, &two));
        assert!(!Operation::compare(&one, Relation::GreaterEqual, &two));
        assert!(Operation::compare(
            &Val::from("ABC"),
            Relation::Less,
            &Val::from("ABD")
        ));
        assert!(Operation::compare(&Val::from("10"), Relation::Equal, &Val::Integer(10)));
        assert!(!Operation::compare(&Val::from("X"), Relation::Equal, &Val::Integer(0)));
    }
}
