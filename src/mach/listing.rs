use crate::lang::Line;
use std::collections::{btree_map::Values, BTreeMap};

/// ## Program store
///
/// Numbered lines kept in ascending order. Storing a number that
/// already exists replaces its text.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<u16, Line>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Stores a numbered line. Direct lines are ignored.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        match line.number() {
            Some(number) => self.source.insert(number, line),
            None => None,
        }
    }

    pub fn remove(&mut self, number: u16) -> Option<Line> {
        self.source.remove(&number)
    }

    pub fn get(&self, number: u16) -> Option<&Line> {
        self.source.get(&number)
    }

    pub fn line_numbers(&self) -> Vec<u16> {
        self.source.keys().copied().collect()
    }

    pub fn lines(&self) -> Values<'_, u16, Line> {
        self.source.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_and_replaced() {
        let mut listing = Listing::default();
        for s in &["30 END", "10 PRINT 1", "20 PRINT 2", "10 PRINT \"ONE\""] {
            listing.insert(Line::new(s).unwrap());
        }
        assert_eq!(listing.line_numbers(), vec![10, 20, 30]);
        assert_eq!(listing.get(10).unwrap().text(), "PRINT \"ONE\"");
        assert!(listing.remove(20).is_some());
        assert!(listing.remove(20).is_none());
        assert_eq!(listing.line_numbers(), vec![10, 30]);
        assert_eq!(listing.insert(Line::new("PRINT 3").unwrap()), None);
        assert_eq!(listing.len(), 2);
    }
}
