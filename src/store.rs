//! In-memory item list
//!
//! Insertion order is significant, duplicates are allowed and entries have
//! no identity beyond their position.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered list of to-do entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    /// Create an empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an entry to the end of the list.
    ///
    /// Only the empty string is rejected; whitespace is a valid entry.
    pub fn append(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyItem);
        }
        self.items.push(text);
        Ok(())
    }

    /// Remove the entry at `index`, shifting later entries left.
    /// Returns `None` and leaves the list alone if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl From<Vec<String>> for ItemList {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(items: &[&str]) -> ItemList {
        ItemList::from(items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut l = ItemList::new();
        l.append("Buy milk").unwrap();
        l.append("Walk dog").unwrap();
        l.append("Buy milk").unwrap();
        assert_eq!(l, list(&["Buy milk", "Walk dog", "Buy milk"]));
    }

    #[test]
    fn test_append_empty_rejected() {
        let mut l = list(&["a"]);
        assert!(matches!(l.append(""), Err(Error::EmptyItem)));
        assert_eq!(l, list(&["a"]));
    }

    #[test]
    fn test_append_whitespace_accepted() {
        let mut l = ItemList::new();
        l.append("  ").unwrap();
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut l = list(&["a", "b", "c"]);
        assert_eq!(l.remove_at(1).as_deref(), Some("b"));
        assert_eq!(l, list(&["a", "c"]));
        assert_eq!(l.as_slice()[1], "c");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut l = list(&["a"]);
        assert_eq!(l.remove_at(1), None);
        assert_eq!(l.remove_at(usize::MAX), None);
        assert_eq!(l, list(&["a"]));

        let mut empty = ItemList::new();
        assert_eq!(empty.remove_at(0), None);
        assert!(empty.is_empty());
    }

    proptest! {
        #[test]
        fn prop_append_pushes_last(items in prop::collection::vec(".*", 0..16), s in ".+") {
            let mut l = ItemList::from(items.clone());
            l.append(s.clone()).unwrap();
            prop_assert_eq!(l.len(), items.len() + 1);
            prop_assert_eq!(l.as_slice().last(), Some(&s));
            prop_assert_eq!(&l.as_slice()[..items.len()], &items[..]);
        }

        #[test]
        fn prop_remove_valid_index(items in prop::collection::vec(".*", 1..16), pick in any::<prop::sample::Index>()) {
            let i = pick.index(items.len());
            let mut l = ItemList::from(items.clone());
            let removed = l.remove_at(i);
            let mut expected = items.clone();
            let want = expected.remove(i);
            prop_assert_eq!(removed, Some(want));
            prop_assert_eq!(l.as_slice(), &expected[..]);
        }

        #[test]
        fn prop_remove_invalid_index(items in prop::collection::vec(".*", 0..16), extra in 0usize..1000) {
            let mut l = ItemList::from(items.clone());
            prop_assert_eq!(l.remove_at(items.len() + extra), None);
            prop_assert_eq!(l.as_slice(), &items[..]);
        }
    }
}
