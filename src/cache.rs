//! The memo table threaded through every recursion in this crate.
//!
//! A [`Memo`] maps recursive-call arguments to previously computed results.
//! Callers allocate one per top-level invocation and pass it down by `&mut`;
//! it is discarded when the top-level call returns. Entries are written once
//! and never invalidated inside a call tree.

use std::collections::HashMap;

/// Memo table keyed by recursive-call arguments.
#[derive(Debug, Clone, Default)]
pub struct Memo<K, V> {
    table: HashMap<K, V>,
}

impl<K, V> Memo<K, V>
where
    K: std::hash::Hash + Eq,
{
    /// Create an empty memo.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Create an empty memo sized for roughly `capacity` distinct subproblems.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashMap::with_capacity(capacity),
        }
    }

    /// Look up a previously computed result.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key)
    }

    /// Record the result for `key`, returning a reference to the stored value.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> &V {
        self.table.entry(key).or_insert(value)
    }

    /// Number of cached subproblems.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if nothing has been cached yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Memo;

    #[test]
    fn starts_empty() {
        let memo: Memo<u64, u64> = Memo::new();
        assert_eq!(memo.len(), 0);
        assert!(memo.is_empty());
        assert_eq!(memo.get(&3), None);
    }

    #[test]
    fn insert_then_hit() {
        let mut memo = Memo::new();
        memo.insert(6u64, 8u64);
        assert_eq!(memo.get(&6), Some(&8));
        assert_eq!(memo.len(), 1);
        assert!(!memo.is_empty());
    }

    #[test]
    fn first_write_wins() {
        // Entries are write-once by convention; a second insert for the same
        // key keeps the original value.
        let mut memo = Memo::new();
        memo.insert("suffix", 2u64);
        assert_eq!(*memo.insert("suffix", 99), 2);
        assert_eq!(memo.get(&"suffix"), Some(&2));
    }
}
