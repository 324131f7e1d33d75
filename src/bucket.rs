//! Bucket chains holding the entries that share a bucket index

use crate::entry::Entry;

/// A chain of entries whose keys route to the same bucket index.
///
/// Entries are kept in append order and searched linearly. The chain has no length limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<V> {
    /// The entries in this chain, in append order
    entries: Vec<Entry<V>>,
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Bucket<V> {
    /// Creates an empty bucket. Does not allocate until the first push.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns the first entry whose key equals `key`
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Entry<V>> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    /// Returns a mutable reference to the first entry whose key equals `key`
    pub fn find_mut(&mut self, key: &str) -> Option<&mut Entry<V>> {
        self.entries.iter_mut().find(|entry| entry.key() == key)
    }

    /// Returns the entries in append order
    #[must_use]
    pub fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }

    /// Appends an entry to the end of the chain.
    ///
    /// The caller is responsible for checking that the key is not already present.
    pub fn push(&mut self, entry: Entry<V>) {
        self.entries.push(entry);
    }

    /// Removes the entry whose key equals `key` and returns it.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Entry<V>> {
        let position = self.entries.iter().position(|entry| entry.key() == key)?;
        Some(self.entries.remove(position))
    }

    /// Returns the chain length
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the chain holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry in the chain
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket_with(keys: &[&str]) -> Bucket<usize> {
        let mut bucket = Bucket::new();
        for (i, key) in keys.iter().enumerate() {
            bucket.push(Entry::new((*key).to_string(), i));
        }
        bucket
    }

    #[test]
    fn test_find_on_empty_bucket() {
        let bucket: Bucket<usize> = Bucket::new();
        assert!(bucket.is_empty());
        assert_eq!(bucket.find("key"), None);
    }

    #[test]
    fn test_find_exact_match_only() {
        let bucket = bucket_with(&["key", "Key", "key "]);
        assert_eq!(bucket.find("key").map(Entry::value), Some(&0));
        assert_eq!(bucket.find("Key").map(Entry::value), Some(&1));
        assert_eq!(bucket.find("key ").map(Entry::value), Some(&2));
        assert_eq!(bucket.find("ke"), None);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut bucket = bucket_with(&["a", "b"]);
        if let Some(entry) = bucket.find_mut("b") {
            *entry.value_mut() = 10;
        }
        assert_eq!(bucket.find("b").map(Entry::value), Some(&10));
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut bucket = bucket_with(&["a", "b", "c", "d"]);

        let removed = bucket.remove("b");
        assert_eq!(removed.map(Entry::into_value), Some(1));
        assert_eq!(bucket.len(), 3);

        let keys: Vec<&str> = bucket.entries.iter().map(Entry::key).collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_missing_key() {
        let mut bucket = bucket_with(&["a", "b"]);
        assert_eq!(bucket.remove("z"), None);
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket.find("a").map(Entry::value), Some(&0));
        assert_eq!(bucket.find("b").map(Entry::value), Some(&1));
    }

    #[test]
    fn test_remove_twice() {
        let mut bucket = bucket_with(&["a"]);
        assert!(bucket.remove("a").is_some());
        assert!(bucket.remove("a").is_none());
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_entries_in_append_order() {
        let bucket = bucket_with(&["b", "a", "c"]);
        let keys: Vec<&str> = bucket.entries().iter().map(Entry::key).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_clear() {
        let mut bucket = bucket_with(&["a", "b", "c"]);
        bucket.clear();
        assert!(bucket.is_empty());
        assert_eq!(bucket.find("a"), None);
    }
}
