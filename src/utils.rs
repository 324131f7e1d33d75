//! Utility functions and traits for `ChainedHashMap`

use crate::{ChainedHashMap, MapError};

/// Extension trait providing convenience operations built on `set`/`get`/`get_mut`
pub trait MapExtensions<V> {
    /// Returns the value for `key`, or `default` if the key is absent
    fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V;

    /// Stores `value` only if `key` is absent. Returns true if the value was stored.
    fn set_if_absent<K: Into<String>>(&mut self, key: K, value: V) -> bool;

    /// Applies `f` to the value stored for `key`. Returns false if the key is absent.
    fn update<F: FnOnce(&mut V)>(&mut self, key: &str, f: F) -> bool;
}

impl<V> MapExtensions<V> for ChainedHashMap<V> {
    fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    fn set_if_absent<K: Into<String>>(&mut self, key: K, value: V) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.set(key, value)
    }

    fn update<F: FnOnce(&mut V)>(&mut self, key: &str, f: F) -> bool {
        let Some(value) = self.get_mut(key) else {
            return false;
        };
        f(value);
        true
    }
}

/// Creates a `ChainedHashMap` with `capacity` buckets from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier pairs with the same key.
///
/// # Errors
///
/// Returns [`MapError::InvalidCapacity`] if `capacity` is zero.
pub fn try_from_pairs<K, V, I>(capacity: usize, pairs: I) -> Result<ChainedHashMap<V>, MapError>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = ChainedHashMap::new(capacity)?;
    map.extend(pairs);
    Ok(map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_pairs() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let map = try_from_pairs(10, data).unwrap();

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_try_from_pairs_zero_capacity() {
        let result = try_from_pairs(0, [("a", 1)]);
        assert_eq!(result, Err(MapError::InvalidCapacity { capacity: 0 }));
    }

    #[test]
    fn test_get_or() {
        let mut map = ChainedHashMap::new(4).unwrap();
        map.set("a", 1);

        assert_eq!(*map.get_or("a", &0), 1);
        assert_eq!(*map.get_or("b", &0), 0);
    }

    #[test]
    fn test_set_if_absent() {
        let mut map = ChainedHashMap::new(4).unwrap();

        assert!(map.set_if_absent("a", 1));
        assert!(!map.set_if_absent("a", 2));
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_update() {
        let mut map = ChainedHashMap::new(4).unwrap();
        map.set("counter", 1);

        assert!(map.update("counter", |v| *v += 1));
        assert!(!map.update("missing", |v| *v += 1));
        assert_eq!(map.get("counter"), Some(&2));
    }
}
