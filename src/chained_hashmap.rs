use std::num::NonZeroUsize;

use log::{debug, error, trace};

use crate::{
    bucket::Bucket,
    entry::{Entry, fnv1a_32},
    error::MapError,
};

/// Number of buckets used by `ChainedHashMap::default`
#[allow(clippy::unwrap_used)]
pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(64).unwrap();

/// A fixed-capacity, string-keyed hash map with separate chaining.
///
/// Each key is hashed with 32-bit FNV-1a and routed to bucket `hash % capacity`. Keys that
/// collide share a bucket chain which is searched linearly. The number of buckets is chosen
/// at construction and never changes, so the load factor grows without bound as entries are
/// added.
///
/// Note: This implementation has no internal synchronization. Mutation requires `&mut self`;
/// to share a map between threads wrap it in an external guard such as
/// `std::sync::Mutex<ChainedHashMap<V>>`.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// The bucket chains, one per index in `[0, capacity)`
    buckets: Box<[Bucket<V>]>,
    /// Number of live entries across all buckets
    count: usize,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// Two maps are equal when they have the same capacity and hold the same key-value pairs,
/// regardless of the order colliding keys were inserted in.
impl<V: PartialEq> PartialEq for ChainedHashMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count &&
            self.buckets.len() == other.buckets.len() &&
            self.buckets
                .iter()
                .flat_map(Bucket::entries)
                .all(|entry| other.get(entry.key()) == Some(entry.value()))
    }
}

impl<V: Eq> Eq for ChainedHashMap<V> {}

impl<K, V> Extend<(K, V)> for ChainedHashMap<V>
where
    K: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<V> ChainedHashMap<V> {
    /// Creates a map with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, MapError> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or(MapError::InvalidCapacity { capacity })
    }

    /// Creates a map with the given non-zero number of buckets
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        debug!("creating chained hash map with {capacity} buckets");
        let buckets = std::iter::repeat_with(Bucket::new).take(capacity.get()).collect();
        Self { buckets, count: 0 }
    }

    /// Returns the bucket index `key` routes to.
    ///
    /// The index is always in `[0, capacity)`.
    #[must_use]
    pub fn bucket_index(&self, key: &str) -> usize {
        let hash = fnv1a_32(key);
        let index = usize::try_from(hash)
            .ok()
            .and_then(|hash| hash.checked_rem(self.buckets.len()))
            .unwrap_or_default();
        trace!("key {key:?} hashed to {hash:#010x}, bucket {index}");
        index
    }

    /// Returns the bucket `key` routes to
    fn bucket(&self, key: &str) -> Option<&Bucket<V>> {
        let index = self.bucket_index(key);
        debug_assert!(index < self.buckets.len(), "bucket index {index} out of range");
        self.buckets.get(index)
    }

    /// Returns the bucket `key` routes to, mutably
    fn bucket_mut(&mut self, key: &str) -> Option<&mut Bucket<V>> {
        let index = self.bucket_index(key);
        debug_assert!(index < self.buckets.len(), "bucket index {index} out of range");
        self.buckets.get_mut(index)
    }

    /// Sets the value for `key`, overwriting any value already stored.
    ///
    /// Overwriting leaves the entry count unchanged. Returns `false` only if the key routed
    /// outside the bucket table, which cannot happen for a map built through its
    /// constructors.
    pub fn set<K: Into<String>>(&mut self, key: K, value: V) -> bool {
        let key = key.into();
        let Some(bucket) = self.bucket_mut(&key) else {
            error!("set: bucket index for key {key:?} is out of range");
            return false;
        };

        if let Some(entry) = bucket.find_mut(&key) {
            debug!("overwriting value for key {key:?}");
            entry.replace(value);
            return true;
        }

        debug!("inserting new key {key:?}");
        bucket.push(Entry::new(key, value));
        self.count = self.count.saturating_add(1);
        true
    }

    /// Retrieves the value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.bucket(key)?.find(key).map(Entry::value)
    }

    /// Retrieves a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.bucket_mut(key)?.find_mut(key).map(Entry::value_mut)
    }

    /// Returns true if the map holds a value for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` from the map and returns its value.
    ///
    /// Returns `None`, leaving the entry count unchanged, if the key was not present.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let removed = self.bucket_mut(key)?.remove(key)?;
        debug!("deleted key {key:?}");
        self.count = self.count.saturating_sub(1);
        Some(removed.into_value())
    }

    /// Returns the load factor, `len / capacity`.
    ///
    /// Returns `None` if the map has no buckets.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load(&self) -> Option<f64> {
        if self.buckets.is_empty() {
            return None;
        }
        Some(self.count as f64 / self.buckets.len() as f64)
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of buckets in the map
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the chain length of every bucket, indexed by bucket
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Bucket::len).collect()
    }

    /// Returns the length of the longest chain
    #[must_use]
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).max().unwrap_or_default()
    }

    /// Removes every entry, keeping the bucket count
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.count = 0;
    }
}
