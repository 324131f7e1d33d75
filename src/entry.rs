//! Key/value entries and the FNV-1a routing hash

/// FNV-1a 32-bit offset basis
const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
/// FNV-1a 32-bit prime
const FNV_PRIME: u32 = 0x0100_0193;

/// Hashes a key with 32-bit FNV-1a over its UTF-8 bytes.
///
/// The result only depends on the key bytes, so a key keeps mapping to the same bucket for
/// the whole lifetime of a map.
#[must_use]
pub fn fnv1a_32(key: &str) -> u32 {
    key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME))
}

/// A key-value pair stored in a bucket chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

impl<V> Entry<V> {
    /// Creates an entry for `key` holding `value`
    #[must_use]
    pub fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the entry key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns a reference to the stored value
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the stored value
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the stored value, returning the previous one
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry and returns its value
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }
}
