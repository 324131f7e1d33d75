//! Error type returned by fallible map constructors

use thiserror::Error;

/// Errors produced when building a `ChainedHashMap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested bucket count was zero
    #[error("cannot create a hash map with capacity {capacity}, capacity must be positive")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },
}
