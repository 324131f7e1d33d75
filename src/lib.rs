//! # Chain Map
//!
//! A Rust implementation of a fixed-capacity hash table with separate chaining.
//!
//! `ChainedHashMap` stores string keys and values of any type. Each key is hashed with
//! 32-bit FNV-1a and routed to one of a fixed number of buckets; keys that collide share the
//! bucket's chain, which is searched linearly. The bucket count is set at construction and
//! never changes: there is no resizing, so the load factor simply tracks `len / capacity`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a map with 100 buckets
//! let mut map = ChainedHashMap::new(100)?;
//!
//! // Insert values
//! map.set("apple", 1);
//! map.set("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//! assert_eq!(map.load(), Some(0.02));
//!
//! // Update values, the entry count does not change
//! map.set("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! assert_eq!(map.delete("apple"), Some(10));
//! assert_eq!(map.get("apple"), None);
//! # Ok::<(), chainmap::MapError>(())
//! ```
//!
//! ## Invalid Capacity
//!
//! ```rust
//! use chainmap::{ChainedHashMap, MapError};
//!
//! let result = ChainedHashMap::<i32>::new(0);
//! assert_eq!(result, Err(MapError::InvalidCapacity { capacity: 0 }));
//! ```
//!
//! ## Sharing Between Threads
//!
//! The map has no internal locking. Wrap it in a mutex to share it:
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//! use std::sync::{Arc, Mutex};
//! use std::thread;
//!
//! let map = Arc::new(Mutex::new(ChainedHashMap::new(16)?));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || {
//!             for i in 0..25 {
//!                 map.lock().unwrap().set(format!("key-{t}-{i}"), i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(map.lock().unwrap().len(), 100);
//! # Ok::<(), chainmap::MapError>(())
//! ```

/// Module implementing a bucket chain
mod bucket;
/// Module implementing the fixed-capacity chained hash map
mod chained_hashmap;
/// Module implementing entries and the routing hash
mod entry;
/// Error types for map construction
mod error;
/// Utility functions and traits for the hash map
mod utils;

pub use bucket::Bucket;
pub use chained_hashmap::{ChainedHashMap, DEFAULT_CAPACITY};
pub use entry::{Entry, fnv1a_32};
pub use error::MapError;
pub use utils::{MapExtensions, try_from_pairs};
