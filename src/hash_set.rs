//! Chained hash set keyed by the [`Hashable`] capability.
//!
//! Elements are spread over a fixed number of bins by `hash_code() % capacity`,
//! and each bin keeps its colliding elements in a bucket that is scanned with
//! [`Hashable::equals`]. A larger capacity means fewer collisions.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use datastructs::hash_set::HashSet;
//!
//! let mut set = HashSet::new(16)?;
//! assert!(set.put("apple"));
//! assert!(!set.put("apple"));
//! assert!(set.contains(&"apple"));
//!
//! assert_eq!(set.remove(&"apple"), Some("apple"));
//! assert!(set.is_empty());
//! # Ok(())
//! # }
//! ```
use std::collections::HashMap;

use tracing::trace;

use crate::error::{Error, Result};
use crate::hashing::Hashable;

/// Hash set with a fixed number of bins.
#[derive(Debug, Clone)]
pub struct HashSet<T> {
    bins: HashMap<u64, Vec<T>>,
    capacity: u64,
    len: usize,
}

impl<T: Hashable> HashSet<T> {
    /// Creates an empty set spreading elements over `capacity` bins.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_argument("capacity must be positive."));
        }
        Ok(Self {
            bins: HashMap::new(),
            capacity: capacity as u64,
            len: 0,
        })
    }

    /// Returns the number of bins.
    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    /// Returns the number of elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the set has no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value`, returning `true` if it was not present yet.
    ///
    /// An already present value is left in place and `value` is dropped.
    pub fn put(&mut self, value: T) -> bool {
        let bin = self.bin_of(&value);
        let bucket = self.bins.entry(bin).or_insert_with(|| {
            trace!(bin, "created hash set bin");
            Vec::new()
        });
        if bucket.iter().any(|x| x.equals(&value)) {
            return false;
        }
        bucket.push(value);
        self.len += 1;
        true
    }

    /// Removes the element equal to `value` and returns it.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let bin = self.bin_of(value);
        let bucket = self.bins.get_mut(&bin)?;
        let pos = bucket.iter().position(|x| x.equals(value))?;
        let removed = bucket.swap_remove(pos);
        if bucket.is_empty() {
            self.bins.remove(&bin);
        }
        self.len -= 1;
        Some(removed)
    }

    /// Checks if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.bins
            .get(&self.bin_of(value))
            .is_some_and(|bucket| bucket.iter().any(|x| x.equals(value)))
    }

    /// Creates an iterator over the elements in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.bins.values().flatten()
    }

    fn bin_of(&self, value: &T) -> u64 {
        value.hash_code() % self.capacity
    }
}
