//! Bloom filter backed by a [`BitVector`].
//!
//! A value is mapped to $`k`$ positions in $`[0, m)`$ by double hashing:
//! with $`h_1`$ and $`h_2`$ the two 64-bit halves of the value's 128-bit digest,
//! the $`i`$-th position is $`(h_1 + i \cdot h_2) \bmod m`$.
//! Membership queries never return false negatives.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use datastructs::bloom_filter::BloomFilter;
//!
//! let mut filter = BloomFilter::with_rate(100, 0.01)?;
//! filter.insert("apple");
//!
//! assert!(filter.contains("apple"));
//! # Ok(())
//! # }
//! ```
use std::f64::consts::LN_2;
use std::hash::Hash;

use tracing::debug;

use crate::bit_vector::{Access, BitVector, NumBits};
use crate::error::{Error, Result};
use crate::hashing::digest128;

/// Probabilistic set membership over a fixed number of bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    bits: BitVector,
    num_bits: usize,
    num_hashes: u32,
}

impl BloomFilter {
    /// Creates an empty filter of `num_bits` bits probed by `num_hashes` positions per value.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `num_bits` or `num_hashes` is zero.
    /// - [`Error::CapacityOverflow`] if the bits cannot be allocated.
    pub fn new(num_bits: usize, num_hashes: u32) -> Result<Self> {
        if num_bits == 0 {
            return Err(Error::invalid_argument("num_bits must be positive."));
        }
        if num_hashes == 0 {
            return Err(Error::invalid_argument("num_hashes must be positive."));
        }
        Ok(Self {
            bits: BitVector::try_new(num_bits)?,
            num_bits,
            num_hashes,
        })
    }

    /// Creates an empty filter sized for `expected_items` values at the given false positive rate.
    ///
    /// The sizes follow $`m = \lceil -n \ln p / (\ln 2)^2 \rceil`$ and
    /// $`k = \max(1, \mathrm{round}(m \ln 2 / n))`$.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `false_positive_rate` is not in `(0, 1)`.
    /// - [`Error::CapacityOverflow`] if the required bits cannot be allocated.
    pub fn with_rate(expected_items: usize, false_positive_rate: f64) -> Result<Self> {
        if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
            return Err(Error::invalid_argument(format!(
                "false_positive_rate must be in (0, 1), but got {false_positive_rate}."
            )));
        }
        let n = expected_items.max(1) as f64;
        let m = (-n * false_positive_rate.ln() / (LN_2 * LN_2)).ceil();
        if !m.is_finite() || m >= usize::MAX as f64 {
            return Err(Error::capacity_overflow(format!(
                "{expected_items} items at rate {false_positive_rate} need too many bits."
            )));
        }
        let num_bits = (m as usize).max(1);
        let num_hashes = ((num_bits as f64 / n) * LN_2).round().max(1.0) as u32;
        debug!(
            expected_items,
            false_positive_rate, num_bits, num_hashes, "sized bloom filter"
        );
        Self::new(num_bits, num_hashes)
    }

    /// Returns the number of bits addressed by the filter.
    pub const fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Returns the number of positions probed per value.
    pub const fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Returns the backing bit vector.
    pub const fn bit_vector(&self) -> &BitVector {
        &self.bits
    }

    /// Adds `value` to the filter.
    pub fn insert<T: Hash + ?Sized>(&mut self, value: &T) {
        for pos in self.positions(value) {
            self.bits.put(pos, true);
        }
    }

    /// Checks if `value` may have been inserted.
    ///
    /// A `false` answer is always exact.
    pub fn contains<T: Hash + ?Sized>(&self, value: &T) -> bool {
        self.positions(value)
            .all(|pos| self.bits.access(pos) == Some(true))
    }

    /// Removes every value from the filter.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Adds every value of `other` to this filter.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the two filters differ in size or hash count.
    pub fn union(&mut self, other: &BloomFilter) -> Result<()> {
        if self.num_bits != other.num_bits || self.num_hashes != other.num_hashes {
            return Err(Error::invalid_argument(format!(
                "filters must share parameters, but got ({}, {}) and ({}, {}).",
                self.num_bits, self.num_hashes, other.num_bits, other.num_hashes
            )));
        }
        self.bits.or_with(&other.bits);
        Ok(())
    }

    /// Returns the fraction of the filter's bits that are set.
    pub fn fill_ratio(&self) -> f64 {
        self.bits.num_ones() as f64 / self.num_bits as f64
    }

    fn positions<T: Hash + ?Sized>(&self, value: &T) -> impl Iterator<Item = usize> {
        let digest = digest128(value);
        let h1 = digest as u64;
        let h2 = (digest >> 64) as u64;
        let m = self.num_bits as u64;
        (0..u64::from(self.num_hashes))
            .map(move |i| (h1.wrapping_add(i.wrapping_mul(h2)) % m) as usize)
    }
}
