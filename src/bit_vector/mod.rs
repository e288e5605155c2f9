//! Top module for the growable bit vector.
//!
//! # Introduction
//!
//! [`BitVector`] is a mutable sequence of bits packed into bytes (called *words* here).
//! Let $`W`$ be the number of allocated words; the vector then stores $`8W`$ bits,
//! and every position at or beyond $`8W`$ is treated as an implicit `0`.
//! Reading such a position never allocates, while writing it grows the storage.
//!
//! Within a word, position `0` is the most-significant bit, so the vector
//! `[0b1000_0000]` has its first bit set.
//!
//! # Growth
//!
//! When a write needs $`w`$ words and only $`W < w`$ are allocated,
//! the storage is reallocated to $`\max(2W, w)`$ words.
//! The word count therefore never shrinks, and appending bit by bit costs amortized $`O(1)`$.
//!
//! # Logical operations
//!
//! Negation works on the allocated prefix only; the implicit tail stays zero.
//! Binary operations grow the receiver to the larger of the two word counts
//! and read missing words of either operand as zero. In particular,
//! [`BitVector::and_with`] clears every receiver word the other vector does not allocate.
//!
//! | Operation | In place | Returning a copy | Operator |
//! | --- | --- | --- | --- |
//! | NOT | [`BitVector::negate`] | [`not`] | `!v` |
//! | OR | [`BitVector::or_with`] | [`or`] | `&v \| &w`, `v \|= &w` |
//! | AND | [`BitVector::and_with`] | [`and`] | `&v & &w`, `v &= &w` |
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use datastructs::bit_vector::*;
//!
//! let mut v = BitVector::new(8);
//! v.set(0, true)?;
//! v.set(17, true)?;
//!
//! assert_eq!(v.num_words(), 3);
//! assert_eq!(v.get_int(17)?, 1);
//! assert_eq!(v.get(100)?, false);
//! assert!(v.set(-1, true).is_err());
//!
//! let w = not(&v);
//! assert_eq!(w.to_string(), "011111111111111110111111");
//! assert_eq!(and(&v, &w).num_ones(), 0);
//! # Ok(())
//! # }
//! ```
mod builder;
pub mod layout;
mod ops;
pub mod prelude;

pub use builder::BitVectorBuilder;
pub use layout::WORD_LEN;
pub use ops::{and, not, or};

use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::ToPrimitive;
use tracing::debug;

use crate::error::{Error, Result};
use layout::{basis, bit_index, locate, words_for};

/// Interface for reporting basic statistics in a bit vector.
pub trait NumBits {
    /// Returns the number of bits stored.
    fn num_bits(&self) -> usize;

    /// Returns the number of bits set.
    fn num_ones(&self) -> usize;

    /// Returns the number of bits unset.
    #[inline(always)]
    fn num_zeros(&self) -> usize {
        self.num_bits() - self.num_ones()
    }
}

/// Interface for accessing materialized bits.
pub trait Access {
    /// Returns the `pos`-th bit, or [`None`] if it lies beyond the allocated storage.
    fn access(&self, pos: usize) -> Option<bool>;
}

/// Growable bit vector packed into bytes.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use datastructs::bit_vector::BitVector;
///
/// let mut v = BitVector::new(16);
/// v.set(1, true)?;
/// v.set(9, true)?;
///
/// assert_eq!(v.len(), 16);
/// assert_eq!(v.words(), &[0b0100_0000, 0b0100_0000]);
/// assert_eq!(v, BitVector::from_words([0x40, 0x40, 0x00]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BitVector {
    words: Vec<u8>,
}

impl BitVector {
    /// Creates a zeroed vector able to hold at least `min_bits` bits without growing.
    ///
    /// At least one word is always allocated.
    pub fn new(min_bits: usize) -> Self {
        Self {
            words: vec![0; words_for(min_bits)],
        }
    }

    /// Creates a zeroed vector like [`Self::new`], reporting a refused allocation.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if the allocator cannot provide the words.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastructs::{BitVector, Error};
    ///
    /// assert_eq!(BitVector::try_new(9).unwrap().num_words(), 2);
    /// assert!(matches!(
    ///     BitVector::try_new(usize::MAX),
    ///     Err(Error::CapacityOverflow(_))
    /// ));
    /// ```
    pub fn try_new(min_bits: usize) -> Result<Self> {
        let num_words = words_for(min_bits);
        let mut words = Vec::new();
        words.try_reserve_exact(num_words)?;
        words.resize(num_words, 0);
        Ok(Self { words })
    }

    /// Creates a vector from raw words.
    ///
    /// An empty input yields a single zero word.
    pub fn from_words<W>(words: W) -> Self
    where
        W: Into<Vec<u8>>,
    {
        let mut words = words.into();
        if words.is_empty() {
            words.push(0);
        }
        Self { words }
    }

    /// Returns the number of allocated bits, i.e., eight times [`Self::num_words`].
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len() * WORD_LEN
    }

    /// Checks if no bit is allocated, which never happens for a live vector.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of allocated words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Returns the allocated words.
    #[inline(always)]
    pub fn words(&self) -> &[u8] {
        &self.words
    }

    /// Sets the bit at `index` to `bit`, growing the storage if needed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `index` is negative.
    /// - [`Error::CapacityOverflow`] if the words
    ///   covering `index` cannot be allocated.
    pub fn set<T: ToPrimitive>(&mut self, index: T, bit: bool) -> Result<()> {
        let pos = bit_index(index)?;
        self.accommodate(pos)?;
        self.put(pos, bit);
        Ok(())
    }

    /// Returns the bit at `index` as `0` or `1`.
    ///
    /// Positions beyond the allocated storage read as `0`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `index` is negative.
    pub fn get_int<T: ToPrimitive>(&self, index: T) -> Result<u8> {
        match bit_index(index) {
            Ok(pos) => Ok(self.bit(pos)),
            // Unaddressable positions lie beyond any allocation.
            Err(Error::CapacityOverflow(_)) => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `index` is negative.
    pub fn get<T: ToPrimitive>(&self, index: T) -> Result<bool> {
        Ok(self.get_int(index)? == 1)
    }

    /// Resets all bits to `0`, keeping the allocated size.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Compares with an optional vector, treating [`None`] as never equal.
    pub fn equal(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Creates an iterator over all allocated bits.
    pub const fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns the `i`-th word, or `0` beyond the allocation.
    #[inline(always)]
    fn word(&self, i: usize) -> u8 {
        self.words.get(i).copied().unwrap_or(0)
    }

    #[inline(always)]
    fn bit(&self, pos: usize) -> u8 {
        let (word, offset) = locate(pos);
        (self.word(word) & basis(offset)) >> (WORD_LEN - 1 - offset)
    }

    /// Writes a bit inside the allocated storage.
    #[inline(always)]
    pub(crate) fn put(&mut self, pos: usize, bit: bool) {
        let (word, offset) = locate(pos);
        if bit {
            self.words[word] |= basis(offset);
        } else {
            self.words[word] &= !basis(offset);
        }
    }

    /// Grows the storage so that position `pos` is allocated.
    ///
    /// The new word count is the larger of twice the current one and the one needed.
    fn accommodate(&mut self, pos: usize) -> Result<()> {
        let (word, _) = locate(pos);
        let needed = word + 1;
        let current = self.words.len();
        if needed <= current {
            return Ok(());
        }
        let target = current.saturating_mul(2).max(needed);
        self.words.try_reserve_exact(target - current)?;
        self.grow_to(target);
        Ok(())
    }

    /// Grows the storage to exactly `num_words` words if it is smaller.
    fn grow_to(&mut self, num_words: usize) {
        let current = self.words.len();
        if num_words <= current {
            return;
        }
        self.words.resize(num_words, 0);
        debug!(from = current, to = num_words, "reallocated bit vector");
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NumBits for BitVector {
    fn num_bits(&self) -> usize {
        self.len()
    }

    fn num_ones(&self) -> usize {
        self.count_ones()
    }
}

impl Access for BitVector {
    fn access(&self, pos: usize) -> Option<bool> {
        if pos < self.len() {
            Some(self.bit(pos) == 1)
        } else {
            None
        }
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        let n = self.words.len().max(other.words.len());
        (0..n).all(|i| self.word(i) == other.word(i))
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Trailing zero words do not change equality, so they must not change the hash.
        let end = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1);
        self.words[..end].hash(state);
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the allocated bits of a [`BitVector`].
pub struct Iter<'a> {
    bv: &'a BitVector,
    pos: usize,
}

impl<'a> Iter<'a> {
    /// Creates a new iterator.
    pub const fn new(bv: &'a BitVector) -> Self {
        Self { bv, pos: 0 }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.bv.access(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bv.len() - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    const SEED: u64 = 113;

    #[test]
    fn test_allocation_size() {
        for n in 1..=8 {
            assert_eq!(BitVector::new(n).num_words(), 1, "n = {n}");
        }
        for n in 9..=16 {
            assert_eq!(BitVector::new(n).num_words(), 2, "n = {n}");
        }
        assert_eq!(BitVector::new(0).num_words(), 1);
        assert_eq!(BitVector::default().len(), 8);
    }

    #[test]
    fn test_try_new() {
        for n in [0, 1, 8, 9, 16, 17, 1000] {
            let v = BitVector::try_new(n).unwrap();
            assert_eq!(v, BitVector::new(n));
            assert_eq!(v.num_words(), BitVector::new(n).num_words(), "n = {n}");
        }
        assert!(matches!(
            BitVector::try_new(usize::MAX),
            Err(Error::CapacityOverflow(_))
        ));
    }

    #[test]
    fn test_growth() {
        let mut v = BitVector::new(1);
        v.set(1, true).unwrap();
        assert_eq!(v.num_words(), 1);
        v.set(7, true).unwrap();
        assert_eq!(v.num_words(), 1);
        v.set(8, true).unwrap();
        assert_eq!(v.num_words(), 2);

        let mut w = BitVector::new(1);
        w.set(17, true).unwrap();
        assert_eq!(w.num_words(), 3);
        assert_eq!(w.get_int(17).unwrap(), 1);

        // Doubling wins over the exact need for small steps.
        let mut z = BitVector::new(16);
        z.set(16, false).unwrap();
        assert_eq!(z.num_words(), 4);
    }

    #[test]
    fn test_growth_monotonic() {
        let mut rng = ChaChaRng::seed_from_u64(SEED);
        let mut v = BitVector::new(1);
        let mut pos = 0usize;
        for _ in 0..200 {
            pos += rng.gen_range(1..64);
            let prev = v.num_words();
            v.set(pos, true).unwrap();
            let needed = pos / 8 + 1;
            assert!(v.num_words() >= prev);
            assert!(v.num_words() <= (2 * prev).max(needed));
            assert!(v.num_words() >= needed);
        }
    }

    #[test]
    fn test_set_get() {
        let mut v = BitVector::new(8);
        v.set(0, true).unwrap();
        assert!(v.get(0).unwrap());
        assert_eq!(v.get_int(0).unwrap(), 1);
        for i in 1..8 {
            assert!(!v.get(i).unwrap());
            assert_eq!(v.get_int(i).unwrap(), 0);
        }

        let mut w = BitVector::new(16);
        for i in 0..16 {
            w.set(i, true).unwrap();
        }
        for i in 0..16 {
            assert!(w.get(i).unwrap());
            assert_eq!(w.get_int(i).unwrap(), 1);
        }
        w.set(3, false).unwrap();
        assert_eq!(w.words(), &[0b1110_1111, 0xff]);
    }

    #[test]
    fn test_set_get_random() {
        let mut rng = ChaChaRng::seed_from_u64(SEED);
        let mut v = BitVector::new(1);
        let mut expected = vec![false; 1000];
        for _ in 0..5000 {
            let pos = rng.gen_range(0..expected.len());
            let bit = rng.gen_bool(0.5);
            v.set(pos, bit).unwrap();
            expected[pos] = bit;
            assert_eq!(v.get(pos).unwrap(), bit);
        }
        for (pos, &bit) in expected.iter().enumerate() {
            assert_eq!(v.get(pos).unwrap(), bit, "pos = {pos}");
        }
    }

    #[test]
    fn test_read_beyond_allocation() {
        let v = BitVector::new(8);
        assert_eq!(v.get_int(8).unwrap(), 0);
        assert_eq!(v.get_int(1usize << 40).unwrap(), 0);
        assert_eq!(v.get_int(u128::MAX).unwrap(), 0);
        assert!(!v.get(1000).unwrap());
        assert_eq!(v.num_words(), 1);
        assert_eq!(v.access(8), None);
    }

    #[test]
    fn test_negative_index() {
        let mut v = BitVector::new(8);
        assert!(matches!(v.set(-1, true), Err(Error::InvalidArgument(_))));
        assert!(matches!(v.get(-3i64), Err(Error::InvalidArgument(_))));
        assert!(matches!(v.get_int(i8::MIN), Err(Error::InvalidArgument(_))));
        assert_eq!(v.num_words(), 1);
    }

    #[test]
    fn test_fractional_index() {
        let mut v = BitVector::new(8);
        v.set(0, true).unwrap();
        assert!(matches!(v.set(-0.5f64, true), Err(Error::InvalidArgument(_))));
        assert!(matches!(v.set(2.9f64, true), Err(Error::InvalidArgument(_))));
        assert!(matches!(v.get(-0.9f64), Err(Error::InvalidArgument(_))));
        assert!(matches!(v.get(2.5f64), Err(Error::InvalidArgument(_))));
        assert_eq!(v.words(), &[0b1000_0000]);

        v.set(2.0f64, true).unwrap();
        assert!(v.get(2.0f32).unwrap());
    }

    #[test]
    fn test_capacity_overflow() {
        let mut v = BitVector::new(8);
        assert!(matches!(
            v.set(u128::MAX, true),
            Err(Error::CapacityOverflow(_))
        ));
        assert!(matches!(
            v.set(usize::MAX, true),
            Err(Error::CapacityOverflow(_))
        ));
        assert_eq!(v.num_words(), 1);
    }

    #[test]
    fn test_clear() {
        let mut v = BitVector::new(1);
        v.set(20, true).unwrap();
        v.set(2, true).unwrap();
        let words = v.num_words();
        v.clear();
        assert_eq!(v.num_words(), words);
        assert_eq!(v.count_ones(), 0);
    }

    #[test]
    fn test_copy_independence() {
        let mut v = BitVector::new(16);
        let mut w = v.clone();
        assert_eq!(v.num_words(), w.num_words());

        w.set(3, true).unwrap();
        assert!(!v.get(3).unwrap());
        v.set(30, true).unwrap();
        assert!(!w.get(30).unwrap());
        assert_eq!(w.num_words(), 2);
    }

    #[test]
    fn test_equal() {
        let v = BitVector::new(16);
        let mut w = BitVector::new(8);
        assert_eq!(v, w);
        assert_eq!(w, v);
        assert!(v.equal(Some(&w)));
        assert!(!v.equal(None));

        w.negate();
        assert_ne!(v, w);
        assert_ne!(w, v);

        let mut x = BitVector::new(8);
        x.set(9, true).unwrap();
        assert_ne!(x, BitVector::new(8));
        assert_eq!(x, BitVector::from_words([0x00, 0x40, 0x00, 0x00]));
    }

    #[test]
    fn test_hash_follows_equality() {
        use std::collections::hash_map::DefaultHasher;

        fn digest(bv: &BitVector) -> u64 {
            let mut h = DefaultHasher::new();
            bv.hash(&mut h);
            h.finish()
        }

        let v = BitVector::from_words([0x12]);
        let w = BitVector::from_words([0x12, 0x00, 0x00]);
        assert_eq!(v, w);
        assert_eq!(digest(&v), digest(&w));
        assert_eq!(digest(&BitVector::new(8)), digest(&BitVector::new(64)));
    }

    #[test]
    fn test_display() {
        let mut v = BitVector::new(16);
        v.set(0, true).unwrap();
        v.set(9, true).unwrap();
        v.set(15, true).unwrap();
        assert_eq!(v.to_string(), "1000000001000001");
        assert_eq!(v.to_string().len(), v.len());
        assert_eq!(BitVector::new(3).to_string(), "00000000");
    }

    #[test]
    fn test_iter() {
        let v = BitVector::from_words([0b1010_0000]);
        let bits: Vec<bool> = v.iter().collect();
        assert_eq!(
            bits,
            vec![true, false, true, false, false, false, false, false]
        );
        assert_eq!(v.iter().len(), 8);
        assert_eq!((&v).into_iter().filter(|&b| b).count(), 2);
    }

    #[test]
    fn test_num_bits() {
        let v = BitVector::from_words([0xf0, 0x01]);
        assert_eq!(v.num_bits(), 16);
        assert_eq!(v.num_ones(), 5);
        assert_eq!(v.num_zeros(), 11);
        assert_eq!(v.access(7), Some(false));
        assert_eq!(v.access(15), Some(true));
    }

    #[test]
    fn test_from_words() {
        assert_eq!(BitVector::from_words(Vec::<u8>::new()).num_words(), 1);
        assert_eq!(BitVector::from_words(vec![1u8, 2, 3]).words(), &[1, 2, 3]);
    }
}
