//! Hashing helpers shared by the hash-based containers.
//!
//! Digests are computed with XXH3-128 over the value's [`Hash`] stream.
//! Every call builds its own hasher state, so the functions can be used
//! from any number of threads at once.
//!
//! The digests are not cryptographically strong.
//!
//! # Examples
//!
//! ```
//! use datastructs::hashing::{hash, hash_to_bytes, Hashable};
//!
//! assert_eq!(hash_to_bytes("apple"), hash_to_bytes("apple"));
//! assert_ne!(hash("apple"), hash("pear"));
//! assert_eq!(42u32.hash_code(), hash(&42u32));
//! assert!("apple".equals(&"apple"));
//! ```
use std::hash::Hash;

use xxhash_rust::xxh3::Xxh3;

/// The number of bytes in a digest.
pub const DIGEST_LEN: usize = 16;

/// Returns the 128-bit digest of `value` as little-endian bytes.
pub fn hash_to_bytes<T: Hash + ?Sized>(value: &T) -> [u8; DIGEST_LEN] {
    digest128(value).to_le_bytes()
}

/// Returns a 64-bit hash code built from the first eight digest bytes in little-endian order.
pub fn hash<T: Hash + ?Sized>(value: &T) -> u64 {
    hash_to_bytes(value)[..8]
        .iter()
        .enumerate()
        .fold(0u64, |code, (i, &b)| code | (u64::from(b) << (i * 8)))
}

pub(crate) fn digest128<T: Hash + ?Sized>(value: &T) -> u128 {
    let mut state = Xxh3::new();
    value.hash(&mut state);
    state.digest128()
}

/// Capability pair used by [`HashSet`](crate::hash_set::HashSet) to place and compare elements.
///
/// Implementations must keep the two consistent: values that are
/// [`equals`](Self::equals) must report the same [`hash_code`](Self::hash_code).
/// Every `Hash + Eq` type gets an implementation based on [`hash`].
pub trait Hashable {
    /// Returns the hash code of this value.
    fn hash_code(&self) -> u64;

    /// Checks if this value equals `other`.
    fn equals(&self, other: &Self) -> bool;
}

impl<T: Hash + Eq + ?Sized> Hashable for T {
    fn hash_code(&self) -> u64 {
        hash(self)
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}
