//! # Growable bit vectors and friends
//!
//! This crate provides a small family of in-memory containers centered on
//! [`BitVector`], a resizable sequence of bits packed into bytes.
//!
//! ## Design policy
//!
//! - **Implicit zeros:**
//!   A bit vector behaves as if it were followed by infinitely many `0`s.
//!   Reads never allocate; only writes grow the storage, and it never shrinks.
//!
//! - **Fail fast:**
//!   A negative position or an unaddressable one is reported as an [`Error`]
//!   instead of wrapping around or truncating.
//!
//! - **Ensure safety:**
//!   The crate does not use `unsafe` code.
//!
//! - **Single owner:**
//!   Containers own their storage exclusively and provide no internal locking.
//!   Share them across threads behind your own synchronization.
//!
//! ## Data structures
//!
//! - [Bit vectors](crate::bit_vector)
//! - [Bloom filters](crate::bloom_filter) backed by bit vectors
//! - [Hash sets](crate::hash_set) keyed by the [`Hashable`] capability
//! - [Prefix trees](crate::prefix_tree) over Unicode scalar values
//!
//! The [`hashing`] module provides the digests that the hash-based containers use.
//!
//! ## Logging
//!
//! Reallocations and filter sizing are reported through [`tracing`] events at
//! the `debug` level. No subscriber is installed by the crate.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod bit_vector;
pub mod bloom_filter;
pub mod builder;
pub mod error;
pub mod hash_set;
pub mod hashing;
pub mod prefix_tree;

pub use bit_vector::BitVector;
pub use bloom_filter::BloomFilter;
pub use error::{Error, Result};
pub use hash_set::HashSet;
pub use hashing::Hashable;
pub use prefix_tree::PrefixTree;
