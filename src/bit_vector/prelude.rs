//! The prelude for bit vectors.
//!
//! The purpose of this module is to alleviate imports of many common traits for bit vectors.
//!
//! ```
//! # #![allow(unused_imports)]
//! use datastructs::bit_vector::prelude::*;
//! ```
pub use crate::bit_vector::{Access, NumBits};
pub use crate::builder::{Build, Builder};
