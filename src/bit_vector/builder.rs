//! Builder for [`BitVector`].
//! This structure appends bits one after another, growing the vector
//! with the usual doubling policy.

use super::BitVector;
use crate::builder::{Build, Builder};
use crate::error::Result;

/// Builder that appends bits to a [`BitVector`].
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use datastructs::bit_vector::{BitVector, BitVectorBuilder};
/// use datastructs::builder::Builder;
///
/// let mut builder = BitVectorBuilder::new();
/// builder.extend([true, false, true])?;
/// assert_eq!(builder.len(), 3);
///
/// let bv = builder.build();
/// assert_eq!(bv.to_string(), "10100000");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BitVectorBuilder {
    bv: BitVector,
    len: usize,
}

impl BitVectorBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder reserving room for `capa` bits.
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            bv: BitVector::new(capa),
            len: 0,
        }
    }

    /// Returns the number of bits pushed so far.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if no bit has been pushed.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a single bit.
    pub fn push_bit(&mut self, bit: bool) -> Result<()> {
        self.bv.set(self.len, bit)?;
        self.len += 1;
        Ok(())
    }
}

impl Builder for BitVectorBuilder {
    type Item = bool;
    type Build = BitVector;

    fn push(&mut self, item: Self::Item) -> Result<()> {
        self.push_bit(item)
    }

    fn build(self) -> Self::Build {
        self.bv
    }
}

impl Build for BitVector {
    type Builder = BitVectorBuilder;

    fn builder() -> Self::Builder {
        BitVectorBuilder::new()
    }
}
