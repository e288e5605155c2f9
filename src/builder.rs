//! Incremental construction of the crate's containers.
//!
//! [`BitVectorBuilder`](crate::bit_vector::BitVectorBuilder) appends bits one
//! after another and [`PrefixTreeBuilder`](crate::prefix_tree::PrefixTreeBuilder)
//! inserts words. Both are reached through [`Build::builder`], and
//! [`Build::from_items`] collects a whole sequence in one call.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use datastructs::builder::{Build, Builder};
//! use datastructs::{BitVector, PrefixTree};
//!
//! let mut b = BitVector::builder();
//! b.push(true)?;
//! b.extend([false, true])?;
//! assert_eq!(b.build().to_string(), "10100000");
//!
//! let tree = PrefixTree::from_items(["tea", "ten"].map(String::from))?;
//! assert!(tree.contains("ten"));
//! # Ok(())
//! # }
//! ```

use crate::error::Result;

/// Accumulates items and yields the finished container.
pub trait Builder {
    /// Element appended by [`Self::push`], e.g. a bit or a word.
    type Item;
    /// Container returned by [`Self::build`].
    type Build;

    /// Appends one item.
    fn push(&mut self, item: Self::Item) -> Result<()>;

    /// Appends every item of `items` in order, stopping at the first error.
    ///
    /// Items pushed before the failing one stay in the builder.
    fn extend<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        items.into_iter().try_for_each(|item| self.push(item))
    }

    /// Consumes the builder.
    fn build(self) -> Self::Build;
}

/// Container that can be assembled by a [`Builder`].
pub trait Build: Sized {
    /// Builder producing this container.
    type Builder: Builder<Build = Self>;

    /// Returns an empty builder.
    fn builder() -> Self::Builder;

    /// Builds a container holding `items`.
    ///
    /// Named apart from [`FromIterator::from_iter`] since pushing may fail.
    fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = <Self::Builder as Builder>::Item>,
    {
        let mut b = Self::builder();
        b.extend(items)?;
        Ok(b.build())
    }
}
