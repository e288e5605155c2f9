//! Logical operations on [`BitVector`].
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use super::BitVector;

impl BitVector {
    /// Complements every allocated bit in place.
    ///
    /// The implicit zero tail is not affected, so negating twice restores the vector.
    pub fn negate(&mut self) {
        for w in self.words.iter_mut() {
            *w = !*w;
        }
    }

    /// ORs `other` into this vector, growing it to `other`'s word count if smaller.
    pub fn or_with(&mut self, other: &BitVector) {
        self.grow_to(other.num_words());
        for (x, &y) in self.words.iter_mut().zip(other.words.iter()) {
            *x |= y;
        }
    }

    /// ANDs `other` into this vector, growing it to `other`'s word count if smaller.
    ///
    /// Words beyond `other`'s allocation are cleared, since `other` reads as zero there.
    pub fn and_with(&mut self, other: &BitVector) {
        self.grow_to(other.num_words());
        for (i, x) in self.words.iter_mut().enumerate() {
            *x &= other.word(i);
        }
    }
}

/// Returns the negation of `v` without modifying it.
pub fn not(v: &BitVector) -> BitVector {
    let mut z = v.clone();
    z.negate();
    z
}

/// Returns the OR of `v` and `w` without modifying them.
pub fn or(v: &BitVector, w: &BitVector) -> BitVector {
    let mut z = v.clone();
    z.or_with(w);
    z
}

/// Returns the AND of `v` and `w` without modifying them.
pub fn and(v: &BitVector, w: &BitVector) -> BitVector {
    let mut z = v.clone();
    z.and_with(w);
    z
}

impl Not for BitVector {
    type Output = BitVector;

    fn not(mut self) -> BitVector {
        self.negate();
        self
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        not(self)
    }
}

impl BitOr for &BitVector {
    type Output = BitVector;

    fn bitor(self, rhs: &BitVector) -> BitVector {
        or(self, rhs)
    }
}

impl BitAnd for &BitVector {
    type Output = BitVector;

    fn bitand(self, rhs: &BitVector) -> BitVector {
        and(self, rhs)
    }
}

impl BitOrAssign<&BitVector> for BitVector {
    fn bitor_assign(&mut self, rhs: &BitVector) {
        self.or_with(rhs);
    }
}

impl BitAndAssign<&BitVector> for BitVector {
    fn bitand_assign(&mut self, rhs: &BitVector) {
        self.and_with(rhs);
    }
}
