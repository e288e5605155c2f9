//! Addressing of bits inside the packed byte storage.
//!
//! Bit positions are numbered from the most-significant bit of the first word:
//! position $`i`$ lives in word $`\lfloor i / 8 \rfloor`$ at offset $`i \bmod 8`$,
//! and offset `0` is the leftmost bit of the byte.

use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// The number of bits in a storage word.
pub const WORD_LEN: usize = u8::BITS as usize;

/// Returns the word number and the in-word offset of position `pos`.
#[inline(always)]
pub const fn locate(pos: usize) -> (usize, usize) {
    (pos / WORD_LEN, pos % WORD_LEN)
}

/// Returns a byte whose only set bit sits at `offset`, counted from the most-significant bit.
///
/// `offset` must be less than [`WORD_LEN`].
#[inline(always)]
pub const fn basis(offset: usize) -> u8 {
    0x80 >> offset
}

/// Returns the smallest number of words covering `num_bits` bits, never less than one.
#[inline(always)]
pub const fn words_for(num_bits: usize) -> usize {
    if num_bits == 0 {
        1
    } else {
        (num_bits - 1) / WORD_LEN + 1
    }
}

/// Converts a caller-supplied index into a bit position.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `index` is negative or not an integer.
/// - [`Error::CapacityOverflow`] if `index` is non-negative but exceeds `usize`.
pub fn bit_index<T: ToPrimitive>(index: T) -> Result<usize> {
    // `to_usize` truncates floats toward zero, so check sign and fraction first.
    match index.to_f64() {
        Some(v) if v.is_nan() || v < 0.0 => {
            return Err(Error::invalid_argument(format!(
                "index must be non-negative, but got {v}."
            )));
        }
        Some(v) if v.fract() != 0.0 => {
            return Err(Error::invalid_argument(format!(
                "index must be an integer, but got {v}."
            )));
        }
        _ => {}
    }
    if let Some(pos) = index.to_usize() {
        return Ok(pos);
    }
    match index.to_i128() {
        Some(v) if v < 0 => Err(Error::invalid_argument(format!(
            "index must be non-negative, but got {v}."
        ))),
        Some(v) => Err(Error::capacity_overflow(format!(
            "index {v} cannot be addressed on this platform."
        ))),
        None => match index.to_u128() {
            Some(v) => Err(Error::capacity_overflow(format!(
                "index {v} cannot be addressed on this platform."
            ))),
            None => Err(Error::invalid_argument(
                "index must be a non-negative integer.",
            )),
        },
    }
}
