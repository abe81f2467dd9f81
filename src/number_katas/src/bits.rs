//! Bit-pattern helpers.
//!
//! The neighbor search finds the closest integers above and below a value that
//! have the same number of set bits. Instead of scanning it uses the constant
//! time carry trick: add the lowest set bit to ripple a carry into the next
//! zero, then shift the ones the carry swallowed back down to the bottom. A
//! carry out of the top of the type means there is no higher neighbor in that
//! width, so the result is `None` rather than a wrap-around or an endless scan.

use log::debug;
use num_traits::{PrimInt, Unsigned};

use crate::NumberError;

/// The closest integers on either side of a value with the same popcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopcountNeighbors {
    /// Smallest larger integer with the same popcount that fits in an `i64`.
    pub next_highest: Option<i64>,
    /// Largest smaller non-negative integer with the same popcount.
    pub next_lowest: Option<i64>,
}

/// Smallest `y > x` with `y.count_ones() == x.count_ones()`, or `None` if it
/// does not fit in `T`.
#[must_use]
pub fn next_higher_same_popcount<T: PrimInt + Unsigned>(x: T) -> Option<T> {
    if x.is_zero() {
        return None;
    }

    let shift = x.trailing_zeros() as usize;
    let lowest = T::one() << shift;
    let rippled = x.checked_add(&lowest)?;

    // The bits that changed are the swallowed run of ones plus the bit the carry
    // landed on. Two of them are accounted for by `rippled`, the rest move to the
    // bottom. Shifting in two steps keeps the shift amount under the bit width.
    let ones = ((x ^ rippled) >> 2) >> shift;

    Some(rippled | ones)
}

/// Largest `y < x` with `y.count_ones() == x.count_ones()`, or `None` if
/// there is none.
///
/// Mirrors [`next_higher_same_popcount`] on the complement: flipping every bit
/// reverses the order and keeps popcounts equal to each other.
#[must_use]
pub fn next_lower_same_popcount<T: PrimInt + Unsigned>(x: T) -> Option<T> {
    next_higher_same_popcount(!x).map(|y| !y)
}

/// Neighbor search over `i64`.
///
/// A higher neighbor that only exists above `i64::MAX` is reported as absent.
///
/// # Errors
///
/// Returns [`NumberError::NegativeInput`] for negative `x`.
pub fn popcount_neighbors(x: i64) -> Result<PopcountNeighbors, NumberError> {
    let wide = u64::try_from(x).map_err(|_| NumberError::NegativeInput(x))?;

    let neighbors = PopcountNeighbors {
        next_highest: next_higher_same_popcount(wide).and_then(|y| i64::try_from(y).ok()),
        next_lowest: next_lower_same_popcount(wide).and_then(|y| i64::try_from(y).ok()),
    };

    debug!(
        "Neighbors of {x} ({} set bits): {neighbors:?}",
        x.count_ones()
    );

    Ok(neighbors)
}

/// Reverse the low eight bits of `|x|`, keeping any higher bits where they are
/// and the sign as it was.
///
/// `32` (`0010_0000`) becomes `4` (`0000_0100`) and `-41` becomes `-148`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn binary_reverse(x: i64) -> i64 {
    let magnitude = x.unsigned_abs();
    let low = magnitude.to_le_bytes()[0];
    let reversed = (magnitude & !0xFF) | u64::from(low.reverse_bits());

    // i64::MIN has no low bits to move, so its magnitude survives the cast back
    let reversed = reversed as i64;
    if x < 0 {
        reversed.wrapping_neg()
    } else {
        reversed
    }
}
