//! The Cole-Vishkin recoloring step.
//!
//! One application takes a node's color and the color of its ring successor
//! and encodes (index of the lowest differing bit, value of that bit in the
//! node's own color). Two neighbors that differed before the step still
//! differ after it, and the encoding needs only about `log2(bits) + 1` bits,
//! so the alphabet collapses quickly: 64-bit colors reach the fixed 6-color
//! alphabet `{0..5}` after 4 rounds.

use crate::error::{InvariantViolation, fatal};
use crate::ring::Color;

/// Number of bits in a [`Color`].
pub const COLOR_BITS: u32 = Color::BITS;

/// Size of the alphabet the rule converges to.
pub const FIXED_POINT_COLORS: u64 = 6;

/// Compute the new color of a node from its own color and its successor's.
///
/// Panics (fatally) if the two colors are equal, which means the input ring
/// was not properly colored.
#[inline(always)]
pub fn recolor(which: Color, with: Color) -> Color {
    let xored = which ^ with;
    if xored == 0 {
        fatal(InvariantViolation::EqualNeighbors(which));
    }
    let num = Color::from(xored.trailing_zeros());
    let orig_bit = 1 & (which >> num);
    orig_bit | (num << 1)
}

/// Recolor `colors[i]` in place from `colors[i + 1]`.
#[inline(always)]
pub fn recolor_at(colors: &mut [Color], i: usize) {
    colors[i] = recolor(colors[i], colors[i + 1]);
}

/// Bits needed to represent `color` (0 for color 0).
pub fn bit_width(color: Color) -> u32 {
    COLOR_BITS - color.leading_zeros()
}

/// Exclusive upper bound on every color after `rounds` rounds, starting from
/// colors that fit in `bits` bits.
///
/// A color of width `w` maps to at most `2 * (w - 1) + 1`, so one round turns
/// the bound `2^w` into `2w`.
pub fn color_bound_after(bits: u32, rounds: usize) -> u64 {
    let mut bound = if bits >= 64 { None } else { Some(1u64 << bits) };
    let mut width = bits;
    for _ in 0..rounds {
        let next = 2 * u64::from(width.max(1));
        bound = Some(next);
        width = bit_width(next - 1);
    }
    bound.unwrap_or(u64::MAX)
}
