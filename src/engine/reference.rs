//! Straightforward round-by-round recoloring.
//!
//! These are the obvious loops: every round walks the whole sequence once.
//! The blocked worker must agree with them bit for bit; they also serve the
//! worker directly for chunks shorter than the round count.

use crate::ring::Color;
use crate::ring::recolor::{recolor, recolor_at};

/// Apply `rounds` synchronous rounds to a whole ring.
///
/// Walking upwards, position `i` still sees the pre-round color of `i + 1`;
/// only the wraparound needs the saved pre-round color of node 0.
pub fn run_reference(colors: &mut [Color], rounds: usize) {
    let len = colors.len();
    if len == 0 {
        return;
    }
    for _ in 0..rounds {
        let first = colors[0];
        for i in 0..len - 1 {
            recolor_at(colors, i);
        }
        colors[len - 1] = recolor(colors[len - 1], first);
    }
}

/// Apply `rounds` rounds to a linear window with no wraparound.
///
/// Afterwards `window[..len - rounds]` holds fully advanced colors; the tail
/// is scratch, since each round loses the last position it could compute.
pub fn sweep_window(window: &mut [Color], rounds: usize) {
    for round in 0..rounds {
        let end = window.len().saturating_sub(round + 1);
        for i in 0..end {
            recolor_at(window, i);
        }
    }
}
