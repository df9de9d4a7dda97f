//! Blocked multi-round pass over one chunk.
//!
//! Running `rounds` full sweeps over a chunk reads and writes every color
//! `rounds` times. The blocked pass instead advances a staircase of positions
//! along the chunk: position `p + j` is kept `rounds - j` updates ahead, so
//! one left-to-right walk completes every position while the working window
//! stays in cache.
//!
//! Call position `p` *e-established* when it is either untouched (`e = 0`) or
//! one update away from its color after `e` rounds while `p + 1` is
//! `(e - 1)`-established. The ramp-up makes the chunk's start
//! `rounds`-established, the body slides that staircase to the end of the
//! chunk, and the finish resolves the last `rounds` positions against the
//! snapshot of the neighbor's colors.

use crate::engine::reference::sweep_window;
use crate::error::{InvariantViolation, fatal};
use crate::ring::Color;
use crate::ring::recolor::{recolor, recolor_at};

/// Round count that gets the unrolled body.
pub const UNROLLED_ROUNDS: usize = 4;

/// Advance every position of `chunk` by `rounds` rounds.
///
/// `following` must hold the `rounds` original colors that come right after
/// the chunk on the ring. The chunk may be empty, in which case nothing
/// happens.
pub fn run_chunk(chunk: &mut [Color], rounds: usize, following: Vec<Color>) {
    if following.len() != rounds {
        fatal(InvariantViolation::SnapshotSize {
            expected: rounds,
            actual: following.len(),
        });
    }
    let length = chunk.len();
    if length == 0 || rounds == 0 {
        return;
    }
    if length < rounds {
        // The staircase would reach past the chunk
        run_short_chunk(chunk, rounds, following);
        return;
    }

    ramp_up(chunk, rounds);
    let completable_end = length - rounds;
    if rounds == UNROLLED_ROUNDS {
        body_unrolled(chunk, completable_end);
    } else {
        body(chunk, rounds, completable_end);
    }
    finish(chunk, following, completable_end);
}

/// Make position 0 `rounds`-established.
///
/// ```text
/// 0000000...
/// 1000000...
/// 2100000...
/// 3210000...
/// ```
fn ramp_up(chunk: &mut [Color], rounds: usize) {
    for e in 1..rounds {
        // Back to front, so each position reads its successor's older color
        for i in (1..=e).rev() {
            recolor_at(chunk, i - 1);
        }
    }
}

/// Complete positions `0..completable_end` without touching the snapshot.
fn body(chunk: &mut [Color], rounds: usize, completable_end: usize) {
    for p in 0..completable_end {
        for i in (1..=rounds).rev() {
            recolor_at(chunk, p + i - 1);
        }
    }
}

/// [`body`] for exactly [`UNROLLED_ROUNDS`] rounds.
fn body_unrolled(chunk: &mut [Color], completable_end: usize) {
    for p in 0..completable_end {
        let window = &mut chunk[p..p + UNROLLED_ROUNDS + 1];
        window[3] = recolor(window[3], window[4]);
        window[2] = recolor(window[2], window[3]);
        window[1] = recolor(window[1], window[2]);
        window[0] = recolor(window[0], window[1]);
    }
}

/// Complete the last `rounds` positions, one round at a time, using the
/// neighbor's colors from `following`.
///
/// Each pass brings the tail one round further and advances `following` by
/// the same round; its last entry can no longer be advanced and is dropped.
fn finish(chunk: &mut [Color], mut following: Vec<Color>, completable_end: usize) {
    let last = chunk.len() - 1;
    for p in (completable_end..=last).rev() {
        for p2 in p..last {
            recolor_at(chunk, p2);
        }
        chunk[last] = recolor(chunk[last], following[0]);
        for i in 1..following.len() {
            recolor_at(&mut following, i - 1);
        }
        following.pop();
    }
    debug_assert!(following.is_empty());
}

/// Chunks shorter than `rounds`: run the plain sweep over chunk + snapshot.
fn run_short_chunk(chunk: &mut [Color], rounds: usize, following: Vec<Color>) {
    let mut window = Vec::with_capacity(chunk.len() + following.len());
    window.extend_from_slice(chunk);
    window.extend(following);
    sweep_window(&mut window, rounds);
    chunk.copy_from_slice(&window[..chunk.len()]);
}
