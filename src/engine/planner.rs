//! Chunk partitioning and boundary snapshots.
//!
//! The ring is cut into `cpus` contiguous chunks whose sizes differ by at most
//! one. A chunk's last positions depend on the first `rounds` colors of the
//! following chunk, which another worker is about to overwrite, so those
//! colors are copied out before any worker starts. This copy is the only
//! point where two chunks' data ever overlap.

use crate::error::{InvariantViolation, fatal};
use crate::ring::Color;
use std::ops::Range;

/// Compute the `cpus + 1` chunk borders for a ring of `length` nodes.
///
/// `border[i] = floor(length * i / cpus)`, so `border[0] = 0` and
/// `border[cpus] = length`.
pub fn compute_borders(length: usize, cpus: usize) -> Vec<usize> {
    if cpus == 0 || cpus > length {
        fatal(InvariantViolation::BadChunkCount { cpus, length });
    }

    let mut borders = Vec::with_capacity(cpus + 1);
    borders.push(0);
    for i in 1..=cpus {
        // Widen so length * i cannot wrap
        let border = (length as u128 * i as u128 / cpus as u128) as usize;
        let previous = borders[i - 1];
        if border < previous {
            fatal(InvariantViolation::DecreasingBorder {
                index: i,
                previous,
                value: border,
            });
        }
        borders.push(border);
    }
    borders
}

/// Copy the `rounds` colors that follow chunk `chunk_index`, wrapping around
/// the ring as often as needed.
pub fn capture_snapshot(
    colors: &[Color],
    borders: &[usize],
    chunk_index: usize,
    rounds: usize,
) -> Vec<Color> {
    let length = colors.len();
    let start = borders[chunk_index + 1];
    (0..rounds).map(|j| colors[(start + j) % length]).collect()
}

/// One worker's share of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkAssignment {
    pub chunk_index: usize,
    pub range: Range<usize>,
    pub snapshot: Vec<Color>,
}

/// Borders plus per-chunk snapshots for one run.
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    borders: Vec<usize>,
    snapshots: Vec<Vec<Color>>,
}

impl ChunkPlan {
    /// Plan a run. Must be called before any chunk is mutated.
    pub fn build(colors: &[Color], cpus: usize, rounds: usize) -> Self {
        let borders = compute_borders(colors.len(), cpus);
        let snapshots = (0..cpus)
            .map(|chunk_index| capture_snapshot(colors, &borders, chunk_index, rounds))
            .collect();
        Self { borders, snapshots }
    }

    pub fn borders(&self) -> &[usize] {
        &self.borders
    }

    pub fn chunk_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn range(&self, chunk_index: usize) -> Range<usize> {
        self.borders[chunk_index]..self.borders[chunk_index + 1]
    }

    pub fn snapshot(&self, chunk_index: usize) -> &[Color] {
        &self.snapshots[chunk_index]
    }

    /// Hand out the assignments, moving each snapshot to its worker.
    pub fn into_assignments(self) -> Vec<ChunkAssignment> {
        let ranges: Vec<Range<usize>> = (0..self.chunk_count()).map(|i| self.range(i)).collect();
        ranges
            .into_iter()
            .zip(self.snapshots)
            .enumerate()
            .map(|(chunk_index, (range, snapshot))| ChunkAssignment {
                chunk_index,
                range,
                snapshot,
            })
            .collect()
    }
}
