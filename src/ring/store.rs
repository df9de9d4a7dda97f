//! The mutable ring of node colors.

use crate::error::StoreError;
use crate::ring::Color;
use crate::ring::recolor::bit_width;

/// A properly colored ring: no two cyclically adjacent nodes share a color.
///
/// Node `i` is identified only by its index; its successor is
/// `(i + 1) % len`. The store owns the colors and hands out a mutable slice
/// to the engine, which keeps the ring proper by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStore {
    colors: Vec<Color>,
}

impl ColorStore {
    /// Wrap `colors`, checking that they form a proper ring coloring.
    pub fn new(colors: Vec<Color>) -> Result<Self, StoreError> {
        check_proper(&colors)?;
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Mutable access for the engine. Callers must keep the ring proper.
    pub fn as_mut_slice(&mut self) -> &mut [Color] {
        &mut self.colors
    }

    /// Re-check the ring invariant, e.g. after a run.
    pub fn validate(&self) -> Result<(), StoreError> {
        check_proper(&self.colors)
    }

    /// Largest bit width among all colors.
    pub fn max_bit_width(&self) -> u32 {
        self.colors.iter().map(|&c| bit_width(c)).max().unwrap_or(0)
    }

    /// Number of distinct colors in use.
    pub fn distinct_colors(&self) -> usize {
        let mut seen: Vec<Color> = self.colors.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

/// Check that `colors` is a proper coloring of a ring.
pub fn check_proper(colors: &[Color]) -> Result<(), StoreError> {
    let len = colors.len();
    if len < 2 {
        return Err(StoreError::TooShort(len));
    }
    for index in 0..len {
        let next = (index + 1) % len;
        if colors[index] == colors[next] {
            return Err(StoreError::Improper {
                index,
                next,
                color: colors[index],
            });
        }
    }
    Ok(())
}
