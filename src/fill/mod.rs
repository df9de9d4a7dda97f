//! Initial colorings.
//!
//! Both initializers draw one pseudo-random 64-bit color per node from a
//! seeded generator and redraw any color that would clash with its ring
//! neighbors, so the result is always a proper ring coloring and the same
//! seed always gives the same ring.

pub mod minstd;
pub mod xorshift;

pub use minstd::Minstd;
pub use xorshift::Xorshift128Plus;

use crate::error::{ConfigError, CvError, FillError, StoreError};
use crate::ring::{Color, ColorStore};
use rand::{Rng, RngCore};
use tracing::warn;

/// Redraws allowed for a single slot before giving up.
pub const MAX_REDRAWS: usize = 64;

/// Strategy for filling a buffer with a proper ring coloring.
pub trait FillStrategy {
    /// Name used on the command line.
    fn name(&self) -> &'static str;

    /// Fill all of `buffer` deterministically from `seed`.
    fn fill(&self, buffer: &mut [Color], seed: u64) -> Result<(), FillError>;
}

/// Fill using the minstd linear congruential generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearCongruentialFill;

impl FillStrategy for LinearCongruentialFill {
    fn name(&self) -> &'static str {
        "minstd"
    }

    fn fill(&self, buffer: &mut [Color], seed: u64) -> Result<(), FillError> {
        fill_proper(&mut Minstd::new(seed), buffer)
    }
}

/// Fill using xorshift128+.
#[derive(Debug, Clone, Copy, Default)]
pub struct XorshiftFill;

impl FillStrategy for XorshiftFill {
    fn name(&self) -> &'static str {
        "xorshift128plus"
    }

    fn fill(&self, buffer: &mut [Color], seed: u64) -> Result<(), FillError> {
        fill_proper(&mut Xorshift128Plus::new(seed), buffer)
    }
}

/// Configured choice of initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPattern {
    #[default]
    Minstd,
    Xorshift128Plus,
}

impl FillPattern {
    pub fn strategy(&self) -> &'static dyn FillStrategy {
        match self {
            FillPattern::Minstd => &LinearCongruentialFill,
            FillPattern::Xorshift128Plus => &XorshiftFill,
        }
    }
}

impl std::fmt::Display for FillPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.strategy().name())
    }
}

impl std::str::FromStr for FillPattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minstd" | "lcg" => Ok(FillPattern::Minstd),
            "xorshift128plus" | "xorshift" => Ok(FillPattern::Xorshift128Plus),
            _ => Err(ConfigError::UnknownVariant {
                kind: "init pattern",
                value: s.to_string(),
                valid: "minstd, xorshift128plus",
            }),
        }
    }
}

/// Fill `buffer` from `rng`, redrawing colors equal to the previous node's
/// (and, for the last node, the first node's).
pub fn fill_proper<R: RngCore + ?Sized>(
    rng: &mut R,
    buffer: &mut [Color],
) -> Result<(), FillError> {
    let len = buffer.len();
    if len < 2 {
        return Err(FillError::RingTooShort(len));
    }

    buffer[0] = rng.random();
    for i in 1..len {
        let previous = buffer[i - 1];
        buffer[i] = draw_distinct(rng, i, |c| c != previous)?;
    }

    let last = len - 1;
    if buffer[last] == buffer[0] {
        let (before, first) = (buffer[last - 1], buffer[0]);
        buffer[last] = draw_distinct(rng, last, |c| c != before && c != first)?;
    }
    Ok(())
}

fn draw_distinct<R, F>(rng: &mut R, index: usize, accept: F) -> Result<Color, FillError>
where
    R: RngCore + ?Sized,
    F: Fn(Color) -> bool,
{
    for attempt in 0..=MAX_REDRAWS {
        let color: Color = rng.random();
        if accept(color) {
            return Ok(color);
        }
        warn!(index, attempt, "color collision on initialization, redrawing");
    }
    Err(FillError::Exhausted {
        index,
        attempts: MAX_REDRAWS,
    })
}

/// Allocate and fill a ring of `length` nodes.
pub fn generate_store(
    pattern: FillPattern,
    length: usize,
    seed: u64,
) -> Result<ColorStore, CvError> {
    let mut colors: Vec<Color> = Vec::new();
    colors
        .try_reserve_exact(length)
        .map_err(|_| StoreError::Allocation(length))?;
    colors.resize(length, 0);

    pattern.strategy().fill(&mut colors, seed)?;
    Ok(ColorStore::new(colors)?)
}
