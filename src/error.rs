//! Error types for the emulator.
//!
//! Two families live here. The recoverable ones (`ConfigError`, `FillError`,
//! `StoreError`, and the top-level `CvError`) are returned through `Result`
//! and turned into an exit code by the binary. `InvariantViolation` is never
//! returned: it describes a broken precondition inside the core and is only
//! ever rendered into a panic via [`fatal`].

use crate::ring::Color;
use std::io;
use std::path::PathBuf;

/// Invalid command-line or run configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid amount of cpus: {0} (must be between 1 and {max})", max = crate::config::MAX_CPUS)]
    InvalidCpus(usize),

    #[error("Must use at least #cpus many nodes in the list ({length} < {cpus}).")]
    LengthBelowCpus { length: usize, cpus: usize },

    #[error("A ring needs at least 2 nodes to be properly colored (got {0}).")]
    LengthTooShort(usize),

    #[error(
        "More than 1<<31 nodes ({0}). This means you'll need >8GiB on 32-bit, and >16GiB on 64-bit platforms."
    )]
    LengthTooLarge(usize),

    #[error("Number of rounds must be positive.")]
    ZeroRounds,

    #[error("Unknown {kind}: '{value}'. Valid options: {valid}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        valid: &'static str,
    },
}

/// Failure of an initializer to produce a proper ring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FillError {
    #[error("cannot fill a ring of {0} nodes; at least 2 are required")]
    RingTooShort(usize),

    #[error(
        "color collision at index {index} persisted after {attempts} redraws (insufficient PRNG, change PRNG or seed)"
    )]
    Exhausted { index: usize, attempts: usize },
}

/// A color sequence that is not a proper ring coloring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("a ring needs at least 2 nodes, got {0}")]
    TooShort(usize),

    #[error("could not allocate {0} colors")]
    Allocation(usize),

    #[error("nodes {index} and {next} share color {color:#x}")]
    Improper {
        index: usize,
        next: usize,
        color: Color,
    },
}

/// Top-level error for a full emulator run.
#[derive(Debug, thiserror::Error)]
pub enum CvError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("initialization failed: {0}")]
    Fill(#[from] FillError),

    #[error("invalid color store: {0}")]
    Store(#[from] StoreError),

    #[error("writing {path} failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CvError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CvError::Config(_) | CvError::Fill(_) => 1,
            CvError::Store(_) => 2,
            CvError::Write { .. } => 3,
        }
    }
}

/// Broken invariants inside the recoloring core. Always fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("precondition violated: recolor called on equal adjacent colors ({0:#x})")]
    EqualNeighbors(Color),

    #[error("planner invariant violated: border {index} jumped down ({value} < {previous})")]
    DecreasingBorder {
        index: usize,
        previous: usize,
        value: usize,
    },

    #[error("planner invariant violated: {cpus} chunks requested for a ring of {length} nodes")]
    BadChunkCount { cpus: usize, length: usize },

    #[error("planner invariant violated: snapshot holds {actual} colors, expected {expected}")]
    SnapshotSize { expected: usize, actual: usize },
}

/// Log and abort the current run on a broken invariant.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(violation: InvariantViolation) -> ! {
    tracing::error!(%violation, "fatal invariant violation");
    panic!("{}", violation)
}
