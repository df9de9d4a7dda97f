//! Cole-Vishkin emulator.
//!
//! Emulates the synchronous Cole-Vishkin color reduction on a directed ring
//! held in one contiguous array. A ring that starts with arbitrary distinct
//! 64-bit neighbor colors drops to at most 6 colors after 4 rounds while
//! staying a proper coloring after every round.
//!
//! The ring is split into contiguous chunks, one worker thread each, and
//! every worker applies all rounds to its chunk in a single cache-blocked
//! pass. The result is identical to applying the rounds one by one.

pub mod config;
pub mod engine;
pub mod error;
pub mod fill;
pub mod report;
pub mod ring;
pub mod writer;

use config::RunOptions;
use error::CvError;
use report::RunTimings;
use std::time::Instant;
use tracing::{debug, info};

/// Run the emulator end to end: fill, recolor, write.
///
/// `options` must already have passed [`RunOptions::validate`].
pub fn run(options: &RunOptions) -> Result<RunTimings, CvError> {
    let start = Instant::now();
    let mut store = fill::generate_store(options.init_pattern, options.length, options.init_seed)?;
    info!(
        length = store.len(),
        pattern = %options.init_pattern,
        seed = options.init_seed,
        "ring initialized"
    );

    let ready = Instant::now();
    let stats = options.run_config().run(&mut store);
    let done = Instant::now();
    info!(
        elapsed = ?stats.elapsed,
        slowest_worker = ?stats.slowest_worker(),
        "recoloring finished"
    );
    debug!(
        distinct = store.distinct_colors(),
        max_bits = store.max_bit_width(),
        "final coloring"
    );

    writer::write_colors(store.as_slice(), &options.file_out)?;
    drop(store);
    let finish = Instant::now();

    Ok(RunTimings::from_checkpoints(start, ready, done, finish))
}
