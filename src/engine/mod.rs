//! Multi-worker recoloring engine.
//!
//! # Architecture
//!
//! - The **planner** cuts the ring into `cpus` chunks and copies, for each
//!   chunk, the `rounds` colors of the ring that follow it
//! - One **worker** per chunk runs the blocked multi-round pass over its own
//!   sub-slice, reading the neighbor's data only from its private copy
//! - The **coordinator** launches the workers in a thread scope, joins them,
//!   and collects their completion reports
//! - The **reference** loops are the plain round-by-round form the blocked
//!   pass must reproduce exactly
//!
//! # Example
//!
//! ```
//! use cv::engine::run_all;
//!
//! let mut colors = vec![1, 2, 1, 2];
//! run_all(&mut colors, 2, 1);
//! assert_eq!(colors, vec![1, 0, 1, 0]);
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod planner;
pub mod reference;
pub mod worker;

pub use channel::WorkerReport;
pub use config::RunConfig;
pub use coordinator::{RunStatistics, run_all};
pub use planner::{ChunkPlan, capture_snapshot, compute_borders};
pub use reference::run_reference;
pub use worker::run_chunk;
