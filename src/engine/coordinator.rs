//! Run coordinator: plan, launch one worker per chunk, join.

use crate::engine::channel::{WorkerReport, create_channels};
use crate::engine::config::RunConfig;
use crate::engine::planner::ChunkPlan;
use crate::engine::worker::run_chunk;
use crate::ring::{Color, ColorStore};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of a recoloring run.
#[derive(Debug, Clone)]
pub struct RunStatistics {
    pub cpus: usize,
    pub rounds: usize,
    pub length: usize,
    /// Wall time from planning until the last worker joined.
    pub elapsed: Duration,
    /// One report per chunk, ordered by chunk index.
    pub workers: Vec<WorkerReport>,
}

impl RunStatistics {
    /// Slowest worker's time.
    pub fn slowest_worker(&self) -> Duration {
        self.workers
            .iter()
            .map(|r| r.elapsed)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

/// Apply `rounds` rounds to the whole ring using `cpus` workers.
///
/// All snapshots are taken before the first worker starts. Each worker then
/// owns a disjoint sub-slice, so no locking is needed. Returns once every
/// worker has finished; a panicking worker takes the whole run down.
pub fn run_all(colors: &mut [Color], cpus: usize, rounds: usize) -> RunStatistics {
    let start_time = Instant::now();
    let length = colors.len();

    let plan = ChunkPlan::build(colors, cpus, rounds);
    info!(length, cpus, rounds, "starting recoloring run");

    let channels = create_channels();

    // Split the ring into the planned chunks
    let mut work = Vec::with_capacity(cpus);
    let mut rest: &mut [Color] = colors;
    for assignment in plan.into_assignments() {
        let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(assignment.range.len());
        rest = tail;
        work.push((assignment, chunk));
    }

    std::thread::scope(|scope| {
        for (assignment, chunk) in work {
            let to_coordinator = channels.to_coordinator.clone();
            scope.spawn(move || {
                let started = Instant::now();
                debug!(
                    chunk = assignment.chunk_index,
                    begin = assignment.range.start,
                    len = chunk.len(),
                    "worker started"
                );
                run_chunk(chunk, rounds, assignment.snapshot);
                let report = WorkerReport {
                    chunk_index: assignment.chunk_index,
                    range: assignment.range,
                    elapsed: started.elapsed(),
                };
                debug!(chunk = report.chunk_index, elapsed = ?report.elapsed, "worker finished");
                // Only fails if the coordinator is gone, and it outlives the scope
                let _ = to_coordinator.send(report);
            });
        }
    });

    let workers = channels.collect();
    let elapsed = start_time.elapsed();
    info!(elapsed = ?elapsed, workers = workers.len(), "recoloring run complete");

    RunStatistics {
        cpus,
        rounds,
        length,
        elapsed,
        workers,
    }
}

impl RunConfig {
    /// Run this configuration over `store`.
    pub fn run(&self, store: &mut ColorStore) -> RunStatistics {
        run_all(store.as_mut_slice(), self.cpus, self.rounds)
    }
}
