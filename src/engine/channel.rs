//! Completion reports from workers to the coordinator.
//!
//! Workers never talk to each other. Each one sends a single report when its
//! chunk is done, which the coordinator collects after the join.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::ops::Range;
use std::time::Duration;

/// Sent once by each worker after its chunk is fully recolored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub chunk_index: usize,
    pub range: Range<usize>,
    pub elapsed: Duration,
}

impl WorkerReport {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Channel endpoints for one run.
pub struct ReportChannels {
    /// Cloned into every worker.
    pub to_coordinator: Sender<WorkerReport>,
    pub from_workers: Receiver<WorkerReport>,
}

impl ReportChannels {
    /// Drop the coordinator's sender and drain every report, ordered by chunk.
    pub fn collect(self) -> Vec<WorkerReport> {
        drop(self.to_coordinator);
        let mut reports: Vec<WorkerReport> = self.from_workers.iter().collect();
        reports.sort_by_key(|r| r.chunk_index);
        reports
    }
}

/// Create the report channel. Unbounded, so a finishing worker never blocks.
pub fn create_channels() -> ReportChannels {
    let (to_coordinator, from_workers) = unbounded();
    ReportChannels {
        to_coordinator,
        from_workers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_orders_by_chunk() {
        let channels = create_channels();
        for chunk_index in [2, 0, 1] {
            channels
                .to_coordinator
                .send(WorkerReport {
                    chunk_index,
                    range: chunk_index * 10..chunk_index * 10 + 10,
                    elapsed: Duration::from_millis(1),
                })
                .unwrap();
        }

        let reports = channels.collect();
        let order: Vec<usize> = reports.iter().map(|r| r.chunk_index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(reports[1].len(), 10);
    }

    #[test]
    fn test_collect_with_worker_senders_dropped() {
        let channels = create_channels();
        let worker_tx = channels.to_coordinator.clone();
        std::thread::spawn(move || {
            worker_tx
                .send(WorkerReport {
                    chunk_index: 0,
                    range: 0..3,
                    elapsed: Duration::ZERO,
                })
                .unwrap();
        })
        .join()
        .unwrap();

        let reports = channels.collect();
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].is_empty());
    }
}
