//! Parameters of a single recoloring run.

/// How a run is split and how far it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of chunks, and so of worker threads.
    pub cpus: usize,
    /// Number of synchronous rounds to apply.
    pub rounds: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { cpus: 4, rounds: 4 }
    }
}

impl RunConfig {
    /// Set the worker count (at least 1).
    pub fn with_cpus(mut self, cpus: usize) -> Self {
        self.cpus = cpus.max(1);
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }
}
