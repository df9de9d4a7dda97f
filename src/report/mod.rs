//! Run timings and their output formats.

use crate::error::ConfigError;
use std::time::{Duration, Instant};

/// Wall-clock phases of one emulator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunTimings {
    /// Option handling, allocation and the initial fill.
    pub init: Duration,
    /// The recoloring run itself.
    pub recolor: Duration,
    /// Writing the result and releasing the ring.
    pub cleanup: Duration,
    /// Start to finish; more accurate than summing the phases.
    pub all: Duration,
}

impl RunTimings {
    /// Build from the four checkpoints of a run.
    pub fn from_checkpoints(start: Instant, ready: Instant, done: Instant, finish: Instant) -> Self {
        Self {
            init: ready.duration_since(start),
            recolor: done.duration_since(ready),
            cleanup: finish.duration_since(done),
            all: finish.duration_since(start),
        }
    }

    fn millis(&self) -> [u128; 4] {
        [
            self.init.as_millis(),
            self.recolor.as_millis(),
            self.cleanup.as_millis(),
            self.all.as_millis(),
        ]
    }
}

/// How the timings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Print nothing unless there is an error.
    None,
    /// One line per phase. Ideal for a single run.
    #[default]
    Human,
    /// One tab-delimited line. Ideal for batch execution.
    Tdl,
}

impl OutputFormat {
    pub fn render(&self, timings: &RunTimings) -> String {
        let [init, recolor, cleanup, all] = timings.millis();
        match self {
            OutputFormat::None => String::new(),
            OutputFormat::Human => format!(
                "Initialization took {init} ms.\n\
                 Cole-Vishkin took {recolor} ms.\n\
                 Cleanup took {cleanup} ms.\n\
                 <All> took {all} ms.\n"
            ),
            OutputFormat::Tdl => format!("{init}\t{recolor}\t{cleanup}\t{all}\n"),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::None => write!(f, "none"),
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Tdl => write!(f, "tdl"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(OutputFormat::None),
            "human" => Ok(OutputFormat::Human),
            "tdl" => Ok(OutputFormat::Tdl),
            _ => Err(ConfigError::UnknownVariant {
                kind: "format",
                value: s.to_string(),
                valid: "none, human, tdl",
            }),
        }
    }
}
