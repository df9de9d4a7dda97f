//! Options for a full emulator run and their validation.

use crate::engine::RunConfig;
use crate::error::ConfigError;
use crate::fill::FillPattern;
use crate::report::OutputFormat;
use crate::ring::color_bound_after;
use crate::ring::recolor::{COLOR_BITS, FIXED_POINT_COLORS};
use std::path::PathBuf;

/// Most worker threads a run may use.
pub const MAX_CPUS: usize = 256;

/// Lengths above this need `length_force` to run without a warning.
pub const LENGTH_WARN: usize = 1 << 28;

/// Hard upper bound on the ring length.
pub const LENGTH_MAX: usize = 1 << 31;

/// Rounds needed to reach six colors from 64-bit ones.
pub const RECOMMENDED_ROUNDS: usize = 4;

/// Everything that controls one run of the emulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub cpus: usize,
    pub file_out: PathBuf,
    pub format: OutputFormat,
    pub init_pattern: FillPattern,
    pub init_seed: u64,
    pub length: usize,
    pub length_force: bool,
    pub rounds: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            cpus: 4,
            file_out: PathBuf::from("cv_out.dat"),
            format: OutputFormat::default(),
            init_pattern: FillPattern::default(),
            init_seed: 0,
            length: LENGTH_WARN,
            length_force: false,
            rounds: RECOMMENDED_ROUNDS,
        }
    }
}

/// Suspicious but runnable settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    LargeLength(usize),
    FewRounds(usize),
    CpusExceedMachine { cpus: usize, available: usize },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::LargeLength(length) => write!(
                f,
                "More than 1<<28 nodes ({length}) requested without --length-force; this needs a lot of memory"
            ),
            ConfigWarning::FewRounds(rounds) => write!(
                f,
                "Only {rounds} rounds; colors are only guaranteed below {}, not {FIXED_POINT_COLORS}",
                color_bound_after(COLOR_BITS, *rounds)
            ),
            ConfigWarning::CpusExceedMachine { cpus, available } => write!(
                f,
                "Using {cpus} cpus but only {available} are available; expect oversubscription"
            ),
        }
    }
}

impl RunOptions {
    /// Check the options against this machine.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        self.validate_for(num_cpus::get())
    }

    /// Check the options as if `available` cpus were present.
    pub fn validate_for(&self, available: usize) -> Result<Vec<ConfigWarning>, ConfigError> {
        if self.cpus == 0 || self.cpus > MAX_CPUS {
            return Err(ConfigError::InvalidCpus(self.cpus));
        }
        if self.length < self.cpus {
            return Err(ConfigError::LengthBelowCpus {
                length: self.length,
                cpus: self.cpus,
            });
        }
        if self.length < 2 {
            return Err(ConfigError::LengthTooShort(self.length));
        }

        let mut warnings = Vec::new();
        if self.length > LENGTH_MAX {
            return Err(ConfigError::LengthTooLarge(self.length));
        }
        if self.length > LENGTH_WARN && !self.length_force {
            warnings.push(ConfigWarning::LargeLength(self.length));
        }

        if self.rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.rounds < RECOMMENDED_ROUNDS {
            warnings.push(ConfigWarning::FewRounds(self.rounds));
        }

        if self.cpus > available {
            warnings.push(ConfigWarning::CpusExceedMachine {
                cpus: self.cpus,
                available,
            });
        }
        Ok(warnings)
    }

    /// Engine settings for these options.
    pub fn run_config(&self) -> RunConfig {
        RunConfig::default()
            .with_cpus(self.cpus)
            .with_rounds(self.rounds)
    }
}
