use clap::{Parser, ValueEnum};
use cv::config::RunOptions;
use cv::fill::FillPattern;
use cv::report::OutputFormat;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "cv")]
#[command(about = "cv - Cole-Vishkin emulator")]
#[command(version)]
#[command(after_help = "\
Colors left after N rounds, starting from 64-bit colors:
  rounds  bits  colors
    1      7     128
    2      4      14
    3      3       8
    4      3       6
Further rounds do not reduce the number of colors below 6.")]
struct Args {
    /// Number of worker threads (1 to 256)
    #[arg(long, default_value = "4")]
    cpus: usize,

    /// File the final coloring is written to, one byte per node
    #[arg(long, default_value = "cv_out.dat")]
    file_out: PathBuf,

    /// How the timings are printed
    #[arg(long, value_enum, default_value = "human")]
    format: CliFormat,

    /// Generator for the initial coloring
    #[arg(long, value_enum, default_value = "minstd")]
    init_pattern: CliPattern,

    /// Seed for the initial coloring
    #[arg(long, default_value = "0")]
    init_seed: u64,

    /// Number of nodes in the ring
    #[arg(long, default_value = "268435456")]
    length: usize,

    /// Do not warn about lengths above 1<<28
    #[arg(long)]
    length_force: bool,

    /// Number of Cole-Vishkin rounds
    #[arg(long, default_value = "4")]
    rounds: usize,
}

/// CLI output format selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliFormat {
    /// Print nothing unless there is an error
    None,
    /// One line per phase
    Human,
    /// One tab-delimited line, for batch runs
    Tdl,
}

impl From<CliFormat> for OutputFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::None => OutputFormat::None,
            CliFormat::Human => OutputFormat::Human,
            CliFormat::Tdl => OutputFormat::Tdl,
        }
    }
}

/// CLI initializer selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliPattern {
    /// minstd linear congruential generator
    Minstd,
    /// xorshift128+
    #[value(name = "xorshift128plus")]
    Xorshift128Plus,
}

impl From<CliPattern> for FillPattern {
    fn from(cli: CliPattern) -> Self {
        match cli {
            CliPattern::Minstd => FillPattern::Minstd,
            CliPattern::Xorshift128Plus => FillPattern::Xorshift128Plus,
        }
    }
}

impl From<Args> for RunOptions {
    fn from(args: Args) -> Self {
        RunOptions {
            cpus: args.cpus,
            file_out: args.file_out,
            format: args.format.into(),
            init_pattern: args.init_pattern.into(),
            init_seed: args.init_seed,
            length: args.length,
            length_force: args.length_force,
            rounds: args.rounds,
        }
    }
}

// --- Logging ---

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() {
    init_tracing();
    let options = RunOptions::from(Args::parse());

    match options.validate() {
        Ok(warnings) => {
            for warning in warnings {
                warn!("{}", warning);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    match cv::run(&options) {
        Ok(timings) => print!("{}", options.format.render(&timings)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
