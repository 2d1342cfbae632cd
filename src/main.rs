//! `triangle` command-line tool: classify one triangle, check a classifier
//! against the reference cases, or time it.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;
use triangle::{Classify, DEFAULT_PAUSE, DEFAULT_ROUNDS, Delayed, Variant, run_suite, run_workload};

/// Classify triangles by their side lengths
#[derive(Parser)]
#[command(name = "triangle", version)]
#[command(about = "Classify triangles and check classifiers against reference cases", long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    classifier: ClassifierArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ClassifierArgs {
    /// Algorithm to run: reference or swapped-labels
    #[arg(long, env = "TRIANGLE_VARIANT", global = true)]
    variant: Option<Variant>,

    /// Pause before every classification, in milliseconds [default: 1 for
    /// swapped-labels, 0 otherwise]
    #[arg(long, env = "TRIANGLE_DELAY_MS", global = true)]
    delay_ms: Option<u64>,
}

impl ClassifierArgs {
    fn build(&self) -> Delayed<Variant> {
        let variant = self.variant.unwrap_or_default();
        let pause = match self.delay_ms {
            Some(ms) => Duration::from_millis(ms),
            None if variant.is_seeded_defect() => DEFAULT_PAUSE,
            None => Duration::ZERO,
        };
        debug!(%variant, ?pause, "classifier configured");
        Delayed::new(variant, pause)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one triangle; missing sides default to 0
    Classify {
        /// First side
        #[arg(default_value_t = 0.0, allow_negative_numbers = true)]
        a: f64,
        /// Second side
        #[arg(default_value_t = 0.0, allow_negative_numbers = true)]
        b: f64,
        /// Third side
        #[arg(default_value_t = 0.0, allow_negative_numbers = true)]
        c: f64,
    },
    /// Run the reference cases and report failures; exits 1 if any case fails
    Check,
    /// Time repeated passes over the reference cases
    Time {
        /// Number of passes over the case table
        #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
        rounds: u32,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let classifier = cli.classifier.build();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Classify { a, b, c } => {
            let kind = classifier.classify(a, b, c);
            writeln!(
                out,
                "classify_triangle({a}, {b}, {c}) = {} ({})",
                kind.code(),
                kind.as_str()
            )
            .context("failed to write classification")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            let report = run_suite(&classifier);
            writeln!(out, "{report}").context("failed to write report")?;
            Ok(if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Time { rounds } => {
            let timing = run_workload(&classifier, rounds);
            writeln!(out, "{timing}").context("failed to write timing")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
