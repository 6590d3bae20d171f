//! RiskMeter - Threat Scoring and Shift-Clock Arithmetic
//!
//! A CLI utility for security-operations reporting: aggregates
//! per-department threat scores into one importance-weighted score,
//! and computes elapsed durations between wall-clock times on a
//! cyclic 24-hour dial.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (unreadable input, malformed JSON or time string)
//!   2 - Aggregate score at or above --fail-over threshold

mod cli;
mod clock;
mod fixtures;
mod models;
mod report;
mod scoring;

use anyhow::{Context, Result};
use cli::{Args, Command, OutputFormat};
use fixtures::FixtureGenerator;
use models::Department;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Initialize logging
    init_logging(&args);

    debug!("Arguments: {:?}", args);

    match run(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the selected command. Returns the process exit code.
fn run(args: Args) -> Result<i32> {
    match args.command {
        Command::Score {
            input,
            format,
            fail_over,
        } => run_score(input, format, fail_over),
        Command::Clock { start, end } => run_clock(&start, &end),
        Command::Fixture {
            departments,
            users_min,
            users_max,
            seed,
        } => run_fixture(departments, users_min, users_max, seed),
    }
}

/// Aggregate a department collection and print the report.
fn run_score(input: Option<PathBuf>, format: OutputFormat, fail_over: Option<f64>) -> Result<i32> {
    let departments = load_departments(input.as_deref())?;
    info!("Scoring {} departments", departments.len());

    let score_report = scoring::breakdown(&departments)?;

    match format {
        OutputFormat::Text => print!("{}", report::generate_text_report(&score_report)),
        OutputFormat::Json => println!("{}", report::generate_json_report(&score_report)?),
    }

    // Check --fail-over threshold
    if let Some(threshold) = fail_over {
        if score_report.aggregate >= threshold {
            eprintln!(
                "\n⛔ Aggregate score {:.2} is at or above the {:.2} threshold. Failing (exit code 2).",
                score_report.aggregate, threshold
            );
            return Ok(2);
        }
    }

    Ok(0)
}

/// Compute the forward duration between two wall-clock times.
fn run_clock(start: &str, end: &str) -> Result<i32> {
    let hours = clock::cyclic_time_difference(start, end)?;

    println!("🕑 {} to {}: {:.2} hours", start, end, hours);
    Ok(0)
}

/// Emit a random department collection as JSON.
fn run_fixture(
    departments: usize,
    users_min: usize,
    users_max: usize,
    seed: Option<u64>,
) -> Result<i32> {
    let mut generator = match seed {
        Some(seed) => {
            debug!("Seeding fixture generator with {}", seed);
            FixtureGenerator::with_seed(seed)
        }
        None => FixtureGenerator::new(),
    };

    let collection = generator.departments(departments, users_min, users_max);

    let json =
        serde_json::to_string_pretty(&collection).context("Failed to serialize fixture output")?;
    println!("{}", json);

    Ok(0)
}

/// Read a department collection from a file or stdin.
fn load_departments(input: Option<&Path>) -> Result<Vec<Department>> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            debug!("Reading department collection from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    serde_json::from_str(&content).context("Failed to parse department JSON")
}
