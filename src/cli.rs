//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RiskMeter - weighted threat scoring and shift-clock math
///
/// Aggregate per-department threat scores into one importance-weighted
/// organization score, or compute elapsed durations between wall-clock
/// times on a cyclic 24-hour dial. Text/JSON output. Built in Rust.
///
/// Examples:
///   riskmeter score --input departments.json
///   riskmeter fixture --seed 42 | riskmeter score --format json
///   riskmeter score --input departments.json --fail-over 50
///   riskmeter clock 23:00 01:00
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// The operation to run.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Aggregate a department collection into one weighted threat score
    Score {
        /// Path to a JSON department collection; reads stdin when omitted
        ///
        /// Expected shape: [{"scores": [0-90, ...], "importance": N}, ...]
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long, default_value = "text", value_name = "FORMAT")]
        format: OutputFormat,

        /// Exit with code 2 when the aggregate reaches this score
        ///
        /// Useful for CI pipelines and scheduled checks.
        #[arg(long, value_name = "SCORE")]
        fail_over: Option<f64>,
    },

    /// Elapsed hours from START to END on the 24-hour dial
    Clock {
        /// Start time as HH:MM
        #[arg(value_name = "START")]
        start: String,

        /// End time as HH:MM
        #[arg(value_name = "END")]
        end: String,
    },

    /// Emit a random department collection as JSON
    Fixture {
        /// Number of departments to generate
        #[arg(long, default_value = "5", value_name = "COUNT")]
        departments: usize,

        /// Minimum users per department
        #[arg(long, default_value = "10", value_name = "COUNT")]
        users_min: usize,

        /// Maximum users per department
        #[arg(long, default_value = "200", value_name = "COUNT")]
        users_max: usize,

        /// Seed for reproducible output
        #[arg(long, env = "RISKMETER_SEED", value_name = "SEED")]
        seed: Option<u64>,
    },
}

/// Output format for score reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        match &self.command {
            Command::Score { fail_over, .. } => {
                if let Some(threshold) = fail_over {
                    if !threshold.is_finite() || *threshold < 0.0 {
                        return Err(
                            "Fail-over threshold must be a non-negative number".to_string()
                        );
                    }
                }
            }
            Command::Fixture {
                departments,
                users_min,
                users_max,
                ..
            } => {
                if *departments == 0 {
                    return Err("Department count must be at least 1".to_string());
                }
                if users_min > users_max {
                    return Err("Minimum users cannot exceed maximum users".to_string());
                }
            }
            Command::Clock { .. } => {}
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
