// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is described by Rust structs and
// attributes, and clap generates the parser, --help and --version for us.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "log-guardian",
    version,
    about = "Check a batch of log files and endpoints concurrently",
    long_about = "log-guardian reads a JSON list of targets (log files or URLs), checks all of them \
                  at once and reports which ones are missing, unreadable or broken. \
                  The report can be exported as JSON for CI pipelines."
)]
pub struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every target listed in a JSON batch file
    ///
    /// Example: log-guardian analyze -c targets.json -o report.json
    Analyze {
        /// JSON file with the targets: [{"id": ..., "path": ..., "type": "file" | "url"}]
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: PathBuf,

        /// Write the report to this JSON file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Time budget for a single check, in milliseconds
        #[arg(
            long,
            env = "LOG_GUARDIAN_TIMEOUT_MS",
            default_value_t = crate::config::DEFAULT_TIMEOUT_MS,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout_ms: u64,

        /// Maximum number of checks in flight (0 = no limit)
        #[arg(long, default_value_t = 0)]
        concurrency: usize,

        /// Print the report as JSON on stdout instead of the per-target lines
        #[arg(long)]
        json: bool,

        /// Order the report by target id
        #[arg(long)]
        sort: bool,

        /// Exit with code 1 when any target failed
        #[arg(long)]
        strict: bool,
    },
}
