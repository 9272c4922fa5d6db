// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Load the batch, check every target concurrently, classify the results
// 4. Print one line per target and optionally export the JSON report
// 5. Exit with proper code (0 = done, 1 = failures with --strict, 2 = error)
//
// Rust concepts:
// - #[tokio::main]: turns async fn main into a real main running a runtime
// - anyhow::Context: adds a readable "what we were doing" layer to errors
// - {:#} on anyhow::Error: prints the whole cause chain on one line
// =============================================================================

mod batch;     // src/batch/ - targets and the input file
mod checker;   // src/checker/ - one probe per target
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - run-wide settings
mod dispatch;  // src/dispatch/ - concurrent fan-out/fan-in
mod report;    // src/report/ - classification and export

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::CheckConfig;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Batch-level failure: nothing was (or could be) reported
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout only carries the report
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "log_guardian=debug"
    } else {
        "log_guardian=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Turns parsed arguments into an immutable run configuration and dispatches
// to the subcommand handler
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze {
            config,
            output,
            timeout_ms,
            concurrency,
            json,
            sort,
            strict,
        } => {
            // --concurrency 0 means no limit
            let options = AnalyzeOptions {
                config_path: config,
                output,
                check: CheckConfig::new(Duration::from_millis(timeout_ms))
                    .with_concurrency(NonZeroUsize::new(concurrency)),
                json,
                sort,
                strict,
            };
            handle_analyze(options).await
        }
    }
}

struct AnalyzeOptions {
    config_path: PathBuf,
    output: Option<PathBuf>,
    check: CheckConfig,
    json: bool,
    sort: bool,
    strict: bool,
}

// Handles the 'analyze' subcommand
//
// Returns:
//   Ok(0) = batch ran (or there was nothing to check)
//   Ok(1) = --strict and at least one target failed
//   Err   = the batch could not be loaded or the report not written
async fn handle_analyze(options: AnalyzeOptions) -> Result<i32> {
    // Load the whole batch up front; a bad file stops us before any check
    let targets = batch::load_targets(&options.config_path)
        .await
        .with_context(|| format!("could not load targets from {}", options.config_path.display()))?;

    // Nothing to check is not an error, but the operator should know.
    // With --json, stdout stays a valid (empty) report.
    if targets.is_empty() {
        let notice = format!("⚠️  No targets found in {}", options.config_path.display());
        if options.json {
            eprintln!("{}", notice);
            println!("[]");
        } else {
            println!("{}", notice);
        }
        return Ok(0);
    }

    if !options.json {
        println!("🔍 Checking {} target(s)...\n", targets.len());
    }

    // One checker for the whole batch: every task clones it
    let checker = checker::Checker::new(options.check).context("failed to create HTTP client")?;
    let mut results = dispatch::run_all(targets, checker).await;

    // Results arrive in completion order; sort only when asked to
    if options.sort {
        results.sort_by(|a, b| a.target.id.cmp(&b.target.id));
    }

    // Classify each result, printing its line as we go
    let mut entries = Vec::with_capacity(results.len());
    for result in &results {
        if !options.json {
            println!("{}", report::summary_line(result));
        }
        entries.push(report::to_report_entry(result));
    }

    let summary = report::Summary::from_entries(&entries);

    if options.json {
        // The JSON document is the only thing on stdout
        println!("{}", report::to_json(&entries)?);
    } else {
        println!();
        println!("📊 Summary:");
        println!("   ✅ OK: {}", summary.ok);
        println!("   ❌ Failed: {}", summary.failed);
        println!("   📋 Total: {}", summary.total);
    }

    // Export last, so a write failure still leaves the console output above
    if let Some(output) = &options.output {
        report::export_json(output, &entries)
            .with_context(|| format!("could not export results to {}", output.display()))?;
        if !options.json {
            println!("✅ Report exported to {}", output.display());
        }
    }

    // Per-target failures only change the exit code under --strict
    if options.strict && summary.failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}
