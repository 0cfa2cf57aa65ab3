// Copyright 2026 Boletin Contributors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod annotation;
mod cli;
mod client;
mod progress;
mod report;
mod scan;
mod summary;

use scan::ScanOptions;

#[derive(Parser)]
#[command(
    name = "boletin",
    about = "Boletin — BOE gazette scanner for job competition announcements",
    version,
    after_help = "Run 'boletin scan --help' for the scan parameters.\nRun 'boletin' with no command to scan with stock parameters."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan daily summaries over a date range for matching announcements
    Scan {
        /// Days back from today; the scan covers days + 1 dates, today inclusive
        #[arg(long, default_value = "15")]
        days: u32,
        /// Section to select (case-insensitive substring match)
        #[arg(long, default_value = "B. Oposiciones y concursos")]
        section: String,
        /// Keyword an item's title must contain (case-insensitive)
        #[arg(long, default_value = "Asturias")]
        keyword: String,
        /// Per-request timeout in milliseconds
        #[arg(long, default_value = "10000")]
        timeout: u64,
        /// Truncation width of the notes column in the console table
        #[arg(long, default_value = "50")]
        note_width: usize,
        /// Export to a spreadsheet without asking
        #[arg(long)]
        export: bool,
        /// Spreadsheet destination (defaults to the desktop)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("BOLETIN_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("BOLETIN_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("BOLETIN_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("BOLETIN_NO_COLOR", "1");
    }

    let directive = if cli.verbose {
        "boletin=debug"
    } else {
        "boletin=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();

    let result = match cli.command {
        // No subcommand → stock scan, the original batch-job behavior
        None => {
            cli::scan_cmd::run(
                ScanOptions::default(),
                client::DEFAULT_TIMEOUT_MS,
                report::DEFAULT_NOTE_WIDTH,
                false,
                None,
            )
            .await
        }

        Some(Commands::Scan {
            days,
            section,
            keyword,
            timeout,
            note_width,
            export,
            output,
        }) => {
            cli::scan_cmd::run(
                ScanOptions {
                    days,
                    section,
                    keyword,
                },
                timeout,
                note_width,
                export,
                output,
            )
            .await
        }

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "boletin", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}
