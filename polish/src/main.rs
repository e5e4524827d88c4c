//! Batch snippet-enhancement CLI.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use polish::exit_codes;
use polish::logging;
use polish::run::{RunOptions, render_summary, run_pipeline};
use polish::scan::scan_root;

#[derive(Parser)]
#[command(
    name = "polish",
    version,
    about = "Idempotent batch enhancer for UI snippet corpora"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enhance every snippet under ROOT in place.
    Run {
        /// Snippet corpus root directory.
        root: PathBuf,
        /// Classify and transform but never write.
        #[arg(long)]
        dry_run: bool,
        /// Print the summary as a JSON object instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List walked files and their classification without modifying anything.
    Scan {
        /// Snippet corpus root directory.
        root: PathBuf,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            root,
            dry_run,
            json,
        } => cmd_run(&root, dry_run, json),
        Command::Scan { root } => cmd_scan(&root),
    }
}

fn cmd_run(root: &Path, dry_run: bool, json: bool) -> Result<()> {
    let stats = run_pipeline(root, &RunOptions { dry_run })?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", render_summary(&stats));
    }
    Ok(())
}

fn cmd_scan(root: &Path) -> Result<()> {
    for entry in scan_root(root)? {
        println!(
            "{}\t{}",
            entry.classification.label(),
            entry.path.display()
        );
    }
    Ok(())
}
