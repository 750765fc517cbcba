//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "synaudit",
    version,
    about = "Audit directory trees for cloud-sync naming and size restrictions",
    long_about = "Synaudit — a tiny, fast CLI that audits a directory tree for file names and sizes a cloud sync backend would reject or mishandle.\n\nConfiguration precedence: CLI > synaudit.toml > defaults.",
    after_help = "Examples:\n  synaudit scan ./share\n  synaudit scan ./share --legacy --append\n  synaudit scan ./share --output json --report audit.csv",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current synaudit version.")]
    Version,
    /// Audit a directory tree for sync-hostile file names and sizes
    #[command(
        about = "Run the audit",
        long_about = "Walk the tree under ROOT and write one CSV row per rule violation: reserved names, forbidden characters and extensions, structural name problems, and size/length ceilings.",
        after_help = "Examples:\n  synaudit scan ./share\n  synaudit scan ./share --legacy --output json"
    )]
    Scan {
        #[arg(help = "Root directory to audit")]
        root: String,
        #[arg(
            long,
            action = clap::ArgAction::SetTrue,
            help = "Use the wider legacy forbidden-character set (adds # and % among others)"
        )]
        legacy: bool,
        #[arg(
            long,
            action = clap::ArgAction::SetTrue,
            help = "Append to the report file instead of recreating it"
        )]
        append: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Report file path (default: synaudit-results.csv)")]
        report: Option<String>,
    },
}
