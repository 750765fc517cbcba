//! Synaudit CLI binary entry point.
//! Delegates to modules for scanning and prints results.

mod cli;
mod config;
mod error;
mod models;
mod output;
mod report;
mod rules;
mod scan;
mod utils;
mod walker;

use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Scan {
            root,
            legacy,
            append,
            output,
            report,
        } => {
            let cwd = Path::new(".");
            let eff = match config::resolve_effective(
                cwd,
                &root,
                if legacy { Some(true) } else { None },
                if append { Some(true) } else { None },
                output.as_deref(),
                report.as_deref(),
            ) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            // Friendly note if no synaudit config was found
            if config::load_config(cwd).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No synaudit.toml found; using defaults."
                );
            }
            run_scan_command(&eff);
        }
    }
}

/// Drive one scan: open the report sink, walk and evaluate, then print the
/// summary. Any traversal or report failure aborts the run with a single
/// line on stderr; the report handle is released on every path.
fn run_scan_command(eff: &config::Effective) {
    let human = eff.output != "json";

    if matches!(eff.rules.charset, rules::charset::Charset::Legacy) {
        eprintln!(
            "{} {}",
            utils::info_prefix(),
            "Legacy forbidden-character set enabled."
        );
    }

    let mut sink = match report::ReportSink::open(&eff.report, eff.append) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };

    let outcome = scan::run_scan(
        &eff.root,
        &eff.rules,
        |ordinal, name| {
            if human {
                output::progress_line(ordinal, name);
            }
        },
        |finding| sink.write_finding(finding),
    );

    let result = match outcome {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };

    if let Err(e) = sink.finish() {
        eprintln!("{} {}", utils::error_prefix(), e);
        std::process::exit(2);
    }

    output::print_scan(&result, &eff.output, &eff.report, &eff.rules.support_url);
}
