//! split-tab CLI
//!
//! Track and split bills with friends in the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use split_tab::ledger::Ledger;
use split_tab::roster_file::load_roster;
use split_tab::tui;
use split_tab::types::{Friend, seed_roster};

#[derive(Parser)]
#[command(name = "split-tab")]
#[command(about = "Track and split bills with friends in the terminal")]
#[command(version)]
struct Cli {
    /// JSON roster file to start from (default: built-in demo roster)
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = resolve_roster(cli.roster).and_then(|friends| {
        tui::run::run(Ledger::new(friends)).map_err(|e| e.to_string())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve the starting roster: the given file, or the built-in demo data.
fn resolve_roster(path: Option<PathBuf>) -> Result<Vec<Friend>, String> {
    match path {
        Some(p) => load_roster(&p).map_err(|e| e.to_string()),
        None => Ok(seed_roster()),
    }
}
