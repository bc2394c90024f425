//! split-tab: track and split bills with friends in the terminal.

pub mod ledger;
pub mod roster_file;
pub mod split;
pub mod tui;
pub mod types;
