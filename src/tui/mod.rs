//! Interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Focus, Action)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `run`: effects (terminal lifecycle, event loop)
//! - `theme`: style constants

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
