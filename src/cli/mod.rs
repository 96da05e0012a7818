//! CLI module for chronotab.
//!
//! - `commands`: argument definitions using clap derive
//! - `display`: messages printed outside the terminal UI

pub mod commands;
pub mod display;

pub use commands::Cli;
pub use display::Display;
