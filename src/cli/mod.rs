//! CLI module for sudoku-heatmap
//!
//! This module contains argument parsing, command handlers and output helpers.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, DisplayArgs, MentalsArgs, PanelArgs, ProbsArgs};
pub use commands::run_command;
pub use logging::LogLevel;
