//! sudoku-heatmap CLI
//!
//! Renders Sudoku model outputs as annotated 9x9 heatmaps.
//!
//! # Usage
//!
//! ```bash
//! # Probability vector, printed to the terminal
//! sudoku-heatmap probs probs.json
//!
//! # Predicted digits from raw logits, written as SVG
//! sudoku-heatmap mentals logits.json --output mentals.svg
//!
//! # Both side by side
//! sudoku-heatmap panel --probs probs.json --logits logits.json -o panel.png
//! ```

use clap::Parser;
use std::process::ExitCode;
use sudoku_heatmap::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
