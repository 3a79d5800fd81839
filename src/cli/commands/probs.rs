//! Probs command implementation

use super::{emit, resolve_config};
use crate::backend::RecordingSurface;
use crate::cli::logging::log;
use crate::cli::{LogLevel, ProbsArgs};
use crate::input::load_probabilities;
use crate::render::ProbabilityGridRenderer;

/// Format a short summary of a probability vector
pub fn format_probability_summary(probabilities: &[f32], valid: &[usize]) -> String {
    let (best_cell, best) = probabilities
        .iter()
        .copied()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |acc, (i, p)| if p > acc.1 { (i, p) } else { acc });
    let total: f32 = probabilities.iter().sum();
    format!(
        "  Cells: {}\n  Sum: {:.4}\n  Max: {:.4} at row {}, col {}\n  Valid moves: {}",
        probabilities.len(),
        total,
        best,
        best_cell / 9 + 1,
        best_cell % 9 + 1,
        valid.len()
    )
}

pub fn run_probs(args: ProbsArgs, level: LogLevel) -> Result<(), String> {
    let config = resolve_config(&args.display, args.display_max, level)?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Reading probabilities: {}", args.input.display()),
    );
    let input = load_probabilities(&args.input).map_err(|e| format!("Input error: {e}"))?;
    log(
        level,
        LogLevel::Verbose,
        &format_probability_summary(&input.probabilities, &input.valid),
    );

    let mut figure = RecordingSurface::new();
    ProbabilityGridRenderer::new(config.clone())
        .render(&mut figure, input.to_array().view(), &input.valid)
        .map_err(|e| format!("Render error: {e}"))?;

    emit(&figure, &args.display, &config, level)
}
