//! Mentals command implementation

use super::{emit, resolve_config};
use crate::backend::RecordingSurface;
use crate::cli::logging::{enabled, log};
use crate::cli::{LogLevel, MentalsArgs};
use crate::inference::DigitPredictions;
use crate::input::load_logits;
use crate::render::MentalStateGridRenderer;

/// Format the predicted digits as a plain 9x9 board
pub fn format_board(predictions: &DigitPredictions) -> String {
    predictions
        .digits
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_mentals(args: MentalsArgs, level: LogLevel) -> Result<(), String> {
    let config = resolve_config(&args.display, None, level)?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Reading logits: {}", args.input.display()),
    );
    let logits = load_logits(&args.input)
        .and_then(|input| input.to_array())
        .map_err(|e| format!("Input error: {e}"))?;

    let renderer = MentalStateGridRenderer::new(config.clone());
    if enabled(level, LogLevel::Verbose) {
        let predictions = renderer
            .predict(logits.view())
            .map_err(|e| format!("Render error: {e}"))?;
        let mean = predictions.confidence.mean().unwrap_or(0.0);
        log(
            level,
            LogLevel::Verbose,
            &format!(
                "Predicted board (mean confidence {mean:.4}):\n{}",
                format_board(&predictions)
            ),
        );
    }

    let mut figure = RecordingSurface::new();
    renderer
        .render(&mut figure, logits.view())
        .map_err(|e| format!("Render error: {e}"))?;

    emit(&figure, &args.display, &config, level)
}
