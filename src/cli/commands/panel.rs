//! Panel command implementation

use super::{emit, resolve_config};
use crate::backend::RecordingSurface;
use crate::cli::logging::log;
use crate::cli::{LogLevel, PanelArgs};
use crate::input::{load_logits, load_probabilities};
use crate::render::{MentalStateGridRenderer, ProbabilityGridRenderer};

pub fn run_panel(args: PanelArgs, level: LogLevel) -> Result<(), String> {
    let config = resolve_config(&args.display, args.display_max, level)?;

    let probs = load_probabilities(&args.probs).map_err(|e| format!("Input error: {e}"))?;
    let logits = load_logits(&args.logits)
        .and_then(|input| input.to_array())
        .map_err(|e| format!("Input error: {e}"))?;

    // Both inputs are validated by the renderers before anything is written.
    let mut figure = RecordingSurface::new();
    ProbabilityGridRenderer::new(config.clone())
        .render(&mut figure, probs.to_array().view(), &probs.valid)
        .and_then(|figure| MentalStateGridRenderer::new(config.clone()).render(figure, logits.view()))
        .map_err(|e| format!("Render error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Composed {} panels", figure.len()),
    );
    emit(&figure, &args.display, &config, level)
}
