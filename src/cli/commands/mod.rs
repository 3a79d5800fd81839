//! CLI command implementations

mod mentals;
mod panel;
mod probs;


use crate::backend::{write_figure, RecordingSurface, TerminalSurface};
use crate::cli::logging::log;
use crate::cli::{Cli, Command, DisplayArgs, LogLevel};
use crate::config::{load_config, RenderConfig};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Probs(args) => probs::run_probs(args, log_level),
        Command::Mentals(args) => mentals::run_mentals(args, log_level),
        Command::Panel(args) => panel::run_panel(args, log_level),
    }
}

/// Load the config file (if any) and apply command-line overrides.
fn resolve_config(
    display: &DisplayArgs,
    display_max: Option<f32>,
    level: LogLevel,
) -> Result<RenderConfig, String> {
    let mut config = match &display.config {
        Some(path) => {
            log(
                level,
                LogLevel::Verbose,
                &format!("Loading config: {}", path.display()),
            );
            load_config(path).map_err(|e| format!("Config error: {e}"))?
        }
        None => RenderConfig::default(),
    };

    if let Some(colormap) = display.colormap {
        config = config.with_colormap(colormap);
    }
    if let Some(display_max) = display_max {
        config = config.with_display_max(display_max);
    }
    config.validate().map_err(|e| format!("Config error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Render config: display_max={}, colormap={}",
            config.display_max, config.colormap
        ),
    );
    Ok(config)
}

/// Send recorded heatmaps to the image file or the terminal.
fn emit(
    figure: &RecordingSurface,
    display: &DisplayArgs,
    config: &RenderConfig,
    level: LogLevel,
) -> Result<(), String> {
    match &display.output {
        Some(path) => {
            write_figure(path, figure.drawn(), config).map_err(|e| format!("Render error: {e}"))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote heatmap: {}", path.display()),
            );
        }
        None => {
            let mut surface = TerminalSurface::new().with_color(display.color);
            figure
                .replay(&mut surface)
                .map_err(|e| format!("Render error: {e}"))?;
            print!("{}", surface.output());
        }
    }
    Ok(())
}
