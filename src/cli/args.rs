//! Command-line argument types

use crate::heatmap::ColorMap;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sudoku-heatmap: inspect Sudoku model outputs as annotated heatmaps
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sudoku-heatmap")]
#[command(version)]
#[command(about = "Render Sudoku model probabilities and digit predictions as 9x9 heatmaps")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render a per-cell probability vector, underlining valid moves
    Probs(ProbsArgs),

    /// Render per-cell digit predictions from raw logits
    Mentals(MentalsArgs),

    /// Render both heatmaps side by side into one image
    Panel(PanelArgs),
}

/// Display options shared by every command
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct DisplayArgs {
    /// YAML render configuration
    #[arg(short, long, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Output image (.svg, .png, ...); prints to the terminal when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Color ramp: blues, greens, greys, reds
    #[arg(long)]
    pub colormap: Option<ColorMap>,

    /// Use ANSI truecolor in terminal output
    #[arg(long)]
    pub color: bool,
}

/// Arguments for the probs command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ProbsArgs {
    /// JSON file with "probabilities" (81 values) and optional "valid" indices
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Ceiling of the probability color scale
    #[arg(long)]
    pub display_max: Option<f32>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the mentals command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct MentalsArgs {
    /// JSON file with "logits" (81 rows of 9 values)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the panel command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct PanelArgs {
    /// Probability input for the left panel
    #[arg(long, value_name = "JSON")]
    pub probs: PathBuf,

    /// Logit input for the right panel
    #[arg(long, value_name = "JSON")]
    pub logits: PathBuf,

    /// Ceiling of the probability color scale
    #[arg(long)]
    pub display_max: Option<f32>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Parse command-line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
