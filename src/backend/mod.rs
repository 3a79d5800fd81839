//! Concrete [`HeatmapSurface`](crate::heatmap::HeatmapSurface) implementations.

mod plot;
mod recording;
mod terminal;

pub use plot::{panel_size, write_figure, PlotSurface};
pub use recording::RecordingSurface;
pub use terminal::TerminalSurface;
