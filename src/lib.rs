//! Heatmap inspection of Sudoku model outputs.
//!
//! Two renderers turn model tensors into annotated 9×9 heatmaps:
//!
//! - [`ProbabilityGridRenderer`] draws an 81-cell probability vector, with
//!   candidate cells underlined.
//! - [`MentalStateGridRenderer`] turns `[81, 9]` logits into the predicted
//!   digit per cell, shaded by its softmax confidence.
//!
//! Both draw onto any [`HeatmapSurface`]: a terminal, a `plotters` drawing
//! area, or an in-memory recorder.
//!
//! # Example
//!
//! ```
//! use ndarray::Array1;
//! use sudoku_heatmap::{ProbabilityGridRenderer, TerminalSurface};
//!
//! let probs = Array1::from_elem(81, 0.11);
//! let mut surface = TerminalSurface::new();
//! ProbabilityGridRenderer::default()
//!     .render(&mut surface, probs.view(), &[0, 80])
//!     .unwrap();
//! assert!(surface.output().contains("_0.11_"));
//! ```

pub mod annotation;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod heatmap;
pub mod inference;
pub mod input;
pub mod render;

pub use annotation::{Annotation, AnnotationGrid, UnderlineMarkup};
pub use backend::{write_figure, PlotSurface, RecordingSurface, TerminalSurface};
pub use config::{load_config, RenderConfig};
pub use error::{Error, Result};
pub use heatmap::{ColorMap, ColorRange, HeatmapSpec, HeatmapSurface, Rgb};
pub use inference::DigitPredictions;
pub use render::{MentalStateGridRenderer, ProbabilityGridRenderer};
