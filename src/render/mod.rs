//! Sudoku heatmap renderers.
//!
//! - [`ProbabilityGridRenderer`]: per-cell placement probabilities
//! - [`MentalStateGridRenderer`]: per-cell predicted digits from raw logits

mod mentals;
mod probs;

pub use mentals::MentalStateGridRenderer;
pub use probs::ProbabilityGridRenderer;
