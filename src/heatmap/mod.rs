//! Heatmap description and the drawing capability behind it.
//!
//! Renderers build a [`HeatmapSpec`] and hand it to any [`HeatmapSurface`];
//! the surface decides how cells, labels and underlines actually look.

mod colormap;

pub use colormap::{ColorMap, ColorRange, Rgb};

use crate::annotation::AnnotationGrid;
use crate::error::Result;
use ndarray::Array2;

/// Everything needed to draw one annotated heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapSpec {
    /// Values driving the fill color, one per cell
    pub values: Array2<f32>,
    /// Text drawn in each cell
    pub annotations: AnnotationGrid,
    /// Fixed value range of the color scale
    pub color_range: ColorRange,
    /// Column labels, left to right
    pub x_labels: Vec<String>,
    /// Row labels, top to bottom
    pub y_labels: Vec<String>,
    /// Color ramp
    pub colormap: ColorMap,
    /// Draw cells as squares
    pub square: bool,
    /// Draw a color scale legend
    pub colorbar: bool,
}

impl HeatmapSpec {
    /// Number of `(rows, cols)`.
    pub fn dim(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Fill color of cell `(row, col)`, `None` if its value is NaN.
    pub fn cell_color(&self, row: usize, col: usize) -> Option<Rgb> {
        self.colormap.color_for(self.values[(row, col)], self.color_range)
    }
}

/// A drawing target that can render an annotated heatmap.
///
/// Implementations mutate themselves in place; callers keep ownership and
/// may compose several heatmaps on one surface.
pub trait HeatmapSurface {
    /// Draw `spec` onto the surface.
    fn draw_heatmap(&mut self, spec: &HeatmapSpec) -> Result<()>;
}

impl<S: HeatmapSurface + ?Sized> HeatmapSurface for &mut S {
    fn draw_heatmap(&mut self, spec: &HeatmapSpec) -> Result<()> {
        (**self).draw_heatmap(spec)
    }
}
