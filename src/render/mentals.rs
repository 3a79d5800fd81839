//! Heatmap of the digit a model currently believes in for each cell.

use crate::annotation::{Annotation, AnnotationGrid};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::grid::tick_labels;
use crate::heatmap::{ColorRange, HeatmapSpec, HeatmapSurface};
use crate::inference::DigitPredictions;
use ndarray::ArrayView2;

/// Renders an `[81, 9]` logit matrix as a 9×9 heatmap of predicted digits.
///
/// Each cell is filled by the softmax probability of its winning digit on a
/// fixed `[0, 1]` scale and labelled with that digit.
#[derive(Debug, Clone, Default)]
pub struct MentalStateGridRenderer {
    config: RenderConfig,
}

impl MentalStateGridRenderer {
    /// Create a renderer with the given configuration.
    ///
    /// Only the colormap is taken from `config`; the scale is always `[0, 1]`.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Predicted digit and confidence per cell.
    pub fn predict(&self, logits: ArrayView2<'_, f32>) -> Result<DigitPredictions> {
        DigitPredictions::from_logits(logits)
    }

    /// Digit labels, one per cell, reshaped 9×9.
    pub fn annotations(predictions: &DigitPredictions) -> AnnotationGrid {
        predictions
            .digits
            .mapv(|digit| Annotation::plain(digit.to_string()))
    }

    /// Build the full heatmap description without drawing anything.
    pub fn spec(&self, logits: ArrayView2<'_, f32>) -> Result<HeatmapSpec> {
        let predictions = self.predict(logits)?;
        let annotations = Self::annotations(&predictions);

        Ok(HeatmapSpec {
            values: predictions.confidence,
            annotations,
            color_range: ColorRange::unit(),
            x_labels: tick_labels(),
            y_labels: tick_labels(),
            colormap: self.config.colormap,
            square: true,
            colorbar: false,
        })
    }

    /// Draw the heatmap onto `surface` and hand the surface back.
    pub fn render<'s, S: HeatmapSurface + ?Sized>(
        &self,
        surface: &'s mut S,
        logits: ArrayView2<'_, f32>,
    ) -> Result<&'s mut S> {
        let spec = self.spec(logits)?;
        surface.draw_heatmap(&spec)?;
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingSurface;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::Array2;

    fn peaked_logits() -> Array2<f32> {
        let mut logits = Array2::<f32>::zeros((81, 9));
        for cell in 0..81 {
            logits[[cell, cell % 9]] = 5.0;
        }
        logits
    }

    #[test]
    fn test_annotation_grid_is_nine_by_nine() {
        let renderer = MentalStateGridRenderer::default();
        let spec = renderer.spec(peaked_logits().view()).unwrap();
        assert_eq!(spec.annotations.dim(), (9, 9));
        assert_eq!(spec.values.dim(), (9, 9));
    }

    #[test]
    fn test_annotations_are_predicted_digits() {
        let renderer = MentalStateGridRenderer::default();
        let spec = renderer.spec(peaked_logits().view()).unwrap();
        for row in 0..9 {
            for col in 0..9 {
                assert_eq!(spec.annotations[(row, col)].text, (col + 1).to_string());
                assert!(!spec.annotations[(row, col)].underline);
            }
        }
    }

    #[test]
    fn test_fill_is_winning_probability_on_unit_scale() {
        let renderer = MentalStateGridRenderer::new(RenderConfig::default().with_display_max(0.05));
        let spec = renderer.spec(peaked_logits().view()).unwrap();
        assert_eq!(spec.color_range, ColorRange::unit());
        let expected = 5.0f32.exp() / (5.0f32.exp() + 8.0);
        assert_abs_diff_eq!(spec.values[(3, 3)], expected, epsilon = 1e-5);
    }

    #[test]
    fn test_render_draws_once() {
        let renderer = MentalStateGridRenderer::default();
        let mut surface = RecordingSurface::new();
        renderer.render(&mut surface, peaked_logits().view()).unwrap();
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_wrong_class_count_draws_nothing() {
        let renderer = MentalStateGridRenderer::default();
        let mut surface = RecordingSurface::new();
        let logits = Array2::<f32>::zeros((81, 8));
        let err = renderer.render(&mut surface, logits.view()).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
        assert!(surface.is_empty());
    }
}
