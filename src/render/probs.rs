//! Probability heatmap with underlined candidate cells.

use crate::annotation::{format_probability, Annotation, AnnotationGrid};
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::grid::{check_cell_count, tick_labels, to_grid, GRID_SIZE, NUM_CELLS};
use crate::heatmap::{ColorRange, HeatmapSpec, HeatmapSurface};
use ndarray::{Array1, ArrayView1};

/// Renders an 81-cell probability vector as a 9×9 annotated heatmap.
///
/// Each cell shows its probability with two decimals. Cells listed as valid
/// moves are underlined. The color scale runs from 0 to
/// [`RenderConfig::display_max`]; anything above saturates.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityGridRenderer {
    config: RenderConfig,
}

impl ProbabilityGridRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Build the per-cell annotations without drawing anything.
    ///
    /// Every entry of `valid_indices` must be a flat cell index below 81.
    pub fn annotations(
        &self,
        probabilities: ArrayView1<'_, f32>,
        valid_indices: &[usize],
    ) -> Result<AnnotationGrid> {
        check_cell_count("probabilities", probabilities.len())?;
        if let Some(&index) = valid_indices.iter().find(|&&i| i >= NUM_CELLS) {
            return Err(Error::CellIndexOutOfRange {
                index,
                cells: NUM_CELLS,
            });
        }

        let mut annotations: Array1<Annotation> = probabilities
            .iter()
            .map(|&p| Annotation::plain(format_probability(p)))
            .collect();
        for &index in valid_indices {
            annotations[index].underline = true;
        }

        to_grid("annotations", annotations.view())
    }

    /// Build the full heatmap description without drawing anything.
    ///
    /// Fails with [`Error::ConfigValue`] if the configuration is invalid.
    pub fn spec(
        &self,
        probabilities: ArrayView1<'_, f32>,
        valid_indices: &[usize],
    ) -> Result<HeatmapSpec> {
        self.config.validate()?;
        let annotations = self.annotations(probabilities, valid_indices)?;
        let values = to_grid("probabilities", probabilities)?;
        debug_assert_eq!(values.dim(), (GRID_SIZE, GRID_SIZE));

        Ok(HeatmapSpec {
            values,
            annotations,
            color_range: ColorRange::new(0.0, self.config.display_max),
            x_labels: tick_labels(),
            y_labels: tick_labels(),
            colormap: self.config.colormap,
            square: true,
            colorbar: false,
        })
    }

    /// Draw the heatmap onto `surface` and hand the surface back.
    ///
    /// Input is fully validated before the surface is touched.
    pub fn render<'s, S: HeatmapSurface + ?Sized>(
        &self,
        surface: &'s mut S,
        probabilities: ArrayView1<'_, f32>,
        valid_indices: &[usize],
    ) -> Result<&'s mut S> {
        let spec = self.spec(probabilities, valid_indices)?;
        surface.draw_heatmap(&spec)?;
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::UnderlineMarkup;
    use crate::backend::RecordingSurface;
    use ndarray::Array1;

    fn uniform(p: f32) -> Array1<f32> {
        Array1::from_elem(81, p)
    }

    #[test]
    fn test_annotations_format_and_underline() {
        let renderer = ProbabilityGridRenderer::default();
        let grid = renderer.annotations(uniform(0.11).view(), &[0, 80]).unwrap();

        assert_eq!(grid.dim(), (9, 9));
        assert!(grid.iter().all(|a| a.text == "0.11"));
        assert!(grid[(0, 0)].underline);
        assert!(grid[(8, 8)].underline);
        assert_eq!(grid.iter().filter(|a| a.underline).count(), 2);
        assert_eq!(
            grid[(0, 0)].markup(UnderlineMarkup::Tex),
            "\\underline{0.11}"
        );
    }

    #[test]
    fn test_underline_does_not_change_values() {
        let renderer = ProbabilityGridRenderer::default();
        let probs = Array1::from_iter((0..81).map(|i| i as f32 / 100.0));
        let spec = renderer.spec(probs.view(), &[3, 4]).unwrap();
        assert_eq!(spec.values[(0, 3)], 0.03);
        assert_eq!(spec.values[(8, 8)], 0.80);
        assert_eq!(spec.annotations[(0, 4)].text, "0.04");
    }

    #[test]
    fn test_duplicate_valid_indices_are_idempotent() {
        let renderer = ProbabilityGridRenderer::default();
        let grid = renderer.annotations(uniform(0.5).view(), &[7, 7, 7]).unwrap();
        assert_eq!(grid.iter().filter(|a| a.underline).count(), 1);
        assert_eq!(grid[(0, 7)].text, "0.50");
    }

    #[test]
    fn test_spec_uses_display_max() {
        let renderer = ProbabilityGridRenderer::new(RenderConfig::default().with_display_max(0.4));
        let spec = renderer.spec(uniform(0.1).view(), &[]).unwrap();
        assert_eq!(spec.color_range, ColorRange::new(0.0, 0.4));
        assert!(spec.square);
        assert!(!spec.colorbar);
        assert_eq!(spec.x_labels, tick_labels());
        assert_eq!(spec.y_labels, tick_labels());
    }

    #[test]
    fn test_values_above_ceiling_saturate() {
        let renderer = ProbabilityGridRenderer::default();
        let spec = renderer.spec(uniform(0.9).view(), &[]).unwrap();
        let darkest = spec.colormap.color_at(1.0);
        assert_eq!(spec.cell_color(4, 4), Some(darkest));
        assert_eq!(spec.values[(4, 4)], 0.9);
    }

    #[test]
    fn test_render_returns_same_surface() {
        let renderer = ProbabilityGridRenderer::default();
        let mut surface = RecordingSurface::new();
        let returned = renderer
            .render(&mut surface, uniform(0.2).view(), &[1])
            .unwrap();
        assert_eq!(returned.len(), 1);
        returned.clear();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_wrong_length_draws_nothing() {
        let renderer = ProbabilityGridRenderer::default();
        let mut surface = RecordingSurface::new();
        let err = renderer
            .render(&mut surface, Array1::zeros(80).view(), &[])
            .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_out_of_range_index_draws_nothing() {
        let renderer = ProbabilityGridRenderer::default();
        let mut surface = RecordingSurface::new();
        let err = renderer
            .render(&mut surface, uniform(0.1).view(), &[3, 81])
            .unwrap_err();
        assert!(matches!(err, Error::CellIndexOutOfRange { index: 81, .. }));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_invalid_display_max_draws_nothing() {
        for display_max in [f32::NAN, -1.0, 0.0] {
            let renderer =
                ProbabilityGridRenderer::new(RenderConfig::default().with_display_max(display_max));
            let mut surface = RecordingSurface::new();
            let err = renderer
                .render(&mut surface, uniform(0.1).view(), &[])
                .unwrap_err();
            assert!(
                matches!(err, Error::ConfigValue { .. }),
                "display_max {display_max}: {err:?}"
            );
            assert!(surface.is_empty());
        }
    }
}
