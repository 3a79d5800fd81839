//! Surface that keeps every heatmap it is asked to draw.

use crate::error::Result;
use crate::heatmap::{HeatmapSpec, HeatmapSurface};

/// In-memory surface recording draw calls in order.
///
/// Useful for composing panels before choosing a backend, and for checking
/// that a failed render issued no drawing calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    drawn: Vec<HeatmapSpec>,
}

impl RecordingSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Heatmaps drawn so far, oldest first.
    pub fn drawn(&self) -> &[HeatmapSpec] {
        &self.drawn
    }

    /// Most recently drawn heatmap.
    pub fn last(&self) -> Option<&HeatmapSpec> {
        self.drawn.last()
    }

    /// Number of draw calls received.
    pub fn len(&self) -> usize {
        self.drawn.len()
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }

    /// Forget all recorded heatmaps.
    pub fn clear(&mut self) {
        self.drawn.clear();
    }

    /// Replay every recorded heatmap onto another surface.
    pub fn replay<S: HeatmapSurface + ?Sized>(&self, target: &mut S) -> Result<()> {
        for spec in &self.drawn {
            target.draw_heatmap(spec)?;
        }
        Ok(())
    }
}

impl HeatmapSurface for RecordingSurface {
    fn draw_heatmap(&mut self, spec: &HeatmapSpec) -> Result<()> {
        self.drawn.push(spec.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ProbabilityGridRenderer;
    use ndarray::Array1;

    #[test]
    fn test_records_in_order_and_replays() {
        let renderer = ProbabilityGridRenderer::default();
        let mut surface = RecordingSurface::new();
        renderer
            .render(&mut surface, Array1::from_elem(81, 0.1).view(), &[])
            .unwrap()
            .draw_heatmap(&renderer.spec(Array1::from_elem(81, 0.3).view(), &[2]).unwrap())
            .unwrap();

        assert_eq!(surface.len(), 2);
        assert_eq!(surface.drawn()[0].values[(0, 0)], 0.1);
        assert_eq!(surface.last().map(|s| s.values[(0, 0)]), Some(0.3));

        let mut copy = RecordingSurface::new();
        surface.replay(&mut copy).unwrap();
        assert_eq!(copy.drawn(), surface.drawn());
    }
}
