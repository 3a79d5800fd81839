//! End-to-end scenarios for both renderers

use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array2};
use sudoku_heatmap::{
    ColorRange, Error, MentalStateGridRenderer, ProbabilityGridRenderer, RecordingSurface,
    RenderConfig, TerminalSurface, UnderlineMarkup,
};

#[test]
fn test_uniform_probabilities_with_corner_candidates() {
    let probs = Array1::from_elem(81, 0.11f32);
    let mut surface = RecordingSurface::new();
    ProbabilityGridRenderer::default()
        .render(&mut surface, probs.view(), &[0, 80])
        .unwrap();

    let spec = surface.last().unwrap();
    assert_eq!(spec.annotations.dim(), (9, 9));
    assert!(spec.annotations.iter().all(|a| a.text == "0.11"));
    for ((row, col), a) in spec.annotations.indexed_iter() {
        let corner = (row, col) == (0, 0) || (row, col) == (8, 8);
        assert_eq!(a.underline, corner, "cell ({row}, {col})");
    }
    assert_eq!(
        spec.annotations[(8, 8)].markup(UnderlineMarkup::Tex),
        "\\underline{0.11}"
    );
    assert_eq!(spec.color_range, ColorRange::new(0.0, 0.2));
}

#[test]
fn test_peaked_logit_row_predicts_one() {
    let mut logits = Array2::<f32>::zeros((81, 9));
    logits[[0, 0]] = 5.0;

    let mut surface = RecordingSurface::new();
    MentalStateGridRenderer::default()
        .render(&mut surface, logits.view())
        .unwrap();

    let spec = surface.last().unwrap();
    assert_eq!(spec.annotations[(0, 0)].text, "1");
    // e^5 / (e^5 + 8) over nine classes
    assert_abs_diff_eq!(spec.values[(0, 0)], 0.948_85, epsilon = 1e-4);
    assert_eq!(spec.color_range, ColorRange::unit());
}

#[test]
fn test_mental_state_annotations_are_nine_by_nine() {
    let logits = Array2::<f32>::zeros((81, 9));
    let spec = MentalStateGridRenderer::default().spec(logits.view()).unwrap();
    assert_eq!(spec.annotations.dim(), (9, 9));
    assert_eq!(spec.annotations.len(), 81);
}

#[test]
fn test_both_renderers_compose_on_one_surface() {
    let config = RenderConfig::default().with_display_max(0.5);
    let mut surface = TerminalSurface::new();

    let probs = Array1::from_elem(81, 0.25f32);
    let logits = Array2::<f32>::zeros((81, 9));
    let surface = ProbabilityGridRenderer::new(config.clone())
        .render(&mut surface, probs.view(), &[40])
        .unwrap();
    let surface = MentalStateGridRenderer::new(config)
        .render(surface, logits.view())
        .unwrap();

    let text = surface.output();
    assert_eq!(text.matches("_0.25_").count(), 1);
    assert!(text.contains("░1░"));
}

#[test]
fn test_probability_shape_error_message() {
    let err = ProbabilityGridRenderer::default()
        .spec(Array1::<f32>::zeros(80).view(), &[])
        .unwrap_err();
    assert_eq!(err.code(), "E040");
    assert!(err.is_user_error());
    assert!(matches!(err, Error::ShapeMismatch { ref actual, .. } if actual == &vec![80]));
}
