//! Turning raw per-cell logits into predicted digits.
//!
//! Provides a numerically stable row-wise softmax and first-occurrence argmax
//! over an `[81, 9]` logit matrix.

use crate::error::{Error, Result};
use crate::grid::{cell_position, GRID_SIZE, NUM_CELLS, NUM_DIGITS};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Softmax with numerical stability
pub fn softmax(logits: ArrayView1<'_, f32>) -> Array1<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exp: Array1<f32> = logits.mapv(|x| (x - max).exp());
    let sum = exp.sum();
    exp / sum
}

/// Apply [`softmax`] independently to every row.
pub fn softmax_rows(logits: ArrayView2<'_, f32>) -> Array2<f32> {
    let mut probs = Array2::zeros(logits.raw_dim());
    for (row, mut out) in logits.rows().into_iter().zip(probs.rows_mut()) {
        out.assign(&softmax(row));
    }
    probs
}

/// Index and value of the largest element; ties go to the lowest index.
///
/// Returns `None` for an empty view.
pub fn argmax(values: ArrayView1<'_, f32>) -> Option<(usize, f32)> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, v)| match best {
            Some((_, b)) if v <= b => best,
            _ => Some((i, v)),
        })
}

/// Fail unless `logits` is an `[81, 9]` matrix of finite values.
pub fn check_logits(logits: ArrayView2<'_, f32>) -> Result<()> {
    let (rows, cols) = logits.dim();
    if rows != NUM_CELLS || cols != NUM_DIGITS {
        return Err(Error::ShapeMismatch {
            what: "logits",
            expected: vec![NUM_CELLS, NUM_DIGITS],
            actual: vec![rows, cols],
        });
    }
    if let Some(((cell, class), &value)) = logits.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteLogit { cell, class, value });
    }
    Ok(())
}

/// Per-cell winning digit and its softmax probability, laid out 9×9.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitPredictions {
    /// Predicted digit per cell, 1..=9
    pub digits: Array2<u8>,
    /// Probability of the predicted digit per cell, in [0, 1]
    pub confidence: Array2<f32>,
}

impl DigitPredictions {
    /// Predict digits from an `[81, 9]` logit matrix.
    pub fn from_logits(logits: ArrayView2<'_, f32>) -> Result<Self> {
        check_logits(logits)?;
        let probs = softmax_rows(logits);

        let mut digits = Array2::zeros((GRID_SIZE, GRID_SIZE));
        let mut confidence = Array2::zeros((GRID_SIZE, GRID_SIZE));
        for (cell, row) in probs.axis_iter(Axis(0)).enumerate() {
            let (class, p) = argmax(row).unwrap_or((0, 0.0));
            let pos = cell_position(cell);
            digits[pos] = class as u8 + 1;
            confidence[pos] = p;
        }

        Ok(Self { digits, confidence })
    }

    /// Predicted digit at `(row, col)`.
    pub fn digit(&self, row: usize, col: usize) -> u8 {
        self.digits[(row, col)]
    }

    /// Confidence of the prediction at `(row, col)`.
    pub fn confidence(&self, row: usize, col: usize) -> f32 {
        self.confidence[(row, col)]
    }
}
