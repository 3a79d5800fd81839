//! JSON input documents read by the command-line tool.

use crate::error::{Error, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Probability vector plus the cells to underline.
///
/// ```json
/// {"probabilities": [0.01, 0.2, ...], "valid": [3, 17]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityInput {
    /// One probability per cell, row-major
    pub probabilities: Vec<f32>,
    /// Flat indices of valid next moves
    #[serde(default)]
    pub valid: Vec<usize>,
}

impl ProbabilityInput {
    /// Probabilities as an ndarray vector.
    pub fn to_array(&self) -> Array1<f32> {
        Array1::from(self.probabilities.clone())
    }
}

/// Raw model logits, one row of class scores per cell.
///
/// ```json
/// {"logits": [[0.1, 2.3, ...], ...]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogitInput {
    /// `logits[cell][class]`
    pub logits: Vec<Vec<f32>>,
}

impl LogitInput {
    /// Logits as an ndarray matrix.
    ///
    /// Rows must all have the same length; the `[81, 9]` shape itself is
    /// checked by the renderer.
    pub fn to_array(&self) -> Result<Array2<f32>> {
        let rows = self.logits.len();
        let cols = self.logits.first().map_or(0, Vec::len);
        if let Some(bad) = self.logits.iter().find(|r| r.len() != cols) {
            return Err(Error::ShapeMismatch {
                what: "logit rows",
                expected: vec![rows, cols],
                actual: vec![rows, bad.len()],
            });
        }
        let flat: Vec<f32> = self.logits.iter().flatten().copied().collect();
        Array2::from_shape_vec((rows, cols), flat).map_err(|_| Error::ShapeMismatch {
            what: "logits",
            expected: vec![rows, cols],
            actual: vec![self.logits.iter().map(Vec::len).sum()],
        })
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("reading input {}", path.display()), e))?;
    serde_json::from_str(&content).map_err(|e| Error::InputParsing {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read a [`ProbabilityInput`] document.
pub fn load_probabilities<P: AsRef<Path>>(path: P) -> Result<ProbabilityInput> {
    read_json(path.as_ref())
}

/// Read a [`LogitInput`] document.
pub fn load_logits<P: AsRef<Path>>(path: P) -> Result<LogitInput> {
    read_json(path.as_ref())
}
