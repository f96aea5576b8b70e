//! Fitted feature scaler

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Threshold below which a fitted scale is treated as zero.
const SCALE_EPSILON: f64 = 1e-9;

/// Mean/variance normalization fitted at training time.
///
/// Applies `(x - mean) / scale` per feature. The fitted vectors define the
/// feature width the whole artifact pair expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Identity scaler of the given width (mean 0, scale 1).
    pub fn identity(width: usize) -> Self {
        Self {
            mean: vec![0.0; width],
            scale: vec![1.0; width],
        }
    }

    /// Number of features the scaler was fitted on.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Z-score a feature vector.
    ///
    /// Fails with [`ModelError::SchemaMismatch`] when the vector width
    /// disagrees with the fitted width. A near-zero fitted scale leaves the
    /// centered value unscaled (constant training feature).
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.width() {
            return Err(ModelError::SchemaMismatch {
                expected: self.width(),
                actual: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                let centered = x - mean;
                if scale.abs() < SCALE_EPSILON {
                    centered
                } else {
                    centered / scale
                }
            })
            .collect())
    }
}
