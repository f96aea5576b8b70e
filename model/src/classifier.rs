//! Binary logistic classifier

use serde::{Deserialize, Serialize};

/// Trained logistic-regression weights for the binary winner decision.
///
/// Label 1 means "side A wins", label 0 means "side B wins". The sigmoid of
/// the decision function is P(label 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LogisticClassifier {
    /// Number of features the classifier was trained on.
    pub fn width(&self) -> usize {
        self.weights.len()
    }

    /// Raw decision function `w . x + b` over an already-scaled vector.
    ///
    /// The caller guarantees the width matches; the artifact wrapper checks
    /// it before scaling.
    pub fn decision(&self, scaled: &[f64]) -> f64 {
        debug_assert_eq!(scaled.len(), self.width());
        self.weights
            .iter()
            .zip(scaled)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    /// P(label 1) via the logistic sigmoid of the decision function.
    pub fn probability(&self, scaled: &[f64]) -> f64 {
        sigmoid(self.decision(scaled))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
