//! Artifact pair loading and inference

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::LogisticClassifier;
use crate::scaler::StandardScaler;
use crate::ModelError;

/// One inference result: the committed winner label and both class
/// probabilities, produced together from a single decision-function
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// 1 = side A wins, 0 = side B wins. There is no draw state.
    pub label: u8,
    /// `[P(label 0), P(label 1)]`; sums to 1.0.
    pub probabilities: [f64; 2],
}

/// The scaler/classifier pair, versioned together in one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub scaler: StandardScaler,
    pub classifier: LogisticClassifier,
}

impl ModelArtifacts {
    /// Build from parts, validating that the two widths agree.
    pub fn new(
        scaler: StandardScaler,
        classifier: LogisticClassifier,
    ) -> Result<Self, ModelError> {
        if scaler.width() != classifier.width() {
            return Err(ModelError::SchemaMismatch {
                expected: scaler.width(),
                actual: classifier.width(),
            });
        }
        Ok(Self { scaler, classifier })
    }

    /// Load and validate an artifact pair from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Load(format!("{}: {e}", path.display())))?;
        let artifacts = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            width = artifacts.input_width(),
            "loaded model artifacts"
        );
        Ok(artifacts)
    }

    /// Parse and validate an artifact pair from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let raw: ModelArtifacts =
            serde_json::from_str(json).map_err(|e| ModelError::Load(e.to_string()))?;
        Self::new(raw.scaler, raw.classifier)
    }

    /// The feature width this artifact pair expects.
    pub fn input_width(&self) -> usize {
        self.scaler.width()
    }

    /// Scale the feature vector and score it.
    ///
    /// The label is 1 exactly when P(label 1) >= 0.5, so the label is the
    /// tie-break authority at the 0.5 boundary.
    pub fn predict(&self, features: &[f64]) -> Result<Prediction, ModelError> {
        let scaled = self.scaler.transform(features)?;
        let p_one = self.classifier.probability(&scaled);
        Ok(Prediction {
            label: u8::from(p_one >= 0.5),
            probabilities: [1.0 - p_one, p_one],
        })
    }
}
