//! Pre-trained model artifacts for battle outcome inference.
//!
//! The trained model is an opaque scoring function: a fitted
//! [`StandardScaler`] and a binary [`LogisticClassifier`], serialized
//! together as one JSON document and loaded once at startup. This crate
//! never trains anything; it validates the artifact pair and runs
//! inference.
//!
//! # Invariants
//!
//! - Scaler and classifier widths must agree with each other at load time.
//! - A feature vector whose width disagrees with the scaler is rejected
//!   with [`ModelError::SchemaMismatch`], never truncated or padded.
//! - [`Prediction::label`] and [`Prediction::probabilities`] come from the
//!   same decision-function evaluation, so they can never disagree.

use thiserror::Error;

pub mod artifacts;
pub mod classifier;
pub mod scaler;

pub use artifacts::{ModelArtifacts, Prediction};
pub use classifier::LogisticClassifier;
pub use scaler::StandardScaler;

/// Errors raised while loading artifacts or running inference.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to load model artifacts: {0}")]
    Load(String),

    #[error("Feature width mismatch: model expects {expected}, got {actual}")]
    SchemaMismatch { expected: usize, actual: usize },
}
