//! The prediction context and 1v1 entry point

use serde::Serialize;
use tracing::{debug, info};

use abra_data::{PokemonRecord, Roster, TypeChart};
use abra_model::{ModelArtifacts, ModelError, Prediction};

use crate::features::{build_features, FEATURE_LEN};
use crate::EngineError;

/// Result of a single 1v1 matchup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchPrediction {
    /// Name of the predicted winner.
    pub winner: String,
    /// Classifier label: 1 = side A wins, 0 = side B wins.
    pub label: u8,
    /// P(side A wins); pairs with `win_probability_b` to sum to 1.0.
    pub win_probability_a: f64,
    /// P(side B wins).
    pub win_probability_b: f64,
}

/// Immutable prediction context built once at startup.
///
/// Owns the roster, type chart, and model artifacts, and exposes only
/// `&self` methods; concurrent use behind a shared reference is safe.
#[derive(Debug)]
pub struct Predictor {
    roster: Roster,
    chart: TypeChart,
    artifacts: ModelArtifacts,
}

impl Predictor {
    /// Build a predictor, pinning the artifact pair to the canonical
    /// feature contract.
    ///
    /// Fails with a schema mismatch when the artifacts were fitted on any
    /// other width (historical 12/14/15/20-wide artifact pairs are rejected
    /// here, before any request is served).
    pub fn new(
        roster: Roster,
        chart: TypeChart,
        artifacts: ModelArtifacts,
    ) -> Result<Self, EngineError> {
        if artifacts.input_width() != FEATURE_LEN {
            return Err(EngineError::Model(ModelError::SchemaMismatch {
                expected: FEATURE_LEN,
                actual: artifacts.input_width(),
            }));
        }
        info!(
            roster_size = roster.len(),
            feature_width = FEATURE_LEN,
            "predictor ready"
        );
        Ok(Self {
            roster,
            chart,
            artifacts,
        })
    }

    /// The loaded roster (for the presentation layer's pickers).
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Predict the winner of a 1v1 matchup between two roster names.
    ///
    /// Rejects unknown names and a matchup of a Pokemon against itself (the
    /// feature vector would be degenerate and carry no signal).
    pub fn predict_winner(
        &self,
        name_a: &str,
        name_b: &str,
    ) -> Result<MatchPrediction, EngineError> {
        if name_a == name_b {
            return Err(EngineError::SamePokemon(name_a.to_string()));
        }
        let a = self.lookup(name_a)?;
        let b = self.lookup(name_b)?;

        let prediction = self.predict_pair(a, b)?;
        let winner = if prediction.label == 1 { a } else { b };
        debug!(
            a = name_a,
            b = name_b,
            winner = winner.name.as_str(),
            p_a = prediction.probabilities[1],
            "matchup scored"
        );

        Ok(MatchPrediction {
            winner: winner.name.clone(),
            label: prediction.label,
            win_probability_a: prediction.probabilities[1],
            win_probability_b: prediction.probabilities[0],
        })
    }

    /// Score one ordered pair. Shared by the 1v1 and team paths; team
    /// aggregation deliberately skips the same-Pokemon rejection.
    pub(crate) fn predict_pair(
        &self,
        a: &PokemonRecord,
        b: &PokemonRecord,
    ) -> Result<Prediction, EngineError> {
        let features = build_features(a, b, &self.chart);
        Ok(self.artifacts.predict(&features)?)
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<&PokemonRecord, EngineError> {
        self.roster
            .get(name)
            .ok_or_else(|| EngineError::UnknownPokemon(name.to_string()))
    }
}
