//! Team battle aggregation
//!
//! Extrapolates 1v1 predictions into a team outcome by scoring the full
//! ordered cross product of pairings and tallying wins per side.

use serde::Serialize;
use tracing::debug;

use crate::predictor::Predictor;
use crate::EngineError;

/// Largest team either side may field.
pub const MAX_TEAM_SIZE: usize = 6;

/// Aggregate outcome of a team battle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamBattleResult {
    /// Pairings won by side A (classifier label 1).
    pub score_a: u32,
    /// Pairings won by side B (classifier label 0).
    pub score_b: u32,
    /// `round(100 * score_a / total_pairs, 2)`.
    pub win_rate_a: f64,
    /// `round(100 * score_b / total_pairs, 2)`.
    pub win_rate_b: f64,
}

impl Predictor {
    /// Predict a team battle over the full cross product of pairings.
    ///
    /// Each of the `|team_a| * |team_b|` ordered pairs is scored with the
    /// first member as side A. Duplicate names within a team are counted
    /// independently, and the same name appearing on both sides is scored
    /// like any other pairing. Empty and oversized teams are rejected
    /// before any inference runs, so win rates can never divide by zero.
    pub fn predict_team_battle(
        &self,
        team_a: &[&str],
        team_b: &[&str],
    ) -> Result<TeamBattleResult, EngineError> {
        validate_team_size("team A", team_a.len())?;
        validate_team_size("team B", team_b.len())?;

        // Resolve every name up front; an unknown member fails the whole
        // request before any inference.
        let side_a = team_a
            .iter()
            .map(|name| self.lookup(name))
            .collect::<Result<Vec<_>, _>>()?;
        let side_b = team_b
            .iter()
            .map(|name| self.lookup(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut score_a = 0u32;
        let mut score_b = 0u32;
        for a in &side_a {
            for b in &side_b {
                let prediction = self.predict_pair(a, b)?;
                if prediction.label == 1 {
                    score_a += 1;
                } else {
                    score_b += 1;
                }
            }
        }

        let total_pairs = (side_a.len() * side_b.len()) as f64;
        debug!(
            pairs = side_a.len() * side_b.len(),
            score_a, score_b, "team battle scored"
        );

        Ok(TeamBattleResult {
            score_a,
            score_b,
            win_rate_a: round2(100.0 * f64::from(score_a) / total_pairs),
            win_rate_b: round2(100.0 * f64::from(score_b) / total_pairs),
        })
    }
}

fn validate_team_size(side: &str, len: usize) -> Result<(), EngineError> {
    if len == 0 {
        return Err(EngineError::InvalidTeam(format!("{side} is empty")));
    }
    if len > MAX_TEAM_SIZE {
        return Err(EngineError::InvalidTeam(format!(
            "{side} has {len} members, maximum is {MAX_TEAM_SIZE}"
        )));
    }
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
