//! Minimal Prediction Example
//!
//! Builds a predictor from an inline roster and artifact fixture, then runs
//! one 1v1 matchup and one team battle. A real frontend would load the
//! roster CSV and artifact JSON from disk instead.

use anyhow::Result;

use abra_data::{Roster, TypeChart};
use abra_engine::{Predictor, FEATURE_LEN};
use abra_model::ModelArtifacts;

const ROSTER_CSV: &str = "\
Name,Type 1,Type 2,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed
Aron,Steel,Rock,50,70,100,40,40,30
Magikarp,Water,,20,10,55,15,20,80
Pikachu,Electric,,35,55,40,50,50,90
Charmander,Fire,,39,52,43,60,50,65
";

fn main() -> Result<()> {
    let roster = Roster::from_csv(ROSTER_CSV)?;
    let artifacts = ModelArtifacts::from_json(&fixture_artifacts())?;
    let predictor = Predictor::new(roster, TypeChart::standard(), artifacts)?;

    let matchup = predictor.predict_winner("Aron", "Magikarp")?;
    println!(
        "Aron vs Magikarp -> {} wins ({:.1}% / {:.1}%)",
        matchup.winner,
        matchup.win_probability_a * 100.0,
        matchup.win_probability_b * 100.0
    );

    let result = predictor.predict_team_battle(
        &["Aron", "Pikachu", "Charmander"],
        &["Magikarp", "Pikachu", "Charmander"],
    )?;
    println!(
        "Team battle -> {} : {} ({:.2}% / {:.2}%)",
        result.score_a, result.score_b, result.win_rate_a, result.win_rate_b
    );

    Ok(())
}

/// Side-symmetric stand-in for a trained artifact pair.
fn fixture_artifacts() -> String {
    let mean: Vec<f64> = vec![0.0; FEATURE_LEN];
    let scale: Vec<f64> = vec![1.0; FEATURE_LEN];
    let weights: Vec<f64> = [0.005; 5]
        .into_iter()
        .chain([-0.005; 5])
        .chain([0.002, -0.002, 0.3])
        .collect();
    serde_json::json!({
        "scaler": {"mean": mean, "scale": scale},
        "classifier": {"weights": weights, "intercept": 0.0}
    })
    .to_string()
}
