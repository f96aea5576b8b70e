//! End-to-end prediction scenario over JSON-loaded fixtures.
//!
//! Exercises the whole startup-then-predict flow the presentation layer
//! drives: parse a roster, parse an artifact document, build the predictor,
//! then run 1v1 and team battles.

use anyhow::Result;

use abra_data::{Roster, TypeChart};
use abra_engine::{EngineError, Predictor, FEATURE_LEN};
use abra_model::ModelArtifacts;

const ROSTER_CSV: &str = "\
#,Name,Type 1,Type 2,Total,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed,Generation,Legendary
304,Aron,Steel,Rock,330,50,70,100,40,40,30,3,False
129,Magikarp,Water,,200,20,10,55,15,20,80,1,False
25,Pikachu,Electric,,320,35,55,40,50,50,90,1,False
";

/// A side-symmetric artifact document, as it would ship next to the binary.
/// A-block and B-block weights mirror each other negated so the swap
/// property holds exactly.
fn artifact_json() -> String {
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

fn predictor() -> Result<Predictor> {
    let roster = Roster::from_csv(ROSTER_CSV)?;
    let artifacts = ModelArtifacts::from_json(&artifact_json())?;
    Ok(Predictor::new(roster, TypeChart::standard(), artifacts)?)
}

#[test]
fn aron_vs_magikarp_is_deterministic() -> Result<()> {
    let predictor = predictor()?;

    let first = predictor.predict_winner("Aron", "Magikarp")?;
    let second = predictor.predict_winner("Aron", "Magikarp")?;
    assert_eq!(first, second);

    assert_eq!(first.label, 1);
    assert_eq!(first.winner, "Aron");
    assert!((first.win_probability_a + first.win_probability_b - 1.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn swapping_arguments_inverts_the_pair() -> Result<()> {
    let predictor = predictor()?;

    let forward = predictor.predict_winner("Aron", "Magikarp")?;
    let reverse = predictor.predict_winner("Magikarp", "Aron")?;

    assert_eq!(forward.winner, reverse.winner);
    assert_eq!(forward.label, 1 - reverse.label);
    assert!((forward.win_probability_a - reverse.win_probability_b).abs() < 1e-9);
    assert!((forward.win_probability_b - reverse.win_probability_a).abs() < 1e-9);
    Ok(())
}

#[test]
fn full_team_battle_tallies_every_pairing() -> Result<()> {
    let predictor = predictor()?;

    let team_a = ["Aron", "Pikachu", "Magikarp", "Aron", "Pikachu", "Magikarp"];
    let team_b = ["Magikarp", "Magikarp", "Aron", "Pikachu", "Aron", "Pikachu"];
    let result = predictor.predict_team_battle(&team_a, &team_b)?;

    assert_eq!(result.score_a + result.score_b, 36);
    assert!((result.win_rate_a + result.win_rate_b - 100.0).abs() < 0.02);
    Ok(())
}

#[test]
fn empty_team_never_produces_nan() -> Result<()> {
    let predictor = predictor()?;
    let err = predictor.predict_team_battle(&[], &[]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidTeam(_)));
    Ok(())
}

#[test]
fn fourteen_wide_artifacts_are_rejected_at_startup() -> Result<()> {
    let mean: Vec<f64> = vec![0.0; 14];
    let scale: Vec<f64> = vec![1.0; 14];
    let weights: Vec<f64> = vec![0.0; 14];
    let json = serde_json::json!({
        "scaler": {"mean": mean, "scale": scale},
        "classifier": {"weights": weights, "intercept": 0.0}
    })
    .to_string();

    // The pair is internally consistent, so it loads...
    let artifacts = ModelArtifacts::from_json(&json)?;
    // ...but disagrees with the engine's feature contract.
    let roster = Roster::from_csv(ROSTER_CSV)?;
    let err = Predictor::new(roster, TypeChart::standard(), artifacts).unwrap_err();
    assert!(matches!(err, EngineError::Model(_)));
    Ok(())
}
