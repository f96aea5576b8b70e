//! Battle outcome prediction engine.
//!
//! Predicts the winner of a 1v1 or team battle between roster Pokemon using
//! a pre-trained binary classifier over derived stats and type matchups.
//!
//! # Overview
//!
//! `abra-engine` sits on top of the reference-data and model crates:
//!
//! ```text
//! abra-data (roster + type chart)     abra-model (scaler + classifier)
//!        │                                   │
//!        └──────────────┬────────────────────┘
//!                       ▼
//!              abra-engine ← THIS CRATE
//!        (stat derivation, feature building,
//!         1v1 prediction, team aggregation)
//! ```
//!
//! All reference data is loaded once and handed to a [`Predictor`], which is
//! then a pure, `&self`-only scoring context. Every prediction is
//! deterministic and bounded: a 6v6 team battle runs at most 36 inference
//! calls.
//!
//! # Example
//!
//! ```
//! use abra_data::{Roster, TypeChart};
//! use abra_engine::Predictor;
//! use abra_model::{LogisticClassifier, ModelArtifacts, StandardScaler};
//!
//! let roster = Roster::from_csv(
//!     "Name,Type 1,Type 2,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed\n\
//!      Aron,Steel,Rock,50,70,100,40,40,30\n\
//!      Magikarp,Water,,20,10,55,15,20,80\n",
//! )
//! .unwrap();
//! let artifacts = ModelArtifacts::new(
//!     StandardScaler::identity(abra_engine::FEATURE_LEN),
//!     LogisticClassifier {
//!         weights: vec![0.0; abra_engine::FEATURE_LEN],
//!         intercept: 0.0,
//!     },
//! )
//! .unwrap();
//!
//! let predictor = Predictor::new(roster, TypeChart::standard(), artifacts).unwrap();
//! let prediction = predictor.predict_winner("Aron", "Magikarp").unwrap();
//! let total = prediction.win_probability_a + prediction.win_probability_b;
//! assert!((total - 1.0).abs() < 1e-6);
//! ```

use thiserror::Error;

use abra_model::ModelError;

pub mod features;
pub mod predictor;
pub mod stats;
pub mod team;

pub use features::{build_features, FEATURE_LEN};
pub use predictor::{MatchPrediction, Predictor};
pub use stats::{derive_battle_stat, BattleStats};
pub use team::{TeamBattleResult, MAX_TEAM_SIZE};

// Re-export the reference-data and model types callers need at the boundary
pub use abra_data::{PokemonRecord, Roster, Type, TypeChart};
pub use abra_model::ModelArtifacts;

/// Caller-visible prediction failures.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown Pokemon: {0}")]
    UnknownPokemon(String),

    #[error("Both sides name the same Pokemon: {0}")]
    SamePokemon(String),

    #[error("Invalid team: {0}")]
    InvalidTeam(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
