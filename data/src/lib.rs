//! Roster and type data for battle outcome prediction.
//!
//! This crate owns the immutable reference data loaded once at startup:
//!
//! - [`Type`] - the 18 Pokemon types with name parsing
//! - [`TypeChart`] - loaded attack/defense effectiveness multipliers
//! - [`PokemonRecord`] / [`Roster`] - base stats and typing, indexed by name
//!
//! Everything here is read-only after load. Loading failures are reported
//! through [`DataError`] and abort startup; an incomplete type chart is not
//! a failure (missing pairs resolve to the neutral 1.0 multiplier).

use thiserror::Error;

pub mod chart;
pub mod roster;
pub mod types;

pub use chart::{NEUTRAL_MULTIPLIER, TypeChart};
pub use roster::{BaseStats, PokemonRecord, Roster};
pub use types::Type;

/// Errors raised while loading roster or type chart data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid stat value '{value}' in column {column} (row {row})")]
    InvalidStat {
        column: String,
        value: String,
        row: usize,
    },

    #[error("Unknown type name: {0}")]
    UnknownType(String),

    #[error("Malformed data: {0}")]
    Malformed(String),
}
