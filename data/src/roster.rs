//! Roster records and CSV loading
//!
//! The roster source is the upstream `pokemon.csv` layout: one row per
//! Pokemon with columns `Name`, `Type 1`, `Type 2`, `HP`, `Attack`,
//! `Defense`, `Sp. Atk`, `Sp. Def`, `Speed`. Columns are located by header
//! name, so extra columns (`#`, `Generation`, `Legendary`, ...) are ignored.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::Type;
use crate::DataError;

/// The six base stats as stored in the roster source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

/// One immutable roster entry: identity, base stats, and typing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    pub stats: BaseStats,
    pub primary_type: Type,
    pub secondary_type: Option<Type>,
}

impl PokemonRecord {
    /// The 1-2 types as a slice-friendly vec (primary first).
    pub fn types(&self) -> Vec<Type> {
        match self.secondary_type {
            Some(secondary) => vec![self.primary_type, secondary],
            None => vec![self.primary_type],
        }
    }
}

/// Name-indexed collection of [`PokemonRecord`]s, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<PokemonRecord>,
    by_name: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster from already-parsed records.
    ///
    /// Later records shadow earlier ones with the same name for lookup.
    pub fn new(records: Vec<PokemonRecord>) -> Self {
        let by_name = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), i))
            .collect();
        Self { records, by_name }
    }

    /// Load a roster from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let roster = Self::from_csv(&contents)?;
        info!(
            path = %path.as_ref().display(),
            count = roster.len(),
            "loaded roster"
        );
        Ok(roster)
    }

    /// Parse a roster from CSV text (header row required).
    pub fn from_csv(contents: &str) -> Result<Self, DataError> {
        let mut lines = contents.lines().enumerate();
        let (_, header) = lines
            .next()
            .ok_or_else(|| DataError::Malformed("empty roster file".to_string()))?;

        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let column = |name: &str| -> Result<usize, DataError> {
            columns
                .iter()
                .position(|c| *c == name)
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))
        };

        let name_col = column("Name")?;
        let type1_col = column("Type 1")?;
        // Type 2 is optional in the source; a roster without the column is
        // treated as all-monotype.
        let type2_col = column("Type 2").ok();
        let stat_cols = [
            ("HP", column("HP")?),
            ("Attack", column("Attack")?),
            ("Defense", column("Defense")?),
            ("Sp. Atk", column("Sp. Atk")?),
            ("Sp. Def", column("Sp. Def")?),
            ("Speed", column("Speed")?),
        ];

        let mut records = Vec::new();
        for (row, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let field = |col: usize| fields.get(col).copied().unwrap_or("");

            let name = field(name_col);
            if name.is_empty() {
                return Err(DataError::Malformed(format!("row {}: empty name", row + 1)));
            }

            let primary_name = field(type1_col);
            let primary_type = Type::from_name(primary_name)
                .ok_or_else(|| DataError::UnknownType(primary_name.to_string()))?;
            let secondary_type = match type2_col.map(field) {
                Some("") | None => None,
                Some(raw) => Some(
                    Type::from_name(raw).ok_or_else(|| DataError::UnknownType(raw.to_string()))?,
                ),
            };

            let mut stats = [0u32; 6];
            for (slot, (col_name, col)) in stat_cols.iter().enumerate() {
                let raw = field(*col);
                stats[slot] = raw.parse().map_err(|_| DataError::InvalidStat {
                    column: (*col_name).to_string(),
                    value: raw.to_string(),
                    row: row + 1,
                })?;
            }

            records.push(PokemonRecord {
                name: name.to_string(),
                stats: BaseStats {
                    hp: stats[0],
                    attack: stats[1],
                    defense: stats[2],
                    sp_attack: stats[3],
                    sp_defense: stats[4],
                    speed: stats[5],
                },
                primary_type,
                secondary_type,
            });
        }

        Ok(Self::new(records))
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&PokemonRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// All roster names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// All records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &PokemonRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
