//! Type effectiveness chart, loaded once at startup
//!
//! Unlike a hardcoded effectiveness table, the chart here is reference data
//! supplied by the caller (a JSON document of attacker -> defender ->
//! multiplier maps). The chart may be partial: a pair with no recorded
//! multiplier resolves to [`NEUTRAL_MULTIPLIER`] through an explicit branch
//! in [`TypeChart::multiplier_or_neutral`]. That fallback is a policy, not
//! an error path.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::types::Type;
use crate::DataError;

/// Multiplier assumed for a type pair the chart has no data for.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Square (attacking type, defending type) -> multiplier table.
///
/// Cells hold `None` when the loaded document had no entry for the pair;
/// lookups resolve those to neutral rather than failing.
#[derive(Debug, Clone)]
pub struct TypeChart {
    cells: [[Option<f64>; 18]; 18],
}

impl TypeChart {
    /// An empty chart: every lookup resolves to neutral.
    pub fn empty() -> Self {
        Self {
            cells: [[None; 18]; 18],
        }
    }

    /// The full Gen 6+ chart (18x18, values in {0, 0.5, 1, 2}).
    pub fn standard() -> Self {
        let mut chart = Self::empty();
        for (row, attacker) in Type::ALL.iter().enumerate() {
            for (col, defender) in Type::ALL.iter().enumerate() {
                chart.set(*attacker, *defender, STANDARD_CHART[row][col]);
            }
        }
        chart
    }

    /// Load a chart from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let chart = Self::from_json(&contents)?;
        info!(path = %path.as_ref().display(), "loaded type chart");
        Ok(chart)
    }

    /// Parse a chart from a JSON document of nested name -> name -> multiplier
    /// maps. Unlisted pairs stay unset; unknown type names are a load error.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let raw: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_str(json)
            .map_err(|e| DataError::Malformed(format!("type chart: {e}")))?;

        let mut chart = Self::empty();
        for (attacker_name, row) in &raw {
            let attacker = Type::from_name(attacker_name)
                .ok_or_else(|| DataError::UnknownType(attacker_name.clone()))?;
            for (defender_name, multiplier) in row {
                let defender = Type::from_name(defender_name)
                    .ok_or_else(|| DataError::UnknownType(defender_name.clone()))?;
                if *multiplier < 0.0 {
                    return Err(DataError::Malformed(format!(
                        "negative multiplier {multiplier} for {attacker} vs {defender}"
                    )));
                }
                chart.set(attacker, defender, *multiplier);
            }
        }
        Ok(chart)
    }

    /// Set the multiplier for a single pair.
    pub fn set(&mut self, attacker: Type, defender: Type, multiplier: f64) {
        self.cells[attacker as usize][defender as usize] = Some(multiplier);
    }

    /// Raw lookup for a single pair; `None` means the chart has no data.
    pub fn multiplier(&self, attacker: Type, defender: Type) -> Option<f64> {
        self.cells[attacker as usize][defender as usize]
    }

    /// Lookup for a single pair, resolving missing data to neutral.
    pub fn multiplier_or_neutral(&self, attacker: Type, defender: Type) -> f64 {
        // Missing pair means "no data, assume neutral" - by policy, not error.
        match self.multiplier(attacker, defender) {
            Some(multiplier) => multiplier,
            None => NEUTRAL_MULTIPLIER,
        }
    }

    /// Combined effectiveness of an attacker's types against a defender's types.
    ///
    /// Multiplies the lookup for every (attacker type, defender type) pair
    /// across the cross product. Empty slices yield 1.0 (vacuous product);
    /// 0.0 is legal (immunity) and dual stacking can exceed 4.0.
    pub fn effectiveness(&self, attackers: &[Type], defenders: &[Type]) -> f64 {
        let mut product = 1.0;
        for attacker in attackers {
            for defender in defenders {
                product *= self.multiplier_or_neutral(*attacker, *defender);
            }
        }
        product
    }
}

/// Gen 6+ effectiveness values, row = attacking type, column = defending type,
/// both in [`Type::ALL`] order.
#[rustfmt::skip]
const STANDARD_CHART: [[f64; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chart_super_effective() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier_or_neutral(Type::Fire, Type::Grass), 2.0);
        assert_eq!(chart.multiplier_or_neutral(Type::Water, Type::Fire), 2.0);
        assert_eq!(chart.multiplier_or_neutral(Type::Electric, Type::Water), 2.0);
    }

    #[test]
    fn test_standard_chart_immunities() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier_or_neutral(Type::Normal, Type::Ghost), 0.0);
        assert_eq!(chart.multiplier_or_neutral(Type::Electric, Type::Ground), 0.0);
        assert_eq!(chart.multiplier_or_neutral(Type::Dragon, Type::Fairy), 0.0);
    }

    #[test]
    fn test_effectiveness_dual_type_stacking() {
        let chart = TypeChart::standard();
        // Fire vs Grass/Steel = 4x
        assert_eq!(
            chart.effectiveness(&[Type::Fire], &[Type::Grass, Type::Steel]),
            4.0
        );
        // Fire vs Water/Rock = 0.25x
        assert_eq!(
            chart.effectiveness(&[Type::Fire], &[Type::Water, Type::Rock]),
            0.25
        );
        // Ground vs Flying/Steel = 0x
        assert_eq!(
            chart.effectiveness(&[Type::Ground], &[Type::Flying, Type::Steel]),
            0.0
        );
    }

    #[test]
    fn test_effectiveness_dual_attacker() {
        let chart = TypeChart::standard();
        // Steel/Rock attacking Water: 0.5 * 1.0
        assert_eq!(
            chart.effectiveness(&[Type::Steel, Type::Rock], &[Type::Water]),
            0.5
        );
    }

    #[test]
    fn test_effectiveness_empty_is_vacuous() {
        let chart = TypeChart::standard();
        assert_eq!(chart.effectiveness(&[], &[]), 1.0);
        assert_eq!(chart.effectiveness(&[Type::Fire], &[]), 1.0);
        assert_eq!(chart.effectiveness(&[], &[Type::Fire]), 1.0);
    }

    #[test]
    fn test_missing_pair_defaults_to_neutral() {
        let mut chart = TypeChart::empty();
        chart.set(Type::Fire, Type::Grass, 2.0);

        assert_eq!(chart.multiplier(Type::Fire, Type::Grass), Some(2.0));
        assert_eq!(chart.multiplier(Type::Water, Type::Fire), None);
        assert_eq!(chart.multiplier_or_neutral(Type::Water, Type::Fire), 1.0);
        // Product only picks up the listed pair.
        assert_eq!(
            chart.effectiveness(&[Type::Fire], &[Type::Grass, Type::Water]),
            2.0
        );
    }

    #[test]
    fn test_from_json_partial_chart() {
        let chart = TypeChart::from_json(
            r#"{"Fire": {"Grass": 2.0, "Water": 0.5}, "Water": {"Fire": 2.0}}"#,
        )
        .unwrap();
        assert_eq!(chart.multiplier_or_neutral(Type::Fire, Type::Grass), 2.0);
        assert_eq!(chart.multiplier_or_neutral(Type::Fire, Type::Water), 0.5);
        assert_eq!(chart.multiplier_or_neutral(Type::Water, Type::Fire), 2.0);
        // Unlisted pair resolves to neutral.
        assert_eq!(chart.multiplier_or_neutral(Type::Grass, Type::Fire), 1.0);
    }

    #[test]
    fn test_from_json_unknown_type_is_error() {
        let err = TypeChart::from_json(r#"{"Lava": {"Grass": 2.0}}"#).unwrap_err();
        assert!(matches!(err, DataError::UnknownType(_)));
    }

    #[test]
    fn test_from_json_negative_multiplier_is_error() {
        let err = TypeChart::from_json(r#"{"Fire": {"Grass": -1.0}}"#).unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }

    #[test]
    fn test_from_json_garbage_is_error() {
        let err = TypeChart::from_json("not json").unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }
}
