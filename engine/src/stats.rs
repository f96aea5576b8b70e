//! Battle-ready stat derivation
//!
//! Converts stored base stats into the level-50 derived stats the classifier
//! was trained on. The integer-truncation semantics must match the training
//! pipeline bit for bit, so everything here is integer math until the final
//! nature multiplier.

use abra_data::PokemonRecord;

/// Level every derived stat is computed at.
pub const DEFAULT_LEVEL: u32 = 50;
/// Individual value assumed for every stat.
pub const DEFAULT_IV: u32 = 31;
/// Effort value assumed for every stat.
pub const DEFAULT_EV: u32 = 0;
/// Neutral nature.
pub const DEFAULT_NATURE: f64 = 1.0;

/// Derive a single battle stat from its base value.
///
/// For HP: `floor(((2*base + iv + floor(ev/4)) * level) / 100) + level + 10`.
/// For everything else:
/// `floor((floor(((2*base + iv + floor(ev/4)) * level) / 100) + 5) * nature)`.
///
/// All divisions truncate.
pub fn derive_battle_stat(
    base: u32,
    level: u32,
    iv: u32,
    ev: u32,
    nature: f64,
    is_hp: bool,
) -> u32 {
    let core = ((2 * base + iv + ev / 4) * level) / 100;
    if is_hp {
        core + level + 10
    } else {
        ((core + 5) as f64 * nature).floor() as u32
    }
}

/// The five derived stats that feed the feature vector.
///
/// Speed is deliberately absent: the canonical feature contract excludes it
/// from both the per-stat block and the aggregate total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
}

impl BattleStats {
    /// Derive stats for a roster record at the fixed defaults.
    pub fn from_record(record: &PokemonRecord) -> Self {
        let derive = |base: u32, is_hp: bool| {
            derive_battle_stat(base, DEFAULT_LEVEL, DEFAULT_IV, DEFAULT_EV, DEFAULT_NATURE, is_hp)
        };
        Self {
            hp: derive(record.stats.hp, true),
            attack: derive(record.stats.attack, false),
            defense: derive(record.stats.defense, false),
            sp_attack: derive(record.stats.sp_attack, false),
            sp_defense: derive(record.stats.sp_defense, false),
        }
    }

    /// Aggregate total of the five derived stats.
    pub fn total(&self) -> u32 {
        self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense
    }

    /// The five stats in feature order: hp, atk, def, spa, spd.
    pub fn as_array(&self) -> [u32; 5] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
        ]
    }
}
