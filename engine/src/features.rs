//! Feature vector construction
//!
//! The canonical feature contract the loaded classifier must be trained
//! against. The width is fixed at compile time; artifacts that expect any
//! other width are rejected when the [`Predictor`](crate::Predictor) is
//! built.

use abra_data::{PokemonRecord, TypeChart};

use crate::stats::BattleStats;

/// Width of the canonical feature vector.
///
/// Layout, in order:
///
/// | index | feature                                   |
/// |-------|-------------------------------------------|
/// | 0-4   | A's derived hp, atk, def, spa, spd        |
/// | 5-9   | B's derived hp, atk, def, spa, spd        |
/// | 10    | A's aggregate total                       |
/// | 11    | B's aggregate total                       |
/// | 12    | effectiveness(A→B) − effectiveness(B→A)   |
pub const FEATURE_LEN: usize = 13;

/// Build the feature vector for a matchup with `a` as side A.
///
/// Pure function over already-loaded reference data. Swapping the sides
/// swaps the stat blocks and totals and negates the effectiveness diff, so
/// a side-symmetric model scores both orderings consistently.
pub fn build_features(
    a: &PokemonRecord,
    b: &PokemonRecord,
    chart: &TypeChart,
) -> [f64; FEATURE_LEN] {
    let stats_a = BattleStats::from_record(a);
    let stats_b = BattleStats::from_record(b);

    let types_a = a.types();
    let types_b = b.types();
    let eff_diff =
        chart.effectiveness(&types_a, &types_b) - chart.effectiveness(&types_b, &types_a);

    let mut features = [0.0; FEATURE_LEN];
    for (slot, value) in stats_a.as_array().into_iter().enumerate() {
        features[slot] = f64::from(value);
    }
    for (slot, value) in stats_b.as_array().into_iter().enumerate() {
        features[5 + slot] = f64::from(value);
    }
    features[10] = f64::from(stats_a.total());
    features[11] = f64::from(stats_b.total());
    features[12] = eff_diff;
    features
}
