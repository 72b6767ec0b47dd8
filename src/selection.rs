//! Parent selection.
//!
//! Tournament selection gives bounded pressure without fitness
//! normalization, which is why it is used here instead of roulette-wheel
//! selection: absolute fitness magnitudes never matter, only comparisons.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::board::FitnessRecord;
use rand::Rng;

/// Tournament size used by the engine (capped by population size).
pub const TOURNAMENT_SIZE: usize = 3;

/// Tournament selection: draw `k` candidates with replacement, return the
/// index of the fittest. Ties keep the first candidate seen.
///
/// `k` is clamped to at least 1; `k = 1` degenerates to uniform selection.
///
/// # Panics
/// Panics if `records` is empty.
pub fn tournament<R: Rng>(records: &[FitnessRecord], k: usize, rng: &mut R) -> usize {
    assert!(!records.is_empty(), "cannot select from empty population");

    let k = k.max(1);
    let n = records.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if records[idx].fitness > records[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}
