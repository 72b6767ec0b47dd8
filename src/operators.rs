//! Permutation-preserving genetic operators.
//!
//! Both operators keep the permutation invariant intact, which is what lets
//! the solver ignore row/column attacks entirely: a child of two valid
//! boards is always a valid board.
//!
//! - [`order_crossover`] (OX): Davis (1985) — segment copy plus cyclic fill
//! - [`swap_mutation`]: exchange two distinct positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

/// Order Crossover (OX) for permutations.
///
/// Copies `parent1[start..=end]` into the child verbatim, then fills the
/// remaining positions cyclically starting at `(end + 1) % n` with
/// `parent2`'s values in cyclic order from the same offset, skipping values
/// already placed.
///
/// The child is a valid permutation whenever both parents are valid
/// permutations of the same value set. Parents shorter than 2 degenerate
/// to a copy of `parent1`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = cut_points(n, rng);

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    // The free positions form one cyclic block starting at end+1, so a
    // single wrapping cursor fills them in order without collisions.
    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let val = parent2[(end + 1 + offset) % n];
        if !placed[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Swap mutation: exchange two distinct random positions.
///
/// No-op for permutations shorter than 2. The second index is resampled
/// until it differs from the first, so a mutation always changes the board.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    perm.swap(i, j);
}

/// Pick crossover cut points `(start, end)` with `start <= end` in `0..n`.
///
/// Two uniform draws; if they collide the second moves to the next position
/// (mod n), then the pair is ordered. The segment is therefore never empty
/// and never the whole permutation.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n);
    if a == b {
        b = (a + 1) % n;
    }
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
