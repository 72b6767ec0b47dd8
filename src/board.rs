//! Board representation and the N-Queens fitness model.
//!
//! A board is a permutation of `0..n`: index = column, value = row. The
//! encoding rules out row and column attacks by construction, so fitness
//! only has to account for diagonal pairs.

use rand::seq::SliceRandom;
use rand::Rng;

/// Maximum attainable fitness for an `n`-queens board: `n*(n-1)/2`.
///
/// This is the total number of queen pairs; a board reaches it exactly
/// when no pair shares a diagonal.
pub fn max_fitness(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// One candidate solution: a permutation-encoded queen placement.
///
/// # Examples
///
/// ```
/// use queens_ga::Board;
///
/// let board = Board::from_rows(vec![1, 3, 0, 2]);
/// assert_eq!(board.conflicts(), 0);
/// assert_eq!(board.fitness(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board from an explicit row assignment.
    ///
    /// In debug builds, asserts that `rows` is a permutation of `0..len`.
    pub fn from_rows(rows: Vec<usize>) -> Self {
        debug_assert!(
            is_permutation(&rows),
            "rows must be a permutation of 0..{}: {rows:?}",
            rows.len()
        );
        Self { rows }
    }

    /// Creates a uniformly random board via a Fisher–Yates shuffle of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut rows: Vec<usize> = (0..n).collect();
        rows.shuffle(rng);
        Self { rows }
    }

    /// An empty board, used as the "no solution yet" sentinel.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// The row assignment, column by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Board side length (number of queens).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Whether the board holds a valid permutation of `0..size`.
    pub fn is_valid_permutation(&self) -> bool {
        is_permutation(&self.rows)
    }

    /// Counts attacking queen pairs.
    ///
    /// Two columns `i < j` attack iff `|rows[i] - rows[j]| == j - i`
    /// (shared diagonal). O(n²), which is fine at the board sizes this
    /// solver targets (tens of queens).
    pub fn conflicts(&self) -> usize {
        let rows = &self.rows;
        let n = rows.len();
        let mut count = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if rows[i].abs_diff(rows[j]) == j - i {
                    count += 1;
                }
            }
        }
        count
    }

    /// Non-attacking pair count: `max_fitness(size) - conflicts`.
    pub fn fitness(&self) -> usize {
        max_fitness(self.rows.len()) - self.conflicts()
    }
}

/// Per-individual evaluation result.
///
/// Recomputed for the whole population every generation; never mutated in
/// place, only replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessRecord {
    /// Non-attacking pair count (higher is better).
    pub fitness: usize,
    /// Attacking pair count (lower is better).
    pub conflicts: usize,
}

impl FitnessRecord {
    /// Evaluates one board.
    pub fn of(board: &Board) -> Self {
        let conflicts = board.conflicts();
        Self {
            fitness: max_fitness(board.size()) - conflicts,
            conflicts,
        }
    }
}

/// Check that a slice contains every value in `0..len` exactly once.
fn is_permutation(rows: &[usize]) -> bool {
    let n = rows.len();
    let mut seen = vec![false; n];
    for &r in rows {
        if r >= n || seen[r] {
            return false;
        }
        seen[r] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_max_fitness_values() {
        assert_eq!(max_fitness(0), 0);
        assert_eq!(max_fitness(1), 0);
        assert_eq!(max_fitness(4), 6);
        assert_eq!(max_fitness(8), 28);
    }

    #[test]
    fn test_known_solution_has_zero_conflicts() {
        // [1, 3, 0, 2] is one of the two 4-queens solutions.
        let board = Board::from_rows(vec![1, 3, 0, 2]);
        assert_eq!(board.conflicts(), 0);
        assert_eq!(board.fitness(), max_fitness(4));
    }

    #[test]
    fn test_main_diagonal_is_worst_case() {
        // Every pair of the identity permutation shares a diagonal.
        let board = Board::from_rows(vec![0, 1, 2, 3]);
        assert_eq!(board.conflicts(), 6);
        assert_eq!(board.fitness(), 0);
    }

    #[test]
    fn test_partial_conflicts() {
        // Only the adjacent pairs (0,1) and (2,3) share a diagonal.
        let board = Board::from_rows(vec![0, 1, 3, 2]);
        assert_eq!(board.conflicts(), 2);
    }

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(Board::from_rows(vec![]).conflicts(), 0);
        assert_eq!(Board::from_rows(vec![0]).conflicts(), 0);
        assert_eq!(Board::from_rows(vec![0]).fitness(), 0);
    }

    #[test]
    fn test_random_boards_are_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [1, 2, 4, 8, 16, 32] {
            for _ in 0..20 {
                let board = Board::random(n, &mut rng);
                assert_eq!(board.size(), n);
                assert!(board.is_valid_permutation(), "not a permutation: {board:?}");
            }
        }
    }

    #[test]
    fn test_empty_sentinel() {
        let board = Board::empty();
        assert_eq!(board.size(), 0);
        assert!(board.is_valid_permutation());
    }
}
