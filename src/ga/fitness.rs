//! Placement scoring.
//!
//! Every unordered pair of rows `(i, j)` contributes to the score:
//!
//! - 1 point if the queens share a diagonal (`abs(i - j) == abs(ci - cj)`)
//! - 1 point if they share a column (`ci == cj`)
//! - 2 points otherwise
//!
//! Higher is better. A placement with no attacking pair scores
//! `2 * C(N, 2) = N * (N - 1)`, the [`target_fitness`].

/// Fitness of a conflict-free placement on an `n × n` board.
pub fn target_fitness(n: usize) -> usize {
    n * n.saturating_sub(1)
}

/// Scores a placement. `placement[row] = column`.
///
/// # Complexity
/// O(n²)
pub fn evaluate(placement: &[usize]) -> usize {
    let mut score = 0;
    for (row, &col) in placement.iter().enumerate() {
        for (offset, &other) in placement[row + 1..].iter().enumerate() {
            score += if attacks(offset + 1, col, other) { 1 } else { 2 };
        }
    }
    score
}

/// Number of unordered row pairs whose queens attack each other.
///
/// `evaluate(p) == target_fitness(p.len()) - conflicting_pairs(p)`.
pub fn conflicting_pairs(placement: &[usize]) -> usize {
    let mut conflicts = 0;
    for (row, &col) in placement.iter().enumerate() {
        for (offset, &other) in placement[row + 1..].iter().enumerate() {
            if attacks(offset + 1, col, other) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Two queens `row_gap` rows apart attack on a shared diagonal or column.
#[inline]
fn attacks(row_gap: usize, col_a: usize, col_b: usize) -> bool {
    row_gap == col_a.abs_diff(col_b) || col_a == col_b
}
