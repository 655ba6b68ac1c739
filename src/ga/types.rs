//! Candidate representation.

use super::fitness::evaluate;

/// Column index per row: `placement[row] = column`.
pub type Placement = Vec<usize>;

/// One N-Queens placement together with its cached fitness.
///
/// A candidate is scored exactly once, at construction, and is immutable
/// afterwards. Columns may repeat; duplicates are legal and simply lower the
/// fitness.
///
/// # Examples
///
/// ```
/// use u_nqueens::ga::Candidate;
///
/// let c = Candidate::new(vec![1, 3, 0, 2], 0);
/// assert_eq!(c.fitness(), 12);
/// assert_eq!(c.n_queens(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    placement: Placement,
    fitness: usize,
    generation_born: usize,
}

impl Candidate {
    /// Builds and scores a candidate created in `generation_born`.
    pub fn new(placement: Placement, generation_born: usize) -> Self {
        let fitness = evaluate(&placement);
        Self {
            placement,
            fitness,
            generation_born,
        }
    }

    /// Column index of the queen in each row.
    pub fn placement(&self) -> &[usize] {
        &self.placement
    }

    /// Non-conflict score. Higher is better.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// Generation in which this candidate was created (0 = initial population).
    pub fn generation_born(&self) -> usize {
        self.generation_born
    }

    /// Board size of this placement.
    pub fn n_queens(&self) -> usize {
        self.placement.len()
    }

    /// True when no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.fitness == super::fitness::target_fitness(self.placement.len())
    }
}
