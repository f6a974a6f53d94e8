use crate::pairwise::dp::algo::{BestDirectionTracer, GapTracer, Tracer};
use crate::pairwise::dp::Policy;
use crate::Score;

use super::{AlignmentSeed, Storage};

/// Collects every cell holding the optimal score, in matrix fill order (row-major over the
/// second sequence).
///
/// Global alignments have a single candidate, the last cell. Local alignments consider the
/// whole matrix and overlap alignments the last row and column; both keep positive scores only.
#[derive(Clone, Debug)]
pub struct Optima<S: Score> {
    policy: Policy,
    rows: usize,
    cols: usize,
    best: S,
    seeds: Vec<AlignmentSeed<S>>,
}

impl<S: Score> Optima<S> {
    pub fn new() -> Self {
        Self {
            policy: Policy::Global,
            rows: 0,
            cols: 0,
            best: S::one(),
            seeds: Vec::new(),
        }
    }

    #[inline(always)]
    fn consider(&mut self, row: usize, col: usize, score: S) {
        let candidate = match self.policy {
            Policy::Global => {
                if row == self.rows && col == self.cols {
                    self.seeds = vec![AlignmentSeed { row, col, score }];
                }
                return;
            }
            Policy::Local => true,
            Policy::Overlap => row == self.rows || col == self.cols,
        };
        if !candidate || score < self.best {
            return;
        }
        if score > self.best {
            self.best = score;
            self.seeds.clear();
        }
        self.seeds.push(AlignmentSeed { row, col, score });
    }
}

impl<S: Score> Default for Optima<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> BestDirectionTracer for Optima<S> {
    type Score = S;

    #[inline(always)]
    fn diagonal(&mut self, row: usize, col: usize, score: Self::Score) {
        self.consider(row, col, score);
    }

    #[inline(always)]
    fn gap_up(&mut self, row: usize, col: usize, score: Self::Score) {
        self.consider(row, col, score);
    }

    #[inline(always)]
    fn gap_left(&mut self, row: usize, col: usize, score: Self::Score) {
        self.consider(row, col, score);
    }
}

impl<S: Score> GapTracer for Optima<S> {
    type Score = S;
}

impl<S: Score> Tracer for Optima<S> {
    type Score = S;
}

impl<S: Score> Storage for Optima<S> {
    type Score = S;

    fn reset(&mut self, policy: Policy, rows: usize, cols: usize) {
        self.policy = policy;
        self.rows = rows;
        self.cols = cols;
        self.best = S::one();
        self.seeds.clear();
    }

    fn finalize(&mut self) -> Vec<AlignmentSeed<S>> {
        std::mem::take(&mut self.seeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(policy: Policy, cells: &[(usize, usize, i32)]) -> Vec<(usize, usize, i32)> {
        let mut storage = Optima::new();
        storage.reset(policy, 3, 3);
        for (row, col, score) in cells {
            storage.diagonal(*row, *col, *score);
        }
        storage
            .finalize()
            .into_iter()
            .map(|x| (x.row, x.col, x.score))
            .collect()
    }

    #[test]
    fn test_global_takes_last_cell() {
        let cells = [(1, 1, 10), (3, 3, -5), (2, 3, 7)];
        assert_eq!(feed(Policy::Global, &cells), vec![(3, 3, -5)]);
    }

    #[test]
    fn test_local_keeps_ties_in_order() {
        let cells = [(1, 1, 2), (1, 2, 4), (2, 1, 4), (2, 2, 3), (3, 1, 4)];
        assert_eq!(
            feed(Policy::Local, &cells),
            vec![(1, 2, 4), (2, 1, 4), (3, 1, 4)]
        );
        assert!(feed(Policy::Local, &[(1, 1, 0), (2, 2, -3)]).is_empty());
    }

    #[test]
    fn test_overlap_uses_last_row_and_column() {
        let cells = [(1, 1, 9), (1, 3, 2), (3, 1, 2), (2, 2, 8), (3, 3, 1)];
        assert_eq!(feed(Policy::Overlap, &cells), vec![(1, 3, 2), (3, 1, 2)]);
        assert!(feed(Policy::Overlap, &[(3, 3, 0)]).is_empty());
    }
}
