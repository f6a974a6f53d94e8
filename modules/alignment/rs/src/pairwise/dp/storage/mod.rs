pub use optima::Optima;

use crate::pairwise::dp::Policy;
use crate::Score;

mod optima;

/// A cell where a traceback starts
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AlignmentSeed<S: Score> {
    pub row: usize,
    pub col: usize,
    pub score: S,
}

/// Picks the traceback starting cells while the matrix is being filled
pub trait Storage {
    type Score: Score;

    fn reset(&mut self, policy: Policy, rows: usize, cols: usize);
    fn finalize(&mut self) -> Vec<AlignmentSeed<Self::Score>>;
}
