use impl_tools::autoimpl;

use crate::Score;

pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score;
}

#[autoimpl(for<T: trait + ?Sized> &T)]
pub trait PosInvariantScorer {
    type SymScore: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::SymScore;
    type Symbol = <Self as PosInvariantScorer>::Symbol;

    #[inline(always)]
    fn score(&self, _: usize, s1: &Self::Symbol, _: usize, s2: &Self::Symbol) -> Self::Score {
        PosInvariantScorer::score(self, s1, s2)
    }
}
