use crate::Score;

// Gap scores must be additive: a gap of length n costs open + (n - 1) * extend.
// `seq1_*` scores a gap placed in the first sequence, `seq2_*` a gap in the second one.
pub trait Scorer {
    type Score: Score;

    fn seq1_gap_open(&self, pos: usize) -> Self::Score;
    fn seq1_gap_extend(&self, pos: usize) -> Self::Score;

    fn seq2_gap_open(&self, pos: usize) -> Self::Score;
    fn seq2_gap_extend(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap_open(&self) -> Self::GapScore;
    fn gap_extend(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap_open(&self, _: usize) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq1_gap_extend(&self, _: usize) -> Self::Score {
        self.gap_extend()
    }

    #[inline(always)]
    fn seq2_gap_open(&self, _: usize) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq2_gap_extend(&self, _: usize) -> Self::Score {
        self.gap_extend()
    }
}

/// Separate costs for the first gap symbol of a run and for each following one
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> PosInvariantScorer for Affine<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::GapScore {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::GapScore {
        self.extend
    }
}

/// The same cost for every gap symbol
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Linear<S: Score> {
    pub cost: S,
}

impl<S: Score> PosInvariantScorer for Linear<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::GapScore {
        self.cost
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::GapScore {
        self.cost
    }
}
