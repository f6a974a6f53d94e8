use std::fmt::Debug;

pub use pairwise::{
    Aligner, AlignerBuilder, PairwiseAlignedSequence, PairwiseSequenceAlignment, Policy,
    SimilarityMatrix, StandardMatrix,
};

pub mod pairwise;

/// Numeric type of alignment scores
pub trait Score: num::PrimInt + num::Signed + Debug + Default {}

impl<T: num::PrimInt + num::Signed + Debug + Default> Score for T {}
