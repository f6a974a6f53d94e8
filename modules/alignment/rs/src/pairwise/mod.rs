pub use aligner::{Aligner, AlignerBuilder};
pub use dp::Policy;
pub use result::{PairwiseAlignedSequence, PairwiseSequenceAlignment};
pub use scoring::{SimilarityMatrix, StandardMatrix};

pub mod alignable;
mod aligner;
pub mod dp;
mod result;
pub mod scoring;
