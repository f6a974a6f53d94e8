//! Dynamic programming over an (m + 1) x (n + 1) matrix with affine gaps (Gotoh).
//!
//! Rows follow the second sequence and columns the first one, so the matrix is filled row-major
//! over the second sequence. Every cell keeps three scores: the best score overall (H), the best
//! score ending with a gap in the first sequence (F, vertical moves) and the best score ending
//! with a gap in the second sequence (E, horizontal moves). Equal candidates are resolved as
//! diagonal, then vertical, then horizontal; gap runs prefer opening over extending.

use std::fmt::{Display, Formatter};
use std::ops::Range;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use seqweave_core_rs::alignment::pairwise::Step;

pub use engine::Engine;

pub mod algo;
pub mod engine;
pub mod storage;
pub mod traceback;

/// Boundary conditions and traceback rule of the scan
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub enum Policy {
    /// End-to-end alignment: leading gaps are charged and the traceback starts at the last cell.
    Global,
    /// Best pair of subsequences: scores are floored at zero and the traceback starts at the
    /// matrix maximum.
    Local,
    /// Free end gaps: the first row and column are zero and the traceback starts at the best cell
    /// of the last row or column.
    Overlap,
}

impl Display for Policy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Policy::Global => "global",
            Policy::Local => "local",
            Policy::Overlap => "overlap",
        };
        f.write_str(name)
    }
}

/// Raw engine output: aligned ranges of both sequences and the columns between them
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve, Constructor)]
pub struct Alignment<S> {
    score: S,
    steps: Vec<Step>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl<S> Alignment<S> {
    pub fn rle(&self) -> String {
        Step::rle(&self.steps)
    }
}
