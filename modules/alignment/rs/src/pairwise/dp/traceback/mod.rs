use std::ops::Range;

use eyre::Result;
use seqweave_core_rs::alignment::pairwise::Op;

pub use tracemat::TraceMatrix;

mod tracemat;

/// Path recovered from the trace matrix. Diagonal columns are reported as [`Op::Equivalent`]
/// until the engine classifies the aligned symbols.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TracedAlignment {
    pub ops: Vec<Op>,
    pub seq1: Range<usize>,
    pub seq2: Range<usize>,
}

pub trait TraceMat {
    fn reset(&mut self, rows: usize, cols: usize);
    fn trace(&self, row: usize, col: usize) -> Result<TracedAlignment>;
}
