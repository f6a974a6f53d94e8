pub use scan::FullScan;

use crate::Score;

mod scan;

// The scan fills the matrix row by row and reports every decision to the tracers.
// Coordinates are matrix coordinates: rows follow the second sequence, columns the first one,
// row 0 and column 0 are the boundary.

#[allow(unused_variables)]
pub trait BestDirectionTracer {
    type Score: Score;

    fn diagonal(&mut self, row: usize, col: usize, score: Self::Score) {}
    /// Best path ends with a gap in the first sequence
    fn gap_up(&mut self, row: usize, col: usize, score: Self::Score) {}
    /// Best path ends with a gap in the second sequence
    fn gap_left(&mut self, row: usize, col: usize, score: Self::Score) {}
    /// The cell starts a new path (boundary or local restart)
    fn stop(&mut self, row: usize, col: usize) {}
}

#[allow(unused_variables)]
pub trait GapTracer {
    type Score: Score;

    fn up_gap_open(&mut self, row: usize, col: usize, score: Self::Score) {}
    fn up_gap_extend(&mut self, row: usize, col: usize, score: Self::Score) {}

    fn left_gap_open(&mut self, row: usize, col: usize, score: Self::Score) {}
    fn left_gap_extend(&mut self, row: usize, col: usize, score: Self::Score) {}
}

#[allow(unused_variables)]
pub trait Tracer:
    BestDirectionTracer<Score = <Self as Tracer>::Score> + GapTracer<Score = <Self as Tracer>::Score>
{
    type Score: Score;

    fn row_start(&mut self, row: usize) {}
    fn row_end(&mut self, row: usize) {}
}
