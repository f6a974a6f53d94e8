use std::marker::PhantomData;

use derive_getters::Dissolve;

use crate::pairwise::dp::algo::{BestDirectionTracer, GapTracer, Tracer};
use crate::pairwise::dp::{storage, traceback, Policy};
use crate::Score;

/// Forwards every scan decision to the storage and to the trace matrix
#[derive(Dissolve)]
pub struct Tracers<S, Storage, TraceMat>
where
    S: Score,
    Storage: storage::Storage<Score = S> + Tracer<Score = S>,
    TraceMat: traceback::TraceMat + Tracer<Score = S>,
{
    pub storage: Storage,
    pub tracemat: TraceMat,
    pub _phantom: PhantomData<S>,
}

impl<S, Storage, TraceMat> BestDirectionTracer for Tracers<S, Storage, TraceMat>
where
    S: Score,
    Storage: storage::Storage<Score = S> + Tracer<Score = S>,
    TraceMat: traceback::TraceMat + Tracer<Score = S>,
{
    type Score = S;

    #[inline(always)]
    fn diagonal(&mut self, row: usize, col: usize, score: Self::Score) {
        self.storage.diagonal(row, col, score);
        self.tracemat.diagonal(row, col, score);
    }

    #[inline(always)]
    fn gap_up(&mut self, row: usize, col: usize, score: Self::Score) {
        self.storage.gap_up(row, col, score);
        self.tracemat.gap_up(row, col, score);
    }

    #[inline(always)]
    fn gap_left(&mut self, row: usize, col: usize, score: Self::Score) {
        self.storage.gap_left(row, col, score);
        self.tracemat.gap_left(row, col, score);
    }

    #[inline(always)]
    fn stop(&mut self, row: usize, col: usize) {
        self.storage.stop(row, col);
        self.tracemat.stop(row, col);
    }
}

impl<S, Storage, TraceMat> GapTracer for Tracers<S, Storage, TraceMat>
where
    S: Score,
    Storage: storage::Storage<Score = S> + Tracer<Score = S>,
    TraceMat: traceback::TraceMat + Tracer<Score = S>,
{
    type Score = S;

    #[inline(always)]
    fn up_gap_open(&mut self, row: usize, col: usize, score: Self::Score) {
        self.storage.up_gap_open(row, col, score);
        self.tracemat.up_gap_open(row, col, score);
    }

    #[inline(always)]
    fn up_gap_extend(&mut self, row: usize, col: usize, score: Self::Score) {
        self.storage.up_gap_extend(row, col, score);
        self.tracemat.up_gap_extend(row, col, score);
    }

    #[inline(always)]
    fn left_gap_open(&mut self, row: usize, col: usize, score: Self::Score) {
        self.storage.left_gap_open(row, col, score);
        self.tracemat.left_gap_open(row, col, score);
    }

    #[inline(always)]
    fn left_gap_extend(&mut self, row: usize, col: usize, score: Self::Score) {
        self.storage.left_gap_extend(row, col, score);
        self.tracemat.left_gap_extend(row, col, score);
    }
}

impl<S, Storage, TraceMat> Tracer for Tracers<S, Storage, TraceMat>
where
    S: Score,
    Storage: storage::Storage<Score = S> + Tracer<Score = S>,
    TraceMat: traceback::TraceMat + Tracer<Score = S>,
{
    type Score = S;

    #[inline(always)]
    fn row_start(&mut self, row: usize) {
        self.storage.row_start(row);
        self.tracemat.row_start(row);
    }

    #[inline(always)]
    fn row_end(&mut self, row: usize) {
        self.storage.row_end(row);
        self.tracemat.row_end(row);
    }
}

impl<S, Storage, TraceMat> Tracers<S, Storage, TraceMat>
where
    S: Score,
    Storage: storage::Storage<Score = S> + Tracer<Score = S>,
    TraceMat: traceback::TraceMat + Tracer<Score = S>,
{
    pub fn reset(&mut self, policy: Policy, rows: usize, cols: usize) {
        self.storage.reset(policy, rows, cols);
        self.tracemat.reset(rows, cols);
    }
}
