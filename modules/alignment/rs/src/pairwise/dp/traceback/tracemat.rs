use std::marker::PhantomData;

use eyre::{ensure, eyre, Result};
use seqweave_core_rs::alignment::pairwise::Op;

use crate::pairwise::dp::algo::{BestDirectionTracer, GapTracer, Tracer};
use crate::Score;

use super::{TraceMat, TracedAlignment};

// Per cell: 2 bits for the source of H plus one "extended" bit for each gap matrix
const SOURCE: u8 = 0b0011;
const STOP: u8 = 0b0000;
const DIAGONAL: u8 = 0b0001;
const UP: u8 = 0b0010;
const LEFT: u8 = 0b0011;
const UP_EXTENDED: u8 = 0b0100;
const LEFT_EXTENDED: u8 = 0b1000;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Best,
    Up,
    Left,
}

/// Full matrix of traceback bits, one row per symbol of the second sequence plus the boundary
#[derive(Clone, Debug)]
pub struct TraceMatrix<S: Score> {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
    phantom: PhantomData<S>,
}

impl<S: Score> TraceMatrix<S> {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
            cols: 0,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize) -> &mut u8 {
        &mut self.cells[row * self.cols + col]
    }

    #[inline(always)]
    fn set_source(&mut self, row: usize, col: usize, source: u8) {
        let cell = self.cell(row, col);
        *cell = (*cell & !SOURCE) | source;
    }
}

impl<S: Score> Default for TraceMatrix<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> BestDirectionTracer for TraceMatrix<S> {
    type Score = S;

    #[inline(always)]
    fn diagonal(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_source(row, col, DIAGONAL);
    }

    #[inline(always)]
    fn gap_up(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_source(row, col, UP);
    }

    #[inline(always)]
    fn gap_left(&mut self, row: usize, col: usize, _: Self::Score) {
        self.set_source(row, col, LEFT);
    }

    #[inline(always)]
    fn stop(&mut self, row: usize, col: usize) {
        self.set_source(row, col, STOP);
    }
}

impl<S: Score> GapTracer for TraceMatrix<S> {
    type Score = S;

    #[inline(always)]
    fn up_gap_open(&mut self, row: usize, col: usize, _: Self::Score) {
        *self.cell(row, col) &= !UP_EXTENDED;
    }

    #[inline(always)]
    fn up_gap_extend(&mut self, row: usize, col: usize, _: Self::Score) {
        *self.cell(row, col) |= UP_EXTENDED;
    }

    #[inline(always)]
    fn left_gap_open(&mut self, row: usize, col: usize, _: Self::Score) {
        *self.cell(row, col) &= !LEFT_EXTENDED;
    }

    #[inline(always)]
    fn left_gap_extend(&mut self, row: usize, col: usize, _: Self::Score) {
        *self.cell(row, col) |= LEFT_EXTENDED;
    }
}

impl<S: Score> Tracer for TraceMatrix<S> {
    type Score = S;
}

impl<S: Score> TraceMat for TraceMatrix<S> {
    fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows + 1;
        self.cols = cols + 1;
        self.cells.clear();
        self.cells.resize(self.rows * self.cols, STOP);
    }

    fn trace(&self, row: usize, col: usize) -> Result<TracedAlignment> {
        ensure!(
            row < self.rows && col < self.cols,
            "Traceback seed ({row}, {col}) is outside of the {}x{} matrix",
            self.rows,
            self.cols
        );
        let (seq2end, seq1end) = (row, col);
        let (mut row, mut col) = (row, col);
        let mut state = State::Best;
        let mut ops = Vec::with_capacity(row + col);

        loop {
            let cell = self.cells[row * self.cols + col];
            state = match state {
                State::Best => match cell & SOURCE {
                    STOP => break,
                    DIAGONAL => {
                        ops.push(Op::Equivalent);
                        row -= 1;
                        col -= 1;
                        State::Best
                    }
                    UP => State::Up,
                    _ => State::Left,
                },
                State::Up => {
                    let extended = cell & UP_EXTENDED != 0;
                    ops.push(Op::GapFirst);
                    row = row
                        .checked_sub(1)
                        .ok_or_else(|| eyre!("Vertical gap leaves the matrix at column {col}"))?;
                    if extended {
                        State::Up
                    } else {
                        State::Best
                    }
                }
                State::Left => {
                    let extended = cell & LEFT_EXTENDED != 0;
                    ops.push(Op::GapSecond);
                    col = col
                        .checked_sub(1)
                        .ok_or_else(|| eyre!("Horizontal gap leaves the matrix at row {row}"))?;
                    if extended {
                        State::Left
                    } else {
                        State::Best
                    }
                }
            };
        }
        ops.reverse();

        Ok(TracedAlignment {
            ops,
            seq1: col..seq1end,
            seq2: row..seq2end,
        })
    }
}
