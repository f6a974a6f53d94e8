use crate::pairwise::alignable::Alignable;
use crate::pairwise::dp::Policy;
use crate::pairwise::scoring;
use crate::Score;

use super::Tracer;

/// Fills the whole matrix row by row over the second sequence, keeping one row of scores in memory
#[derive(Clone, Debug, Default)]
pub struct FullScan<S: Score> {
    // H of the previous row while it is being overwritten by the current one
    h: Vec<S>,
    // F of the previous row, updated in place
    f: Vec<S>,
}

impl<S: Score> FullScan<S> {
    pub fn new() -> Self {
        Self {
            h: Vec::new(),
            f: Vec::new(),
        }
    }

    pub fn scan<Smb, Seq1, Seq2, Scheme, T>(
        &mut self,
        policy: Policy,
        seq1: &Seq1,
        seq2: &Seq2,
        scheme: &Scheme,
        tracer: &mut T,
    ) where
        Seq1: Alignable<Symbol = Smb>,
        Seq2: Alignable<Symbol = Smb>,
        Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
        T: Tracer<Score = S>,
    {
        let cols = seq1.len();
        let minf = S::min_value();

        self.h.clear();
        self.h.resize(cols + 1, S::zero());
        self.f.clear();
        self.f.resize(cols + 1, minf);

        self.first_row(policy, cols, scheme, tracer);

        for row in 1..=seq2.len() {
            tracer.row_start(row);
            let s2 = seq2.at(row - 1);

            // H[row - 1][col - 1]
            let mut diagonal = self.h[0];
            self.h[0] = match policy {
                Policy::Global => {
                    let score = if row == 1 {
                        let score = scheme.seq1_gap_open(0);
                        tracer.up_gap_open(row, 0, score);
                        score
                    } else {
                        let score = self.h[0].saturating_add(scheme.seq1_gap_extend(0));
                        tracer.up_gap_extend(row, 0, score);
                        score
                    };
                    tracer.gap_up(row, 0, score);
                    self.f[0] = score;
                    score
                }
                Policy::Local | Policy::Overlap => {
                    tracer.stop(row, 0);
                    S::zero()
                }
            };

            // H[row][col - 1] and E[row][col - 1]
            let mut left = self.h[0];
            let mut e = minf;
            for col in 1..=cols {
                let s1 = seq1.at(col - 1);
                let up = self.h[col];

                let open = left.saturating_add(scheme.seq2_gap_open(row));
                let extend = e.saturating_add(scheme.seq2_gap_extend(row));
                if extend > open {
                    e = extend;
                    tracer.left_gap_extend(row, col, e);
                } else {
                    e = open;
                    tracer.left_gap_open(row, col, e);
                }

                let open = up.saturating_add(scheme.seq1_gap_open(col));
                let extend = self.f[col].saturating_add(scheme.seq1_gap_extend(col));
                let f = if extend > open {
                    tracer.up_gap_extend(row, col, extend);
                    extend
                } else {
                    tracer.up_gap_open(row, col, open);
                    open
                };
                self.f[col] = f;

                let d = diagonal.saturating_add(scheme.score(col - 1, s1, row - 1, s2));
                diagonal = up;

                let mut best = d.max(f).max(e);
                if policy == Policy::Local && best <= S::zero() {
                    best = S::zero();
                    tracer.stop(row, col);
                } else if d == best {
                    tracer.diagonal(row, col, best);
                } else if f == best {
                    tracer.gap_up(row, col, best);
                } else {
                    tracer.gap_left(row, col, best);
                }

                self.h[col] = best;
                left = best;
            }
            tracer.row_end(row);
        }
    }

    fn first_row<Scheme, T>(&mut self, policy: Policy, cols: usize, scheme: &Scheme, tracer: &mut T)
    where
        Scheme: scoring::gaps::Scorer<Score = S>,
        T: Tracer<Score = S>,
    {
        tracer.row_start(0);
        tracer.stop(0, 0);
        match policy {
            Policy::Global => {
                let mut score = S::zero();
                for col in 1..=cols {
                    if col == 1 {
                        score = scheme.seq2_gap_open(0);
                        tracer.left_gap_open(0, col, score);
                    } else {
                        score = score.saturating_add(scheme.seq2_gap_extend(0));
                        tracer.left_gap_extend(0, col, score);
                    }
                    tracer.gap_left(0, col, score);
                    self.h[col] = score;
                }
            }
            Policy::Local | Policy::Overlap => {
                for col in 1..=cols {
                    tracer.stop(0, col);
                }
            }
        }
        tracer.row_end(0);
    }
}
