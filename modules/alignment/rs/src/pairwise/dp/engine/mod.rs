use eyre::Result;
use seqweave_core_rs::alignment::pairwise::{Op, Step};
use tracers::Tracers;

use crate::pairwise::alignable::Alignable;
use crate::pairwise::dp::algo::{FullScan, Tracer};
use crate::pairwise::dp::traceback::TracedAlignment;
use crate::pairwise::dp::{storage, traceback, Alignment, Policy};
use crate::pairwise::scoring::{self, equiv::Classifier};
use crate::Score;

mod tracers;

/// Reusable alignment engine: buffers are kept between calls and resized on demand
pub struct Engine<S, Storage, TraceMat>
where
    S: Score,
    Storage: storage::Storage<Score = S> + Tracer<Score = S>,
    TraceMat: traceback::TraceMat + Tracer<Score = S>,
{
    algo: FullScan<S>,
    tracers: Tracers<S, Storage, TraceMat>,
}

impl<S, Storage, TraceMat> Engine<S, Storage, TraceMat>
where
    S: Score,
    Storage: storage::Storage<Score = S> + Tracer<Score = S>,
    TraceMat: traceback::TraceMat + Tracer<Score = S>,
{
    pub fn new(storage: Storage, tracemat: TraceMat) -> Self {
        Self {
            algo: FullScan::new(),
            tracers: Tracers {
                storage,
                tracemat,
                _phantom: Default::default(),
            },
        }
    }

    /// Every optimal alignment of the two sequences under the given policy, in the order their
    /// end cells were reached. Empty inputs have no alignments.
    pub fn scan_all<Smb, Seq1, Seq2, Scheme>(
        &mut self,
        policy: Policy,
        seq1: &Seq1,
        seq2: &Seq2,
        scheme: &Scheme,
    ) -> Result<Vec<Alignment<S>>>
    where
        Seq1: Alignable<Symbol = Smb>,
        Seq2: Alignable<Symbol = Smb>,
        Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    {
        if seq1.is_empty() || seq2.is_empty() {
            return Ok(vec![]);
        }
        log::debug!(
            "Running {policy} alignment over a {}x{} matrix",
            seq2.len() + 1,
            seq1.len() + 1
        );

        self.tracers.reset(policy, seq2.len(), seq1.len());
        self.algo.scan(policy, seq1, seq2, scheme, &mut self.tracers);

        let seeds = self.tracers.storage.finalize();
        log::debug!("Found {} optimal alignment(s)", seeds.len());

        let mut result = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let traced = self.tracers.tracemat.trace(seed.row, seed.col)?;
            let steps = Step::collapse(classify(&traced, scheme, seq1, seq2));
            result.push(Alignment::new(seed.score, steps, traced.seq1, traced.seq2));
        }
        Ok(result)
    }
}

// Replaces diagonal placeholders with the column class of the aligned symbols
fn classify<Smb, Seq1, Seq2, E>(
    traced: &TracedAlignment,
    classifier: &E,
    seq1: &Seq1,
    seq2: &Seq2,
) -> Vec<Op>
where
    Seq1: Alignable<Symbol = Smb>,
    Seq2: Alignable<Symbol = Smb>,
    E: Classifier<Symbol = Smb>,
{
    let (mut pos1, mut pos2) = (traced.seq1.start, traced.seq2.start);
    let mut ops = Vec::with_capacity(traced.ops.len());
    for op in &traced.ops {
        match op {
            Op::GapFirst => pos2 += 1,
            Op::GapSecond => pos1 += 1,
            _ => {
                ops.push(classifier.classify(seq1.at(pos1), seq2.at(pos2)).into());
                pos1 += 1;
                pos2 += 1;
                continue;
            }
        }
        ops.push(*op);
    }
    ops
}
