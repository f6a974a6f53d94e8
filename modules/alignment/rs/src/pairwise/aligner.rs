use eyre::Result;
use seqweave_core_rs::alphabet::MoleculeType;
use seqweave_core_rs::consensus::SimpleConsensusResolver;
use seqweave_core_rs::seq::{Sequence, SequenceView};
use seqweave_core_rs::SeqError;

use crate::pairwise::dp::storage::Optima;
use crate::pairwise::dp::traceback::TraceMatrix;
use crate::pairwise::dp::{Engine, Policy};
use crate::pairwise::scoring::gaps::{self, Affine, Linear};
use crate::pairwise::scoring::{self, SimilarityMatrix};
use crate::pairwise::{PairwiseAlignedSequence, PairwiseSequenceAlignment};

/// Pairwise aligner for one boundary policy.
///
/// `align_simple` charges `gap_open_cost` for every gap symbol, `align` charges it for the first
/// symbol of a gap run and `gap_extension_cost` for every following one. Each call returns either
/// nothing (no positive local/overlap optimum) or a single [`PairwiseSequenceAlignment`] holding
/// every tied optimum. Any [`SequenceView`] is accepted; the inputs are copied into dense
/// [`Sequence`] values stored in the result.
#[derive(Clone, Debug)]
pub struct Aligner {
    policy: Policy,
    matrix: SimilarityMatrix,
    gap_open: i32,
    gap_extension: i32,
    consensus: bool,
}

impl Aligner {
    pub fn builder() -> AlignerBuilder {
        AlignerBuilder::default()
    }

    /// Global alignment with default scoring
    pub fn needleman_wunsch() -> Self {
        Self::builder().with_policy(Policy::Global).build()
    }

    /// Local alignment with default scoring
    pub fn smith_waterman() -> Self {
        Self::builder().with_policy(Policy::Local).build()
    }

    /// Overlap alignment with default scoring
    pub fn overlap() -> Self {
        Self::builder().with_policy(Policy::Overlap).build()
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn similarity_matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn gap_open_cost(&self) -> i32 {
        self.gap_open
    }

    pub fn gap_extension_cost(&self) -> i32 {
        self.gap_extension
    }

    pub fn generates_consensus(&self) -> bool {
        self.consensus
    }

    pub fn set_similarity_matrix(&mut self, matrix: SimilarityMatrix) {
        self.matrix = matrix;
    }

    pub fn set_gap_open_cost(&mut self, cost: i32) {
        self.gap_open = cost;
    }

    pub fn set_gap_extension_cost(&mut self, cost: i32) {
        self.gap_extension = cost;
    }

    pub fn set_consensus(&mut self, consensus: bool) {
        self.consensus = consensus;
    }

    pub fn align_simple(
        &self,
        first: &(impl SequenceView + ?Sized),
        second: &(impl SequenceView + ?Sized),
    ) -> Result<Vec<PairwiseSequenceAlignment>> {
        self.align_simple_with(&self.matrix, self.gap_open, first, second)
    }

    pub fn align_simple_with(
        &self,
        matrix: &SimilarityMatrix,
        gap_open: i32,
        first: &(impl SequenceView + ?Sized),
        second: &(impl SequenceView + ?Sized),
    ) -> Result<Vec<PairwiseSequenceAlignment>> {
        self.validate(matrix, first, second)?;
        warn_positive("Gap open", gap_open);
        self.run(matrix, Linear { cost: gap_open }, first, second)
    }

    pub fn align(
        &self,
        first: &(impl SequenceView + ?Sized),
        second: &(impl SequenceView + ?Sized),
    ) -> Result<Vec<PairwiseSequenceAlignment>> {
        self.align_with(&self.matrix, self.gap_open, self.gap_extension, first, second)
    }

    pub fn align_with(
        &self,
        matrix: &SimilarityMatrix,
        gap_open: i32,
        gap_extension: i32,
        first: &(impl SequenceView + ?Sized),
        second: &(impl SequenceView + ?Sized),
    ) -> Result<Vec<PairwiseSequenceAlignment>> {
        self.validate(matrix, first, second)?;
        warn_positive("Gap open", gap_open);
        warn_positive("Gap extension", gap_extension);
        let gaps = Affine {
            open: gap_open,
            extend: gap_extension,
        };
        self.run(matrix, gaps, first, second)
    }

    /// [`Aligner::align_simple`] over a list that must hold exactly two sequences
    pub fn align_simple_list<V: SequenceView>(&self, sequences: &[V]) -> Result<Vec<PairwiseSequenceAlignment>> {
        let [first, second] = pair(sequences)?;
        self.align_simple(first, second)
    }

    /// [`Aligner::align`] over a list that must hold exactly two sequences
    pub fn align_list<V: SequenceView>(&self, sequences: &[V]) -> Result<Vec<PairwiseSequenceAlignment>> {
        let [first, second] = pair(sequences)?;
        self.align(first, second)
    }

    fn validate(
        &self,
        matrix: &SimilarityMatrix,
        first: &(impl SequenceView + ?Sized),
        second: &(impl SequenceView + ?Sized),
    ) -> Result<(), SeqError> {
        if first.alphabet() != second.alphabet() {
            return Err(SeqError::invalid(format!(
                "input sequences use different alphabets: {} and {}",
                first.alphabet().name(),
                second.alphabet().name()
            )));
        }
        if !matrix.validate(first) {
            return Err(SeqError::invalid(format!(
                "first input sequence does not match the similarity matrix {}",
                matrix.name()
            )));
        }
        if !matrix.validate(second) {
            return Err(SeqError::invalid(format!(
                "second input sequence does not match the similarity matrix {}",
                matrix.name()
            )));
        }
        Ok(())
    }

    fn run<G>(
        &self,
        matrix: &SimilarityMatrix,
        gaps: G,
        first: &(impl SequenceView + ?Sized),
        second: &(impl SequenceView + ?Sized),
    ) -> Result<Vec<PairwiseSequenceAlignment>>
    where
        G: gaps::Scorer<Score = i32>,
    {
        let (first, second) = (Sequence::from_view(first)?, Sequence::from_view(second)?);
        let (seq1, seq2) = (matrix.encode(&first)?, matrix.encode(&second)?);
        let scheme = scoring::compose(matrix, gaps, matrix);

        let mut engine = Engine::new(Optima::new(), TraceMatrix::new());
        let optima = engine.scan_all(self.policy, &seq1, &seq2, &scheme)?;
        if optima.is_empty() {
            return Ok(vec![]);
        }

        let resolver = self
            .consensus
            .then(|| SimpleConsensusResolver::new(first.alphabet()));
        let mut aligned = Vec::with_capacity(optima.len());
        for optimum in &optima {
            aligned.push(PairwiseAlignedSequence::assemble(
                self.policy,
                &first,
                &second,
                optimum,
                resolver.as_ref(),
            )?);
        }

        let mut alignment = PairwiseSequenceAlignment::new(first, second);
        for x in aligned {
            alignment.push(x)?;
        }
        Ok(vec![alignment])
    }
}

impl Default for Aligner {
    fn default() -> Self {
        AlignerBuilder::default().build()
    }
}

fn pair<V>(sequences: &[V]) -> Result<[&V; 2], SeqError> {
    match sequences {
        [first, second] => Ok([first, second]),
        _ => Err(SeqError::invalid(format!(
            "pairwise alignment needs exactly two sequences, got {}",
            sequences.len()
        ))),
    }
}

fn warn_positive(what: &str, cost: i32) {
    if cost > 0 {
        log::warn!("{what} cost {cost} > 0, possible error");
    }
}

/// Configures an [`Aligner`]. Defaults to global alignment with a protein diagonal matrix
/// (match 2, mismatch -2), gap open -8, gap extension -1 and consensus generation.
#[derive(Clone, Debug)]
pub struct AlignerBuilder {
    policy: Policy,
    matrix: SimilarityMatrix,
    gap_open: i32,
    gap_extension: i32,
    consensus: bool,
}

impl Default for AlignerBuilder {
    fn default() -> Self {
        Self {
            policy: Policy::Global,
            matrix: SimilarityMatrix::diagonal(MoleculeType::Protein, 2, -2),
            gap_open: -8,
            gap_extension: -1,
            consensus: true,
        }
    }
}

impl AlignerBuilder {
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_similarity_matrix(mut self, matrix: SimilarityMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn with_gap_open_cost(mut self, cost: i32) -> Self {
        self.gap_open = cost;
        self
    }

    pub fn with_gap_extension_cost(mut self, cost: i32) -> Self {
        self.gap_extension = cost;
        self
    }

    pub fn with_consensus(mut self, consensus: bool) -> Self {
        self.consensus = consensus;
        self
    }

    pub fn build(self) -> Aligner {
        Aligner {
            policy: self.policy,
            matrix: self.matrix,
            gap_open: self.gap_open,
            gap_extension: self.gap_extension,
            consensus: self.consensus,
        }
    }
}
