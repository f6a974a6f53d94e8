use derive_getters::Getters;
use eyre::{eyre, Result};
use seqweave_core_rs::alignment::pairwise::{Op, Step};
use seqweave_core_rs::alphabet::SequenceItem;
use seqweave_core_rs::consensus::SimpleConsensusResolver;
use seqweave_core_rs::seq::{Sequence, SequenceView};
use seqweave_core_rs::SeqError;

use crate::pairwise::dp::{Alignment, Policy};

/// One optimal alignment of two sequences.
///
/// Both aligned sequences have the same length and use `-` for gaps. Source coordinates are
/// 0-based, `end_offsets` are inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Getters)]
pub struct PairwiseAlignedSequence {
    first: Sequence,
    second: Sequence,
    consensus: Option<Sequence>,
    score: i32,
    /// Leading shift of the first aligned sequence relative to the second one
    first_offset: usize,
    second_offset: usize,
    start_offsets: [usize; 2],
    end_offsets: [usize; 2],
    /// Number of gaps placed in each aligned sequence
    insertions: [usize; 2],
    #[getter(skip)]
    steps: Vec<Step>,
}

impl PairwiseAlignedSequence {
    pub(crate) fn assemble(
        policy: Policy,
        first: &Sequence,
        second: &Sequence,
        alignment: &Alignment<i32>,
        resolver: Option<&SimpleConsensusResolver>,
    ) -> Result<Self> {
        let gap1 = first
            .alphabet()
            .gap()
            .ok_or_else(|| eyre!("The {} alphabet has no gap symbol", first.alphabet().name()))?;
        let gap2 = second
            .alphabet()
            .gap()
            .ok_or_else(|| eyre!("The {} alphabet has no gap symbol", second.alphabet().name()))?;

        let (seq1, seq2) = (alignment.seq1(), alignment.seq2());
        let columns = Step::columns(alignment.steps()).count();
        let mut aligned1: Vec<&'static SequenceItem> = Vec::with_capacity(columns);
        let mut aligned2: Vec<&'static SequenceItem> = Vec::with_capacity(columns);
        let (mut pos1, mut pos2) = (seq1.start, seq2.start);
        for op in Step::columns(alignment.steps()) {
            match op {
                Op::GapFirst => {
                    aligned1.push(gap1);
                    aligned2.push(second.item(pos2)?);
                    pos2 += 1;
                }
                Op::GapSecond => {
                    aligned1.push(first.item(pos1)?);
                    aligned2.push(gap2);
                    pos1 += 1;
                }
                _ => {
                    aligned1.push(first.item(pos1)?);
                    aligned2.push(second.item(pos2)?);
                    pos1 += 1;
                    pos2 += 1;
                }
            }
        }
        if pos1 != seq1.end || pos2 != seq2.end {
            return Err(SeqError::invalid(format!(
                "alignment columns do not cover the aligned ranges {seq1:?} and {seq2:?}"
            ))
            .into());
        }

        let consensus = match resolver {
            Some(resolver) => {
                let mut items = Vec::with_capacity(columns);
                for (a, b) in aligned1.iter().zip(&aligned2) {
                    items.push(resolver.consensus(&[*a, *b])?);
                }
                Some(Sequence::from_items(resolver.alphabet(), items)?)
            }
            None => None,
        };

        let insertions = [
            aligned1.iter().filter(|x| x.is_gap()).count(),
            aligned2.iter().filter(|x| x.is_gap()).count(),
        ];
        let (first_offset, second_offset) = match policy {
            Policy::Global => (
                aligned1.iter().take_while(|x| x.is_gap()).count(),
                aligned2.iter().take_while(|x| x.is_gap()).count(),
            ),
            Policy::Local | Policy::Overlap if seq1.start >= seq2.start => {
                (0, seq1.start - seq2.start)
            }
            Policy::Local | Policy::Overlap => (seq2.start - seq1.start, 0),
        };

        Ok(Self {
            first: aligned_copy(first, aligned1)?,
            second: aligned_copy(second, aligned2)?,
            consensus,
            score: *alignment.score(),
            first_offset,
            second_offset,
            start_offsets: [seq1.start, seq2.start],
            end_offsets: [seq1.end.saturating_sub(1), seq2.end.saturating_sub(1)],
            insertions,
            steps: alignment.steps().clone(),
        })
    }

    /// Run-length encoded alignment columns
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn rle(&self) -> String {
        Step::rle(&self.steps)
    }
}

// Aligned copy keeps the identity of its source
fn aligned_copy(source: &Sequence, items: Vec<&'static SequenceItem>) -> Result<Sequence> {
    let seq = Sequence::from_items(source.alphabet(), items)?
        .with_id(source.id())
        .with_display_id(source.display_id());
    Ok(seq)
}

/// All optimal alignments of one pair of input sequences
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairwiseSequenceAlignment {
    first: Sequence,
    second: Sequence,
    aligned: Vec<PairwiseAlignedSequence>,
    read_only: bool,
    documentation: Option<String>,
}

impl PairwiseSequenceAlignment {
    pub fn new(first: Sequence, second: Sequence) -> Self {
        Self {
            first,
            second,
            aligned: Vec::new(),
            read_only: false,
            documentation: None,
        }
    }

    pub fn first(&self) -> &Sequence {
        &self.first
    }

    pub fn second(&self) -> &Sequence {
        &self.second
    }

    /// The input sequences in order
    pub fn sequences(&self) -> [&Sequence; 2] {
        [&self.first, &self.second]
    }

    pub fn aligned(&self) -> &[PairwiseAlignedSequence] {
        &self.aligned
    }

    pub fn len(&self) -> usize {
        self.aligned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PairwiseAlignedSequence> {
        self.aligned.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairwiseAlignedSequence> {
        self.aligned.iter()
    }

    pub fn push(&mut self, aligned: PairwiseAlignedSequence) -> Result<(), SeqError> {
        self.ensure_writable()?;
        self.aligned.push(aligned);
        Ok(())
    }

    pub fn remove(&mut self, aligned: &PairwiseAlignedSequence) -> Result<bool, SeqError> {
        self.ensure_writable()?;
        match self.aligned.iter().position(|x| x == aligned) {
            Some(index) => {
                self.aligned.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&mut self) -> Result<(), SeqError> {
        self.ensure_writable()?;
        self.aligned.clear();
        Ok(())
    }

    pub fn contains(&self, aligned: &PairwiseAlignedSequence) -> bool {
        self.aligned.contains(aligned)
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn set_documentation(&mut self, documentation: Option<String>) {
        self.documentation = documentation;
    }

    fn ensure_writable(&self) -> Result<(), SeqError> {
        if self.read_only {
            Err(SeqError::ReadOnly)
        } else {
            Ok(())
        }
    }
}

impl<'a> IntoIterator for &'a PairwiseSequenceAlignment {
    type Item = &'a PairwiseAlignedSequence;
    type IntoIter = std::slice::Iter<'a, PairwiseAlignedSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.aligned.iter()
    }
}
