use seqweave_alignment_rs::{Aligner, PairwiseAlignedSequence, Policy, SimilarityMatrix};
use seqweave_core_rs::alignment::pairwise::Op;
use seqweave_core_rs::alphabet::{MoleculeType, DNA};
use seqweave_core_rs::seq::Sequence;

mod global;
mod local;
mod overlap;

pub fn dna(symbols: &str) -> Sequence {
    Sequence::new(&DNA, symbols).unwrap()
}

pub fn aligner(policy: Policy, matching: i32, mismatching: i32, open: i32, extension: i32) -> Aligner {
    Aligner::builder()
        .with_policy(policy)
        .with_similarity_matrix(SimilarityMatrix::diagonal(MoleculeType::Dna, matching, mismatching))
        .with_gap_open_cost(open)
        .with_gap_extension_cost(extension)
        .build()
}

/// Same alignment with the sequences swapped
pub fn invrle(rle: &str) -> String {
    let gapfirst = Op::GapFirst.symbol();
    let gapsecond = Op::GapSecond.symbol();
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect()
}

/// Recomputes the score of an aligned pair column by column
pub fn rescore(aligned: &PairwiseAlignedSequence, matching: i32, mismatching: i32, open: i32, extension: i32) -> i32 {
    let first = aligned.first().to_string();
    let second = aligned.second().to_string();
    assert_eq!(first.len(), second.len());

    let (mut score, mut gap1, mut gap2) = (0, false, false);
    for (a, b) in first.chars().zip(second.chars()) {
        if a == '-' {
            score += if gap1 { extension } else { open };
            (gap1, gap2) = (true, false);
        } else if b == '-' {
            score += if gap2 { extension } else { open };
            (gap1, gap2) = (false, true);
        } else {
            score += if a == b { matching } else { mismatching };
            (gap1, gap2) = (false, false);
        }
    }
    score
}

pub struct Workload<'a> {
    pub seq1: &'a str,
    pub seq2: &'a str,
    pub score: i32,
    /// Aligned (first, second) pairs in the reported order
    pub hits: Vec<(&'a str, &'a str)>,
}

pub fn ensure(aligner: &Aligner, w: Workload<'_>) {
    let (seq1, seq2) = (dna(w.seq1), dna(w.seq2));
    let result = aligner.align(&seq1, &seq2).unwrap();
    if w.hits.is_empty() {
        assert!(result.is_empty(), "{} & {}", w.seq1, w.seq2);
        return;
    }

    assert_eq!(result.len(), 1);
    let alignment = &result[0];
    assert_eq!(alignment.first(), &seq1);
    assert_eq!(alignment.second(), &seq2);
    assert_eq!(alignment.len(), w.hits.len(), "{} & {}", w.seq1, w.seq2);

    for (aligned, (first, second)) in alignment.iter().zip(&w.hits) {
        assert_eq!(*aligned.score(), w.score);
        assert_eq!(aligned.first().to_string(), *first);
        assert_eq!(aligned.second().to_string(), *second);
    }

    // Unique optima must not depend on the argument order
    if w.hits.len() == 1 {
        let swapped = aligner.align(&seq2, &seq1).unwrap();
        let (direct, swapped) = (&alignment.aligned()[0], &swapped[0].aligned()[0]);
        assert_eq!(swapped.score(), direct.score());
        assert_eq!(swapped.first(), direct.second());
        assert_eq!(swapped.rle(), invrle(&direct.rle()));
    }
}
