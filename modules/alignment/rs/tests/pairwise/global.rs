use seqweave_alignment_rs::{Policy, SimilarityMatrix};
use seqweave_core_rs::seq::SequenceView;

use super::*;

#[test]
fn test_workloads() {
    let aligner = aligner(Policy::Global, 1, -1, -8, -1);
    let workload = vec![
        Workload {
            seq1: "GATTACA",
            seq2: "GATTACA",
            score: 7,
            hits: vec![("GATTACA", "GATTACA")],
        },
        Workload {
            seq1: "ACGTACGT",
            seq2: "ACGACGT",
            score: -1,
            hits: vec![("ACGTACGT", "ACG-ACGT")],
        },
        Workload {
            seq1: "AAAA",
            seq2: "TTTT",
            score: -4,
            hits: vec![("AAAA", "TTTT")],
        },
        Workload {
            seq1: "ACGT",
            seq2: "AGT",
            score: -5,
            hits: vec![("ACGT", "A-GT")],
        },
        Workload {
            seq1: "AAAGGGTTT",
            seq2: "AAATTT",
            score: -4,
            hits: vec![("AAAGGGTTT", "AAA---TTT")],
        },
        Workload {
            seq1: "",
            seq2: "ACGT",
            score: 0,
            hits: vec![],
        },
    ];
    for w in workload {
        ensure(&aligner, w);
    }
}

#[test]
fn test_score_matches_columns() {
    let aligner = aligner(Policy::Global, 1, -1, -8, -1);
    let pairs = [
        ("ACGTTGCA", "ACGTGCA"),
        ("GGATCCAAT", "GATCAT"),
        ("TTTTTTTTTT", "TTTAAATTTT"),
        ("CATCATCAT", "CAT"),
        ("A", "ACGTACGTACGT"),
    ];
    for (seq1, seq2) in pairs {
        let (seq1, seq2) = (dna(seq1), dna(seq2));
        let result = aligner.align_simple(&seq1, &seq2).unwrap();
        let aligned = &result[0].aligned()[0];

        // matches - mismatches + open x gap symbols
        assert_eq!(*aligned.score(), rescore(aligned, 1, -1, -8, -8));

        // Every residue of both inputs is kept
        let first: String = aligned.first().to_string().replace('-', "");
        let second: String = aligned.second().to_string().replace('-', "");
        assert_eq!(first, seq1.to_string());
        assert_eq!(second, seq2.to_string());
        assert_eq!(*aligned.start_offsets(), [0, 0]);
        assert_eq!(*aligned.end_offsets(), [seq1.len() - 1, seq2.len() - 1]);
        assert_eq!(aligned.insertions()[0], aligned.first().to_string().matches('-').count());

        let affine = aligner.align(&seq1, &seq2).unwrap();
        assert_eq!(*affine[0].aligned()[0].score(), rescore(&affine[0].aligned()[0], 1, -1, -8, -1));
    }
}

#[test]
fn test_simple_equals_affine_with_equal_costs() {
    let aligner = aligner(Policy::Global, 1, -1, -3, -3);
    let pairs = [
        ("ACGTTGCA", "ACGTGCA"),
        ("GGATCCAAT", "GATCAT"),
        ("AA", "A"),
        ("CCCCGGGG", "GGGGCCCC"),
    ];
    for (seq1, seq2) in pairs {
        let (seq1, seq2) = (dna(seq1), dna(seq2));
        assert_eq!(
            aligner.align_simple(&seq1, &seq2).unwrap(),
            aligner.align(&seq1, &seq2).unwrap()
        );
    }
}

#[test]
fn test_determinism() {
    let aligner = aligner(Policy::Global, 1, -1, -2, -1);
    let (seq1, seq2) = (dna("ACGGTACCAGT"), dna("AGGTTACAT"));
    let expected = aligner.align(&seq1, &seq2).unwrap();
    for _ in 0..5 {
        assert_eq!(aligner.align(&seq1, &seq2).unwrap(), expected);
    }
}

#[test]
fn test_ties_prefer_diagonal() {
    let aligner = aligner(Policy::Global, 1, -1, -2, -2);
    let result = aligner.align(&dna("AA"), &dna("A")).unwrap();
    let aligned = &result[0].aligned()[0];
    assert_eq!(*aligned.score(), -1);
    assert_eq!(aligned.second().to_string(), "-A");
    assert_eq!(aligned.rle(), "1^1=");
    assert_eq!((*aligned.first_offset(), *aligned.second_offset()), (0, 1));
    assert_eq!(*aligned.insertions(), [0, 1]);
}

#[test]
fn test_gap_ties_skip_the_second_sequence_first() {
    let aligner = aligner(Policy::Global, 1, -3, -1, -1);
    for result in [
        aligner.align_simple(&dna("A"), &dna("T")).unwrap(),
        aligner.align(&dna("A"), &dna("T")).unwrap(),
    ] {
        let aligned = &result[0].aligned()[0];
        assert_eq!(*aligned.score(), -2);
        assert_eq!(aligned.first().to_string(), "A-");
        assert_eq!(aligned.second().to_string(), "-T");
        assert_eq!(aligned.rle(), "1^1v");
    }

    let result = aligner.align_simple(&dna("GA"), &dna("GT")).unwrap();
    let aligned = &result[0].aligned()[0];
    assert_eq!(aligned.first().to_string(), "GA-");
    assert_eq!(aligned.second().to_string(), "G-T");
}

#[test]
fn test_custom_matrix() {
    let matrix: SimilarityMatrix = "# purines and pyrimidines\nTransitions\nDNA\nA C G T\n2 -1 1 -1\n-1 2 -1 1\n1 -1 2 -1\n-1 1 -1 2\n"
        .parse()
        .unwrap();
    let aligner = Aligner::builder().with_similarity_matrix(matrix).build();

    let result = aligner.align(&dna("AGCT"), &dna("GATC")).unwrap();
    let aligned = &result[0].aligned()[0];
    assert_eq!(*aligned.score(), 4);
    assert_eq!(aligned.rle(), "4~");
    assert_eq!(
        aligned.consensus().as_ref().map(|x| x.to_string()),
        Some("RRYY".to_string())
    );
    assert_eq!(aligned.first().id(), "");
}
