use seqweave_alignment_rs::Policy;

use super::*;

#[test]
fn test_no_gaps() {
    let aligner = aligner(Policy::Local, 1, -2, -5, -1);
    let workload = vec![
        Workload {
            seq1: "AAGAA",
            seq2: "AGA",
            score: 3,
            hits: vec![("AGA", "AGA")],
        },
        Workload {
            seq1: "AGTCCCGTGTCCCAGGGG",
            seq2: "AGTC",
            score: 4,
            hits: vec![("AGTC", "AGTC")],
        },
        Workload {
            seq1: "CGCGCGCGTTT",
            seq2: "CGTTT",
            score: 5,
            hits: vec![("CGTTT", "CGTTT")],
        },
        Workload {
            seq1: "AAAGGGAGGGTTTA",
            seq2: "GGGGGGG",
            score: 4,
            hits: vec![("GGGAGGG", "GGGGGGG")],
        },
        Workload {
            seq1: "AAAA",
            seq2: "CCCC",
            score: 0,
            hits: vec![],
        },
    ];
    for w in workload {
        ensure(&aligner, w);
    }
}

#[test]
fn test_affine_gaps() {
    let aligner = aligner(Policy::Local, 1, -2, -5, -1);
    let seq1 = format!("{}{}{}", "A".repeat(16), "C".repeat(9), "A".repeat(16));
    let seq2 = "A".repeat(32);
    let gapped = format!("{}{}{}", "A".repeat(16), "-".repeat(9), "A".repeat(16));
    ensure(
        &aligner,
        Workload {
            seq1: &seq1,
            seq2: &seq2,
            score: 19,
            hits: vec![(&seq1, &gapped)],
        },
    );

    let result = aligner.align(&dna(&seq1), &dna(&seq2)).unwrap();
    assert_eq!(result[0].aligned()[0].rle(), "16=9^16=");
}

#[test]
fn test_cheap_gaps() {
    let aligner = aligner(Policy::Local, 1, -2, -1, -1);
    let seq1 = "ACCCAAAAAAAACCCAAAAAAAACCCA";
    let seq2 = "A".repeat(16);
    ensure(
        &aligner,
        Workload {
            seq1,
            seq2: &seq2,
            score: 13,
            hits: vec![("AAAAAAAACCCAAAAAAAA", "AAAAAAAA---AAAAAAAA")],
        },
    );

    let result = aligner.align_simple(&dna(seq1), &dna(&seq2)).unwrap();
    let aligned = &result[0].aligned()[0];
    assert_eq!(*aligned.start_offsets(), [4, 0]);
    assert_eq!(*aligned.end_offsets(), [22, 15]);
    assert_eq!((*aligned.first_offset(), *aligned.second_offset()), (0, 4));
    assert_eq!(*aligned.insertions(), [0, 3]);
}

#[test]
fn test_ties_in_fill_order() {
    let aligner = aligner(Policy::Local, 1, -2, -5, -1);
    ensure(
        &aligner,
        Workload {
            seq1: "ACTTAC",
            seq2: "AC",
            score: 2,
            hits: vec![("AC", "AC"), ("AC", "AC")],
        },
    );

    let result = aligner.align(&dna("ACTTAC"), &dna("AC")).unwrap();
    let starts: Vec<_> = result[0].iter().map(|x| *x.start_offsets()).collect();
    assert_eq!(starts, vec![[0, 0], [4, 0]]);
    let offsets: Vec<_> = result[0]
        .iter()
        .map(|x| (*x.first_offset(), *x.second_offset()))
        .collect();
    assert_eq!(offsets, vec![(0, 0), (0, 4)]);

    // Cells are visited row by row over the second sequence
    ensure(
        &aligner,
        Workload {
            seq1: "GCA",
            seq2: "ACG",
            score: 1,
            hits: vec![("A", "A"), ("C", "C"), ("G", "G")],
        },
    );
    let result = aligner.align(&dna("GCA"), &dna("ACG")).unwrap();
    let starts: Vec<_> = result[0].iter().map(|x| *x.start_offsets()).collect();
    assert_eq!(starts, vec![[2, 0], [1, 1], [0, 2]]);
}

#[test]
fn test_scores_are_positive() {
    let aligner = aligner(Policy::Local, 1, -1, -8, -1);
    let pairs = [("GATTACA", "TTAC"), ("CCCCC", "GCG"), ("ACGTACGT", "TTGCA")];
    for (seq1, seq2) in pairs {
        let result = aligner.align(&dna(seq1), &dna(seq2)).unwrap();
        for aligned in result.iter().flat_map(|x| x.iter()) {
            assert!(*aligned.score() > 0);
            assert_eq!(*aligned.score(), rescore(aligned, 1, -1, -8, -1));
            assert!(aligned.first().to_string().len() <= seq1.len() + seq2.len());
        }
    }
}

#[test]
fn test_simple_equals_affine_with_equal_costs() {
    let aligner = aligner(Policy::Local, 1, -1, -2, -2);
    let pairs = [
        ("TTTTACGTACTTT", "GGACGTACGG"),
        ("ACCCAAAAAAAACCCA", "AAAAAAAAAA"),
        ("ACTTAC", "AC"),
        ("AAAA", "CCCC"),
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
    let aligner = aligner(Policy::Local, 1, -1, -2, -1);
    let (seq1, seq2) = (dna("ACGGTACCAGTACGGT"), dna("AGGTTACATACG"));
    let expected = aligner.align(&seq1, &seq2).unwrap();
    assert!(!expected.is_empty());
    for _ in 0..5 {
        assert_eq!(aligner.align(&seq1, &seq2).unwrap(), expected);
    }
}
