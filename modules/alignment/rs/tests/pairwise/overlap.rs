use seqweave_alignment_rs::Policy;

use super::*;

#[test]
fn test_workloads() {
    let aligner = aligner(Policy::Overlap, 1, -1, -8, -1);
    let workload = vec![
        Workload {
            seq1: "GGGGACGT",
            seq2: "ACGTCCCC",
            score: 4,
            hits: vec![("ACGT", "ACGT")],
        },
        Workload {
            seq1: "TTACGTT",
            seq2: "ACG",
            score: 3,
            hits: vec![("ACG", "ACG")],
        },
        Workload {
            seq1: "AC",
            seq2: "CA",
            score: 1,
            hits: vec![("C", "C"), ("A", "A")],
        },
    ];
    for w in workload {
        ensure(&aligner, w);
    }
}

#[test]
fn test_offsets() {
    let aligner = aligner(Policy::Overlap, 1, -1, -8, -1);
    let result = aligner.align(&dna("GGGGACGT"), &dna("ACGTCCCC")).unwrap();
    let aligned = &result[0].aligned()[0];
    assert_eq!((*aligned.first_offset(), *aligned.second_offset()), (0, 4));
    assert_eq!(*aligned.start_offsets(), [4, 0]);
    assert_eq!(*aligned.end_offsets(), [7, 3]);
    assert_eq!(*aligned.insertions(), [0, 0]);
    assert_eq!(
        aligned.consensus().as_ref().map(|x| x.to_string()),
        Some("ACGT".to_string())
    );

    let result = aligner.align(&dna("AC"), &dna("CA")).unwrap();
    let offsets: Vec<_> = result[0]
        .iter()
        .map(|x| (*x.first_offset(), *x.second_offset()))
        .collect();
    assert_eq!(offsets, vec![(0, 1), (1, 0)]);
}

#[test]
fn test_list_arguments() {
    let aligner = aligner(Policy::Overlap, 1, -1, -8, -1);
    let sequences = vec![dna("GGGGACGT"), dna("ACGTCCCC")];
    assert_eq!(
        aligner.align_list(&sequences).unwrap(),
        aligner.align(&sequences[0], &sequences[1]).unwrap()
    );

    let err = aligner.align_simple_list(&sequences[..1]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<seqweave_core_rs::SeqError>(),
        Some(seqweave_core_rs::SeqError::InvalidArgument(_))
    ));
}

#[test]
fn test_simple_equals_affine_with_equal_costs() {
    let aligner = aligner(Policy::Overlap, 1, -1, -3, -3);
    let pairs = [
        ("GGGGACGT", "ACGTCCCC"),
        ("TTACGTT", "ACG"),
        ("AC", "CA"),
        ("ACGTTTACGA", "TTTACGAGGA"),
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
    let aligner = aligner(Policy::Overlap, 1, -1, -2, -1);
    let (seq1, seq2) = (dna("CCGATTACAGG"), dna("TACAGGTTCC"));
    let expected = aligner.align(&seq1, &seq2).unwrap();
    assert!(!expected.is_empty());
    for _ in 0..5 {
        assert_eq!(aligner.align(&seq1, &seq2).unwrap(), expected);
    }
}
