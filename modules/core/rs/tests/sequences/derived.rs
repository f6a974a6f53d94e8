use seqweave_core_rs::alphabet::DNA;
use seqweave_core_rs::seq::{DerivedSequence, Sequence, SequenceView, UpdateType};

fn kinds(seq: &DerivedSequence, kind: UpdateType) -> usize {
    seq.updated_items()
        .iter()
        .filter(|x| x.item.kind == kind)
        .count()
}

#[test]
fn test_remove_range_then_reinsert() {
    let source = Sequence::new(&DNA, "ACGTACGTAC").unwrap();
    let mut seq = DerivedSequence::new(source.clone());

    seq.remove_range(2, 4).unwrap();
    assert_eq!(seq.len(), 6);
    assert_eq!(seq.symbols().unwrap(), "ACGTAC");
    assert_eq!(kinds(&seq, UpdateType::Removed), 4);

    seq.insert_range(2, "GTAC").unwrap();
    assert_eq!(seq.len(), source.len());
    assert_eq!(seq.to_sequence().items(), source.items());
    assert_eq!(kinds(&seq, UpdateType::Removed), 4);
    assert_eq!(kinds(&seq, UpdateType::Inserted), 4);
    assert_eq!(kinds(&seq, UpdateType::Replaced), 0);
}

#[test]
fn test_insertions_cancel_on_removal() {
    let source = Sequence::new(&DNA, "ACGT").unwrap();
    let mut seq = DerivedSequence::new(source);

    seq.insert_range(1, "TTT").unwrap();
    assert_eq!(seq.symbols().unwrap(), "ATTTCGT");
    seq.remove_range(1, 3).unwrap();
    assert_eq!(seq.symbols().unwrap(), "ACGT");
    assert!(seq.updated_items().is_empty());
}

#[test]
fn test_source_is_untouched() {
    let source = Sequence::new(&DNA, "ACGT").unwrap();
    let mut seq = DerivedSequence::new(source.clone());
    seq.replace_symbol(0, 'T').unwrap();
    seq.push(DNA.item('A').unwrap()).unwrap();
    seq.remove_at(1).unwrap();

    assert_eq!(seq.symbols().unwrap(), "TGTA");
    assert_eq!(seq.source().symbols().unwrap(), "ACGT");
    assert_eq!(source.symbols().unwrap(), "ACGT");
}
