use seqweave_core_rs::alphabet::DNA;
use seqweave_core_rs::seq::{SequenceView, SparseSequence};
use seqweave_core_rs::SeqError;

#[test]
fn test_inserted_symbols_are_found() {
    let mut seq = SparseSequence::with_len(&DNA, 2000);
    let positions = [17, 503, 1220, 1999];
    let symbols = ['A', 'C', 'G', 'T'];

    for (position, symbol) in positions.iter().zip(symbols) {
        seq.insert_symbol(*position, symbol).unwrap();
    }
    assert_eq!(seq.len(), 2004);
    assert_eq!(seq.known_count(), 4);

    for (position, symbol) in positions.iter().zip(symbols) {
        let item = DNA.item(symbol).unwrap();
        assert!(seq.contains(item));
        assert_eq!(seq.index_of(item), Some(*position));
        assert_eq!(seq.get(*position).unwrap(), Some(item));
    }
    assert_eq!(seq.get(0).unwrap(), None);
    assert!(!seq.contains(DNA.item('N').unwrap()));
}

#[test]
fn test_placed_symbols_keep_length() {
    let mut seq = SparseSequence::with_len(&DNA, 2000);
    let positions = [1500, 3, 999, 42];
    for (position, symbol) in positions.iter().zip(['A', 'C', 'G', 'T']) {
        seq.set(*position, Some(DNA.item(symbol).unwrap())).unwrap();
    }
    assert_eq!(seq.len(), 2000);
    assert_eq!(seq.first_known_index(), Some(3));
    assert_eq!(seq.last_known_index(), Some(1500));
    assert_eq!(seq.index_of(DNA.item('A').unwrap()), Some(1500));
    assert!(matches!(seq.symbols(), Err(SeqError::InvalidArgument(_))));

    assert!(matches!(
        seq.get(2000),
        Err(SeqError::OutOfRange { .. })
    ));
}
