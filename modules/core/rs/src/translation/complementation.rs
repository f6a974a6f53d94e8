use crate::alphabet::SequenceItem;
use crate::error::{Result, SeqError};
use crate::seq::{Sequence, SequenceView};

fn pair(symbol: u8, uracil: bool) -> u8 {
    match symbol {
        b'A' if uracil => b'U',
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'M' => b'K',
        b'K' => b'M',
        b'R' => b'Y',
        b'Y' => b'R',
        b'V' => b'B',
        b'B' => b'V',
        b'H' => b'D',
        b'D' => b'H',
        // S, W, N and the gap are their own complements
        other => other,
    }
}

fn complement_items<'a>(
    seq: &'a Sequence,
    items: impl Iterator<Item = &'static SequenceItem> + 'a,
) -> Result<Vec<&'static SequenceItem>> {
    let alphabet = seq.alphabet();
    if !alphabet.molecule().is_nucleic_acid() {
        return Err(SeqError::invalid(format!(
            "complement is defined for nucleic acids only, got {alphabet}"
        )));
    }
    let uracil = alphabet.lookup('U').is_some();
    items
        .map(|x| alphabet.item(pair(x.byte(), uracil) as char))
        .collect()
}

/// Base-pairing complement of a DNA or RNA sequence, ambiguity codes included
pub fn complement(seq: &Sequence) -> Result<Sequence> {
    let items = complement_items(seq, seq.iter())?;
    Ok(Sequence::from_parts(seq.alphabet(), items).with_metadata_of(seq))
}

pub fn reverse(seq: &Sequence) -> Sequence {
    let items = seq.iter().rev().collect();
    Sequence::from_parts(seq.alphabet(), items).with_metadata_of(seq)
}

pub fn reverse_complement(seq: &Sequence) -> Result<Sequence> {
    let items = complement_items(seq, seq.iter().rev())?;
    Ok(Sequence::from_parts(seq.alphabet(), items).with_metadata_of(seq))
}
