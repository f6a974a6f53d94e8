use crate::alphabet::{SequenceItem, PROTEIN, RNA};
use crate::error::{Result, SeqError};
use crate::seq::{Sequence, SequenceView};

// Standard genetic code. Bases are ordered U, C, A, G and the table index is 16 * b1 + 4 * b2 + b3.
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

fn base_index(item: &SequenceItem) -> Result<usize> {
    if !RNA.contains(item) {
        return Err(SeqError::invalid(format!(
            "codon bases must be RNA nucleotides, got '{}' ({})",
            item.symbol(),
            item.molecule()
        )));
    }
    match item.byte() {
        b'U' => Ok(0),
        b'C' => Ok(1),
        b'A' => Ok(2),
        b'G' => Ok(3),
        _ => Err(SeqError::invalid(format!(
            "no amino acid for the non-canonical base '{}'",
            item.symbol()
        ))),
    }
}

/// Amino acid encoded by the codon `n1 n2 n3`
pub fn lookup_triplet(
    n1: &SequenceItem,
    n2: &SequenceItem,
    n3: &SequenceItem,
) -> Result<&'static SequenceItem> {
    let index = 16 * base_index(n1)? + 4 * base_index(n2)? + base_index(n3)?;
    PROTEIN.item(STANDARD_CODE[index] as char)
}

/// Amino acid encoded by the codon starting at `offset` of an RNA sequence
pub fn lookup(rna: &Sequence, offset: usize) -> Result<&'static SequenceItem> {
    if rna.alphabet() != &RNA {
        return Err(SeqError::invalid(format!(
            "codon lookup requires an RNA sequence, got {}",
            rna.alphabet()
        )));
    }
    if offset + 3 > rna.len() {
        return Err(SeqError::out_of_range("offset", offset, rna.len()));
    }
    let items = rna.items();
    lookup_triplet(items[offset], items[offset + 1], items[offset + 2])
}

/// Looks up a codon written as text, e.g. `"AUG"`
pub fn lookup_symbols(codon: &str) -> Result<&'static SequenceItem> {
    let items = RNA.parse(codon)?;
    match items.as_slice() {
        [n1, n2, n3] => lookup_triplet(n1, n2, n3),
        _ => Err(SeqError::invalid(format!(
            "a codon has exactly 3 bases, got {}",
            items.len()
        ))),
    }
}
