use crate::alphabet::{PROTEIN, RNA};
use crate::error::{Result, SeqError};
use crate::seq::{Sequence, SequenceView};

use super::codons;

/// Translates an RNA sequence codon by codon, starting at `offset`.
///
/// Trailing bases that do not fill a codon are ignored. Stop codons are emitted as `*`.
pub fn translate(rna: &Sequence, offset: usize) -> Result<Sequence> {
    if rna.alphabet() != &RNA {
        return Err(SeqError::invalid(format!(
            "translation requires an RNA sequence, got {}",
            rna.alphabet()
        )));
    }
    if offset > rna.len() {
        return Err(SeqError::out_of_range("offset", offset, rna.len()));
    }

    let items = rna.items()[offset..]
        .chunks_exact(3)
        .map(|codon| codons::lookup_triplet(codon[0], codon[1], codon[2]))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Translated {} codons of '{}' from offset {}",
        items.len(),
        rna.id(),
        offset
    );
    Ok(Sequence::from_parts(&PROTEIN, items).with_metadata_of(rna))
}
