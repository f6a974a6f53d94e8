use crate::alphabet::{Alphabet, DNA, RNA};
use crate::error::{Result, SeqError};
use crate::seq::{Sequence, SequenceView};

fn convert(
    seq: &Sequence,
    from: &'static Alphabet,
    to: &'static Alphabet,
    swap: (u8, u8),
) -> Result<Sequence> {
    if seq.alphabet() != from {
        return Err(SeqError::invalid(format!(
            "expected a {from} sequence, got {}",
            seq.alphabet()
        )));
    }
    let items = seq
        .iter()
        .map(|x| {
            let symbol = if x.byte() == swap.0 { swap.1 } else { x.byte() };
            to.item(symbol as char)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Sequence::from_parts(to, items).with_metadata_of(seq))
}

/// DNA to RNA: every `T` becomes `U`, other symbols are carried over.
pub fn transcribe(dna: &Sequence) -> Result<Sequence> {
    convert(dna, &DNA, &RNA, (b'T', b'U'))
}

/// RNA to DNA: every `U` becomes `T`.
pub fn reverse_transcribe(rna: &Sequence) -> Result<Sequence> {
    convert(rna, &RNA, &DNA, (b'U', b'T'))
}
