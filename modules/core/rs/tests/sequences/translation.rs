use seqweave_core_rs::alphabet::{DNA, PROTEIN, RNA};
use seqweave_core_rs::seq::{Sequence, SequenceView};
use seqweave_core_rs::translation::{codons, complementation, protein, transcription};

#[test]
fn test_codon_lookup_after_transcription() {
    let dna = Sequence::new(&DNA, "ATGGCG").unwrap();
    let rna = transcription::transcribe(&dna).unwrap();
    assert_eq!(rna.symbols().unwrap(), "AUGGCG");

    let amino = codons::lookup(&rna, 0).unwrap();
    assert_eq!(amino.name(), "Methionine");
    assert_eq!(amino.short_name(), "Met");
    assert_eq!(amino.symbol(), 'M');
    assert_eq!(codons::lookup(&rna, 3).unwrap().name(), "Alanine");
}

#[test]
fn test_every_codon_translates() {
    let bases = ['U', 'C', 'A', 'G'];
    let mut stops = 0;
    for a in bases {
        for b in bases {
            for c in bases {
                let codon: String = [a, b, c].iter().collect();
                let amino = codons::lookup_symbols(&codon).unwrap();
                assert!(PROTEIN.contains(amino));
                assert!(!amino.is_ambiguous());
                if amino.is_termination() {
                    stops += 1;
                }
            }
        }
    }
    assert_eq!(stops, 3);
}

#[test]
fn test_gene_to_protein() {
    let gene = Sequence::new(&DNA, "CCATGTTTGGGTAAC").unwrap().with_id("orf");
    let rna = transcription::transcribe(&gene).unwrap();
    let peptide = protein::translate(&rna, 2).unwrap();
    assert_eq!(peptide.symbols().unwrap(), "MFG*");
    assert_eq!(peptide.id(), "orf");

    let strand = complementation::reverse_complement(&gene).unwrap();
    assert_eq!(strand.symbols().unwrap(), "GTTACCCAAACATGG");
    assert_eq!(
        complementation::reverse_complement(&strand).unwrap(),
        gene.reverse_complement().unwrap().reverse_complement().unwrap()
    );
    assert!(transcription::reverse_transcribe(&rna).is_ok());
    assert_eq!(rna.alphabet(), &RNA);
}
