use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

use crate::error::{Result, SeqError};

/// The family of biological polymers an alphabet describes
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub enum MoleculeType {
    Dna,
    Rna,
    Protein,
}

impl MoleculeType {
    pub fn name(&self) -> &'static str {
        match self {
            MoleculeType::Dna => "DNA",
            MoleculeType::Rna => "RNA",
            MoleculeType::Protein => "Protein",
        }
    }

    pub fn is_nucleic_acid(&self) -> bool {
        matches!(self, MoleculeType::Dna | MoleculeType::Rna)
    }
}

impl Display for MoleculeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoleculeType {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dna" => Ok(MoleculeType::Dna),
            "rna" => Ok(MoleculeType::Rna),
            "protein" => Ok(MoleculeType::Protein),
            _ => Err(SeqError::invalid(format!("unknown molecule type '{}'", s.trim()))),
        }
    }
}

const GAP: u8 = 0b001;
const AMBIGUOUS: u8 = 0b010;
const TERMINATION: u8 = 0b100;

/// A single alphabet member: nucleotide, amino acid, gap or ambiguity code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SequenceItem {
    symbol: u8,
    name: &'static str,
    short_name: &'static str,
    molecule: MoleculeType,
    flags: u8,
}

impl SequenceItem {
    const fn new(
        symbol: u8,
        short_name: &'static str,
        name: &'static str,
        molecule: MoleculeType,
        flags: u8,
    ) -> Self {
        Self {
            symbol,
            name,
            short_name,
            molecule,
            flags,
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol as char
    }

    pub fn byte(&self) -> u8 {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Three letter code for amino acids, the symbol itself for nucleotides
    pub fn short_name(&self) -> &'static str {
        self.short_name
    }

    pub fn molecule(&self) -> MoleculeType {
        self.molecule
    }

    pub fn is_gap(&self) -> bool {
        self.flags & GAP != 0
    }

    pub fn is_ambiguous(&self) -> bool {
        self.flags & AMBIGUOUS != 0
    }

    pub fn is_termination(&self) -> bool {
        self.flags & TERMINATION != 0
    }
}

impl Display for SequenceItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered set of items with unique symbols plus the expansion of each ambiguity code.
#[derive(Debug)]
pub struct Alphabet {
    name: &'static str,
    molecule: MoleculeType,
    items: &'static [SequenceItem],
    ambiguity: &'static [(u8, &'static [u8])],
    any: u8,
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Alphabet {}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl Alphabet {
    pub fn for_molecule(molecule: MoleculeType) -> &'static Alphabet {
        match molecule {
            MoleculeType::Dna => &DNA,
            MoleculeType::Rna => &RNA,
            MoleculeType::Protein => &PROTEIN,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn molecule(&self) -> MoleculeType {
        self.molecule
    }

    pub fn items(&self) -> &'static [SequenceItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive lookup of a symbol
    pub fn lookup(&self, symbol: char) -> Option<&'static SequenceItem> {
        if !symbol.is_ascii() {
            return None;
        }
        let symbol = symbol.to_ascii_uppercase() as u8;
        self.items.iter().find(|x| x.symbol == symbol)
    }

    pub fn item(&self, symbol: char) -> Result<&'static SequenceItem> {
        self.lookup(symbol).ok_or(SeqError::InvalidSymbol {
            symbol,
            alphabet: self.name,
        })
    }

    /// Converts every character of `symbols` into an item of this alphabet.
    pub fn parse(&self, symbols: &str) -> Result<Vec<&'static SequenceItem>> {
        symbols.chars().map(|x| self.item(x)).collect()
    }

    pub fn contains(&self, item: &SequenceItem) -> bool {
        item.molecule == self.molecule && self.lookup(item.symbol()).is_some()
    }

    /// Resolves `item` to the canonical instance of this alphabet, failing on foreign items.
    pub fn resolve(&self, item: &SequenceItem) -> Result<&'static SequenceItem> {
        match self.lookup(item.symbol()) {
            Some(x) if item.molecule == self.molecule => Ok(x),
            _ => Err(SeqError::invalid(format!(
                "item '{}' ({}) does not belong to the {} alphabet",
                item.symbol(),
                item.molecule,
                self.name
            ))),
        }
    }

    pub fn gap(&self) -> Option<&'static SequenceItem> {
        self.items.iter().find(|x| x.is_gap())
    }

    /// The least specific ambiguity code (N for nucleotides, X for amino acids)
    pub fn any(&self) -> Option<&'static SequenceItem> {
        self.lookup(self.any as char)
    }

    /// Expands an ambiguity code into the unambiguous items it stands for.
    /// Unambiguous items expand to themselves, gaps expand to nothing.
    pub fn basic_symbols(&self, item: &SequenceItem) -> Vec<&'static SequenceItem> {
        if item.is_gap() {
            return Vec::new();
        }
        if let Some((_, basics)) = self.ambiguity.iter().find(|(x, _)| *x == item.symbol) {
            return basics
                .iter()
                .filter_map(|x| self.lookup(*x as char))
                .collect();
        }
        self.lookup(item.symbol()).into_iter().collect()
    }

    /// Returns the most specific item representing every item in `items`.
    ///
    /// An empty or all-gap input resolves to the gap item.
    pub fn consensus_symbol(&self, items: &[&SequenceItem]) -> Option<&'static SequenceItem> {
        let mut basics: Vec<u8> = items
            .iter()
            .flat_map(|x| self.basic_symbols(x))
            .map(|x| x.symbol)
            .collect();
        basics.sort_unstable();
        basics.dedup();

        match basics.len() {
            0 => self.gap(),
            1 => self.lookup(basics[0] as char),
            _ => self
                .ambiguity
                .iter()
                .filter(|(_, covered)| basics.iter().all(|x| covered.contains(x)))
                .min_by_key(|(_, covered)| covered.len())
                .and_then(|(symbol, _)| self.lookup(*symbol as char))
                .or_else(|| self.any()),
        }
    }
}

const fn nucleotide(symbol: u8, name: &'static str, molecule: MoleculeType) -> SequenceItem {
    let short = match symbol {
        b'A' => "A",
        b'C' => "C",
        b'G' => "G",
        b'T' => "T",
        b'U' => "U",
        b'M' => "M",
        b'R' => "R",
        b'S' => "S",
        b'W' => "W",
        b'Y' => "Y",
        b'K' => "K",
        b'V' => "V",
        b'H' => "H",
        b'D' => "D",
        b'B' => "B",
        b'N' => "N",
        _ => "-",
    };
    let flags = match symbol {
        b'A' | b'C' | b'G' | b'T' | b'U' => 0,
        b'-' => GAP,
        _ => AMBIGUOUS,
    };
    SequenceItem::new(symbol, short, name, molecule, flags)
}

const fn amino(symbol: u8, short: &'static str, name: &'static str, flags: u8) -> SequenceItem {
    SequenceItem::new(symbol, short, name, MoleculeType::Protein, flags)
}

static DNA_ITEMS: [SequenceItem; 16] = [
    nucleotide(b'A', "Adenine", MoleculeType::Dna),
    nucleotide(b'C', "Cytosine", MoleculeType::Dna),
    nucleotide(b'G', "Guanine", MoleculeType::Dna),
    nucleotide(b'T', "Thymine", MoleculeType::Dna),
    nucleotide(b'-', "Gap", MoleculeType::Dna),
    nucleotide(b'M', "Adenine or Cytosine", MoleculeType::Dna),
    nucleotide(b'R', "Guanine or Adenine", MoleculeType::Dna),
    nucleotide(b'S', "Guanine or Cytosine", MoleculeType::Dna),
    nucleotide(b'W', "Adenine or Thymine", MoleculeType::Dna),
    nucleotide(b'Y', "Thymine or Cytosine", MoleculeType::Dna),
    nucleotide(b'K', "Guanine or Thymine", MoleculeType::Dna),
    nucleotide(b'V', "Guanine or Cytosine or Adenine", MoleculeType::Dna),
    nucleotide(b'H', "Adenine or Cytosine or Thymine", MoleculeType::Dna),
    nucleotide(b'D', "Guanine or Adenine or Thymine", MoleculeType::Dna),
    nucleotide(b'B', "Guanine or Thymine or Cytosine", MoleculeType::Dna),
    nucleotide(b'N', "Any", MoleculeType::Dna),
];

static DNA_AMBIGUITY: [(u8, &[u8]); 11] = [
    (b'M', b"AC"),
    (b'R', b"AG"),
    (b'S', b"CG"),
    (b'W', b"AT"),
    (b'Y', b"CT"),
    (b'K', b"GT"),
    (b'V', b"ACG"),
    (b'H', b"ACT"),
    (b'D', b"AGT"),
    (b'B', b"CGT"),
    (b'N', b"ACGT"),
];

static RNA_ITEMS: [SequenceItem; 16] = [
    nucleotide(b'A', "Adenine", MoleculeType::Rna),
    nucleotide(b'C', "Cytosine", MoleculeType::Rna),
    nucleotide(b'G', "Guanine", MoleculeType::Rna),
    nucleotide(b'U', "Uracil", MoleculeType::Rna),
    nucleotide(b'-', "Gap", MoleculeType::Rna),
    nucleotide(b'M', "Adenine or Cytosine", MoleculeType::Rna),
    nucleotide(b'R', "Guanine or Adenine", MoleculeType::Rna),
    nucleotide(b'S', "Guanine or Cytosine", MoleculeType::Rna),
    nucleotide(b'W', "Adenine or Uracil", MoleculeType::Rna),
    nucleotide(b'Y', "Uracil or Cytosine", MoleculeType::Rna),
    nucleotide(b'K', "Guanine or Uracil", MoleculeType::Rna),
    nucleotide(b'V', "Guanine or Cytosine or Adenine", MoleculeType::Rna),
    nucleotide(b'H', "Adenine or Cytosine or Uracil", MoleculeType::Rna),
    nucleotide(b'D', "Guanine or Adenine or Uracil", MoleculeType::Rna),
    nucleotide(b'B', "Guanine or Uracil or Cytosine", MoleculeType::Rna),
    nucleotide(b'N', "Any", MoleculeType::Rna),
];

static RNA_AMBIGUITY: [(u8, &[u8]); 11] = [
    (b'M', b"AC"),
    (b'R', b"AG"),
    (b'S', b"CG"),
    (b'W', b"AU"),
    (b'Y', b"CU"),
    (b'K', b"GU"),
    (b'V', b"ACG"),
    (b'H', b"ACU"),
    (b'D', b"AGU"),
    (b'B', b"CGU"),
    (b'N', b"ACGU"),
];

static PROTEIN_ITEMS: [SequenceItem; 28] = [
    amino(b'A', "Ala", "Alanine", 0),
    amino(b'B', "Asx", "Aspartic Acid or Asparagine", AMBIGUOUS),
    amino(b'C', "Cys", "Cysteine", 0),
    amino(b'D', "Asp", "Aspartic Acid", 0),
    amino(b'E', "Glu", "Glutamic Acid", 0),
    amino(b'F', "Phe", "Phenylalanine", 0),
    amino(b'G', "Gly", "Glycine", 0),
    amino(b'H', "His", "Histidine", 0),
    amino(b'I', "Ile", "Isoleucine", 0),
    amino(b'J', "Xle", "Leucine or Isoleucine", AMBIGUOUS),
    amino(b'K', "Lys", "Lysine", 0),
    amino(b'L', "Leu", "Leucine", 0),
    amino(b'M', "Met", "Methionine", 0),
    amino(b'N', "Asn", "Asparagine", 0),
    amino(b'O', "Pyl", "Pyrrolysine", 0),
    amino(b'P', "Pro", "Proline", 0),
    amino(b'Q', "Gln", "Glutamine", 0),
    amino(b'R', "Arg", "Arginine", 0),
    amino(b'S', "Ser", "Serine", 0),
    amino(b'T', "Thr", "Threonine", 0),
    amino(b'U', "Sec", "Selenocysteine", 0),
    amino(b'V', "Val", "Valine", 0),
    amino(b'W', "Trp", "Tryptophan", 0),
    amino(b'Y', "Tyr", "Tyrosine", 0),
    amino(b'Z', "Glx", "Glutamic Acid or Glutamine", AMBIGUOUS),
    amino(b'X', "Xxx", "Undetermined", AMBIGUOUS),
    amino(b'*', "Ter", "Termination", TERMINATION),
    amino(b'-', "---", "Gap", GAP),
];

static PROTEIN_AMBIGUITY: [(u8, &[u8]); 4] = [
    (b'B', b"DN"),
    (b'Z', b"EQ"),
    (b'J', b"IL"),
    (b'X', b"ACDEFGHIKLMNOPQRSTUVWY"),
];

pub static DNA: Alphabet = Alphabet {
    name: "DNA",
    molecule: MoleculeType::Dna,
    items: &DNA_ITEMS,
    ambiguity: &DNA_AMBIGUITY,
    any: b'N',
};

pub static RNA: Alphabet = Alphabet {
    name: "RNA",
    molecule: MoleculeType::Rna,
    items: &RNA_ITEMS,
    ambiguity: &RNA_AMBIGUITY,
    any: b'N',
};

pub static PROTEIN: Alphabet = Alphabet {
    name: "Protein",
    molecule: MoleculeType::Protein,
    items: &PROTEIN_ITEMS,
    ambiguity: &PROTEIN_AMBIGUITY,
    any: b'X',
};
