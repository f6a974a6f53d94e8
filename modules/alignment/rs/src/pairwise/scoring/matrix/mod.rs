use std::fmt::{Display, Formatter};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use eyre::{bail, ensure, eyre, Report, Result, WrapErr};
use itertools::Itertools;
use seqweave_core_rs::alphabet::{Alphabet, MoleculeType};
use seqweave_core_rs::seq::SequenceView;

pub use standard::StandardMatrix;

use super::{equiv, symbols};

mod parser;
mod standard;

/// How pair scores are stored
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Row-major symbol x symbol table
    Table(Vec<i32>),
    /// One score for identical symbols, another for everything else
    Diagonal { matching: i32, mismatching: i32 },
}

/// Symmetric symbol-pair scores over (a subset of) one alphabet.
///
/// The engine works on encoded sequences: every symbol is replaced by its row index in the matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimilarityMatrix {
    name: String,
    molecule: MoleculeType,
    symbols: Vec<char>,
    encoding: [Option<u8>; 128],
    kind: Kind,
}

impl SimilarityMatrix {
    fn new(
        name: impl Into<String>,
        molecule: MoleculeType,
        symbols: &[char],
        kind: Kind,
    ) -> Result<Self> {
        let name = name.into();
        let alphabet = Alphabet::for_molecule(molecule);
        ensure!(
            symbols.len() < u8::MAX as usize,
            "Similarity matrix {name} has too many symbols: {}",
            symbols.len()
        );

        let mut canonical = Vec::with_capacity(symbols.len());
        let mut encoding = [None; 128];
        for (ind, symbol) in symbols.iter().enumerate() {
            let item = alphabet.item(*symbol)?;
            let slot = &mut encoding[item.byte() as usize];
            if slot.is_some() {
                bail!("Symbol '{}' is listed twice in the similarity matrix {name}", item.symbol());
            }
            *slot = Some(ind as u8);
            encoding[item.byte().to_ascii_lowercase() as usize] = Some(ind as u8);
            canonical.push(item.symbol());
        }

        if let Kind::Table(scores) = &kind {
            let size = canonical.len();
            ensure!(
                scores.len() == size * size,
                "Similarity matrix {name} must hold {} scores, got {}",
                size * size,
                scores.len()
            );
            for (row, col) in (0..size).tuple_combinations() {
                let (forward, backward) = (scores[row * size + col], scores[col * size + row]);
                if forward != backward {
                    bail!(
                        "Similarity matrix {name} is not symmetric: {}/{} scores {forward}, {}/{} scores {backward}",
                        canonical[row],
                        canonical[col],
                        canonical[col],
                        canonical[row]
                    );
                }
            }
        }

        Ok(Self {
            name,
            molecule,
            symbols: canonical,
            encoding,
            kind,
        })
    }

    /// Scores `matching` for identical symbols and `mismatching` otherwise, over every non-gap
    /// symbol of the molecule's alphabet.
    pub fn diagonal(molecule: MoleculeType, matching: i32, mismatching: i32) -> Self {
        let mut encoding = [None; 128];
        let mut symbols = Vec::new();
        let items = Alphabet::for_molecule(molecule)
            .items()
            .iter()
            .filter(|x| !x.is_gap());
        for (ind, item) in items.enumerate() {
            encoding[item.byte() as usize] = Some(ind as u8);
            encoding[item.byte().to_ascii_lowercase() as usize] = Some(ind as u8);
            symbols.push(item.symbol());
        }
        Self {
            name: "Diagonal".to_string(),
            molecule,
            symbols,
            encoding,
            kind: Kind::Diagonal {
                matching,
                mismatching,
            },
        }
    }

    pub fn standard(matrix: StandardMatrix) -> Result<Self> {
        parser::parse(matrix.text()).wrap_err_with(|| format!("Failed to load {matrix}"))
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .wrap_err("Failed to read the similarity matrix")?;
        parser::parse(&text)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read the similarity matrix from {}", path.display()))?;
        parser::parse(&text).wrap_err_with(|| format!("Invalid similarity matrix in {}", path.display()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn molecule(&self) -> MoleculeType {
        self.molecule
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Matrix symbols in row order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Row index of `symbol`, case-insensitive
    #[inline(always)]
    pub fn encode_symbol(&self, symbol: char) -> Option<u8> {
        if symbol.is_ascii() {
            self.encoding[symbol as usize]
        } else {
            None
        }
    }

    pub fn score(&self, a: char, b: char) -> Option<i32> {
        Some(self.score_encoded(self.encode_symbol(a)?, self.encode_symbol(b)?))
    }

    #[inline(always)]
    pub fn score_encoded(&self, a: u8, b: u8) -> i32 {
        match &self.kind {
            Kind::Table(scores) => scores[a as usize * self.symbols.len() + b as usize],
            Kind::Diagonal {
                matching,
                mismatching,
            } => {
                if a == b {
                    *matching
                } else {
                    *mismatching
                }
            }
        }
    }

    /// True if `seq` is of the matrix molecule type and every residue has a row in the matrix
    pub fn validate(&self, seq: &(impl SequenceView + ?Sized)) -> bool {
        seq.alphabet().molecule() == self.molecule
            && (0..seq.len()).all(|pos| {
                matches!(seq.get(pos), Ok(Some(item)) if self.encode_symbol(item.symbol()).is_some())
            })
    }

    pub fn encode(&self, seq: &(impl SequenceView + ?Sized)) -> Result<Vec<u8>> {
        let mut encoded = Vec::with_capacity(seq.len());
        for pos in 0..seq.len() {
            let item = seq
                .get(pos)?
                .ok_or_else(|| eyre!("Position {pos} of the sequence holds no item"))?;
            let symbol = self.encode_symbol(item.symbol()).ok_or_else(|| {
                eyre!(
                    "Symbol '{}' at position {pos} is not covered by the similarity matrix {}",
                    item.symbol(),
                    self.name
                )
            })?;
            encoded.push(symbol);
        }
        Ok(encoded)
    }
}

impl Display for SimilarityMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.molecule)?;
        writeln!(f, "{}", self.symbols.iter().join(" "))?;
        for (row, symbol) in self.symbols.iter().enumerate() {
            let scores = (0..self.symbols.len()).map(|col| self.score_encoded(row as u8, col as u8));
            writeln!(f, "{symbol} {}", scores.format(" "))?;
        }
        Ok(())
    }
}

impl FromStr for SimilarityMatrix {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl symbols::PosInvariantScorer for SimilarityMatrix {
    type SymScore = i32;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore {
        self.score_encoded(*s1, *s2)
    }
}

impl equiv::Classifier for SimilarityMatrix {
    type Symbol = u8;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> equiv::Type {
        if s1 == s2 {
            equiv::Type::Match
        } else if self.score_encoded(*s1, *s2) > 0 {
            equiv::Type::Equivalent
        } else {
            equiv::Type::Mismatch
        }
    }
}
