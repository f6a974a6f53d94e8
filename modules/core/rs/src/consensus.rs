use ahash::HashMap;

use crate::alphabet::{Alphabet, SequenceItem};
use crate::error::{Result, SeqError};

/// Resolves a column of aligned items into a single consensus item.
///
/// Gaps are ignored. An ambiguous item spreads one unit of weight evenly over its basic symbols.
/// Symbols whose share of the column exceeds `threshold` percent are folded into the alphabet's
/// consensus symbol; when none qualifies, every observed symbol is folded instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleConsensusResolver {
    alphabet: &'static Alphabet,
    threshold: f64,
}

impl SimpleConsensusResolver {
    pub const DEFAULT_THRESHOLD: f64 = 99.0;

    pub fn new(alphabet: &'static Alphabet) -> Self {
        Self::with_threshold(alphabet, Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(alphabet: &'static Alphabet, threshold: f64) -> Self {
        Self { alphabet, threshold }
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn consensus(&self, items: &[&SequenceItem]) -> Result<&'static SequenceItem> {
        if items.is_empty() {
            return Err(SeqError::Empty { param: "items" });
        }

        let mut frequency: HashMap<u8, f64> = HashMap::default();
        let mut total = 0usize;
        for item in items {
            let item = self.alphabet.resolve(item)?;
            if item.is_gap() {
                continue;
            }
            total += 1;
            if item.is_ambiguous() {
                let basics = self.alphabet.basic_symbols(item);
                let weight = 1.0 / basics.len() as f64;
                for basic in basics {
                    *frequency.entry(basic.byte()).or_default() += weight;
                }
            } else {
                *frequency.entry(item.byte()).or_default() += 1.0;
            }
        }

        if total == 0 {
            return self.alphabet.gap().ok_or_else(|| {
                SeqError::invalid(format!("the {} alphabet has no gap symbol", self.alphabet))
            });
        }

        let mut selected: Vec<u8> = frequency
            .iter()
            .filter(|(_, count)| *count * 100.0 / total as f64 > self.threshold)
            .map(|(symbol, _)| *symbol)
            .collect();
        if selected.is_empty() {
            selected = frequency.keys().copied().collect();
        }
        selected.sort_unstable();

        let selected = selected
            .into_iter()
            .map(|x| self.alphabet.item(x as char))
            .collect::<Result<Vec<_>>>()?;
        self.alphabet.consensus_symbol(&selected).ok_or_else(|| {
            SeqError::invalid(format!(
                "the {} alphabet has no symbol covering the column",
                self.alphabet
            ))
        })
    }
}
