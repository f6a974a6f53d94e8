use std::fmt::{Display, Formatter};

use crate::alphabet::{Alphabet, MoleculeType, SequenceItem};
use crate::error::{check_index, check_range, Result, SeqError};
use crate::translation::complementation;

use super::{check_insertion, copy_into, parse_block, SequenceStatistics, SequenceView};

/// A dense, alphabet-validated biological sequence.
///
/// Sequences built from text are read-only; [`Sequence::empty`] creates a writable one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    id: String,
    display_id: String,
    documentation: Option<String>,
    alphabet: &'static Alphabet,
    molecule_type: MoleculeType,
    items: Vec<&'static SequenceItem>,
    read_only: bool,
}

impl Sequence {
    /// Parses `symbols` against `alphabet`; every character must be part of the alphabet.
    pub fn new(alphabet: &'static Alphabet, symbols: &str) -> Result<Self> {
        let items = alphabet.parse(symbols)?;
        let mut seq = Self::from_parts(alphabet, items);
        seq.read_only = true;
        Ok(seq)
    }

    pub fn empty(alphabet: &'static Alphabet) -> Self {
        Self::from_parts(alphabet, Vec::new())
    }

    /// Builds a writable sequence from items, resolving each one against `alphabet`.
    pub fn from_items<'a>(
        alphabet: &'static Alphabet,
        items: impl IntoIterator<Item = &'a SequenceItem>,
    ) -> Result<Self> {
        let items = items
            .into_iter()
            .map(|x| alphabet.resolve(x))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(alphabet, items))
    }

    /// Dense copy of any sequence view with the same identity and read-only flag.
    ///
    /// Fails for views without content and for positions that hold no item.
    pub fn from_view<V: SequenceView + ?Sized>(view: &V) -> Result<Self> {
        let symbols = view.symbols()?;
        let mut seq = Self::from_parts(view.alphabet(), view.alphabet().parse(&symbols)?);
        seq.id = view.id().to_string();
        seq.display_id = view.display_id().to_string();
        seq.documentation = view.documentation().map(str::to_string);
        seq.molecule_type = view.molecule_type();
        seq.read_only = view.is_read_only();
        Ok(seq)
    }

    pub(crate) fn from_parts(alphabet: &'static Alphabet, items: Vec<&'static SequenceItem>) -> Self {
        Self {
            id: String::new(),
            display_id: String::new(),
            documentation: None,
            alphabet,
            molecule_type: alphabet.molecule(),
            items,
            read_only: false,
        }
    }

    /// Copies identity metadata from `other`
    pub(crate) fn with_metadata_of(mut self, other: &Sequence) -> Self {
        self.id.clone_from(&other.id);
        self.display_id.clone_from(&other.display_id);
        self.documentation.clone_from(&other.documentation);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        if self.display_id.is_empty() {
            self.display_id.clone_from(&self.id);
        }
        self
    }

    pub fn with_display_id(mut self, display_id: impl Into<String>) -> Self {
        self.display_id = display_id.into();
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_display_id(&mut self, display_id: impl Into<String>) {
        self.display_id = display_id.into();
    }

    pub fn set_documentation(&mut self, documentation: Option<String>) {
        self.documentation = documentation;
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn items(&self) -> &[&'static SequenceItem] {
        &self.items
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'static SequenceItem> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    pub fn item(&self, index: usize) -> Result<&'static SequenceItem> {
        check_index("index", index, self.items.len())?;
        Ok(self.items[index])
    }

    /// Raw symbol bytes
    pub fn bytes(&self) -> Vec<u8> {
        self.items.iter().map(|x| x.byte()).collect()
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            Err(SeqError::ReadOnly)
        } else {
            Ok(())
        }
    }

    pub fn push(&mut self, item: &SequenceItem) -> Result<()> {
        self.ensure_writable()?;
        let item = self.alphabet.resolve(item)?;
        self.items.push(item);
        Ok(())
    }

    pub fn insert(&mut self, index: usize, item: &SequenceItem) -> Result<()> {
        self.ensure_writable()?;
        check_insertion(index, self.items.len())?;
        let item = self.alphabet.resolve(item)?;
        self.items.insert(index, item);
        Ok(())
    }

    pub fn insert_symbol(&mut self, index: usize, symbol: char) -> Result<()> {
        let item = self.alphabet.item(symbol)?;
        self.insert(index, item)
    }

    pub fn insert_range(&mut self, index: usize, symbols: &str) -> Result<()> {
        self.ensure_writable()?;
        check_insertion(index, self.items.len())?;
        let items = parse_block(self.alphabet, symbols)?;
        self.items.splice(index..index, items);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        self.ensure_writable()?;
        check_index("index", index, self.items.len())?;
        self.items.remove(index);
        Ok(())
    }

    pub fn remove_range(&mut self, start: usize, length: usize) -> Result<()> {
        self.ensure_writable()?;
        check_range(start, length, self.items.len())?;
        self.items.drain(start..start + length);
        Ok(())
    }

    /// Removes the first occurrence of `item`; returns false if it is absent.
    pub fn remove(&mut self, item: &SequenceItem) -> Result<bool> {
        self.ensure_writable()?;
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn replace(&mut self, index: usize, item: &SequenceItem) -> Result<()> {
        self.ensure_writable()?;
        check_index("index", index, self.items.len())?;
        self.items[index] = self.alphabet.resolve(item)?;
        Ok(())
    }

    pub fn replace_symbol(&mut self, index: usize, symbol: char) -> Result<()> {
        let item = self.alphabet.item(symbol)?;
        self.replace(index, item)
    }

    pub fn replace_range(&mut self, start: usize, symbols: &str) -> Result<()> {
        self.ensure_writable()?;
        check_index("start", start, self.items.len())?;
        let items = parse_block(self.alphabet, symbols)?;
        check_range(start, items.len(), self.items.len())?;
        self.items[start..start + items.len()].copy_from_slice(&items);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ensure_writable()?;
        self.items.clear();
        Ok(())
    }

    /// An independent, writable copy of `[start, start + length)`
    pub fn range(&self, start: usize, length: usize) -> Result<Sequence> {
        check_range(start, length, self.items.len())?;
        Ok(Self::from_parts(
            self.alphabet,
            self.items[start..start + length].to_vec(),
        ))
    }

    pub fn copy_to(&self, target: &mut [Option<&'static SequenceItem>], offset: usize) -> Result<()> {
        copy_into(self.iter(), target, offset)
    }

    pub fn complement(&self) -> Result<Sequence> {
        complementation::complement(self)
    }

    pub fn reverse(&self) -> Sequence {
        complementation::reverse(self)
    }

    pub fn reverse_complement(&self) -> Result<Sequence> {
        complementation::reverse_complement(self)
    }

    pub fn statistics(&self) -> SequenceStatistics {
        SequenceStatistics::new(self.alphabet, self.iter())
    }
}

impl SequenceView for Sequence {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_id(&self) -> &str {
        &self.display_id
    }

    fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    fn molecule_type(&self) -> MoleculeType {
        self.molecule_type
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn get(&self, index: usize) -> Result<Option<&'static SequenceItem>> {
        self.item(index).map(Some)
    }

    fn index_of(&self, item: &SequenceItem) -> Option<usize> {
        self.items.iter().position(|x| *x == item)
    }

    fn symbols(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for item in &self.items {
            write!(f, "{}", item.symbol())?;
        }
        Ok(())
    }
}
