use crate::alphabet::{Alphabet, MoleculeType, SequenceItem};
use crate::error::{Result, SeqError};

use super::{Sequence, SequenceView};

/// Metadata of a sequence whose residues are not available.
///
/// Identity accessors work as usual. Every call that needs residues fails with
/// [`SeqError::NotSupported`]; searches report nothing found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualSequence {
    id: String,
    display_id: String,
    documentation: Option<String>,
    alphabet: &'static Alphabet,
    molecule_type: MoleculeType,
}

fn unsupported<T>() -> Result<T> {
    Err(SeqError::NotSupported)
}

impl VirtualSequence {
    pub fn new(alphabet: &'static Alphabet) -> Self {
        Self {
            id: String::new(),
            display_id: String::new(),
            documentation: None,
            alphabet,
            molecule_type: alphabet.molecule(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        if self.display_id.is_empty() {
            self.display_id.clone_from(&self.id);
        }
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

    pub fn set_molecule_type(&mut self, molecule_type: MoleculeType) {
        self.molecule_type = molecule_type;
    }

    pub fn item(&self, _index: usize) -> Result<&'static SequenceItem> {
        unsupported()
    }

    pub fn iter(&self) -> Result<std::iter::Empty<&'static SequenceItem>> {
        unsupported()
    }

    pub fn push(&mut self, _item: &SequenceItem) -> Result<()> {
        unsupported()
    }

    pub fn insert(&mut self, _index: usize, _item: &SequenceItem) -> Result<()> {
        unsupported()
    }

    pub fn insert_symbol(&mut self, _index: usize, _symbol: char) -> Result<()> {
        unsupported()
    }

    pub fn insert_range(&mut self, _index: usize, _symbols: &str) -> Result<()> {
        unsupported()
    }

    pub fn remove_at(&mut self, _index: usize) -> Result<()> {
        unsupported()
    }

    pub fn remove_range(&mut self, _start: usize, _length: usize) -> Result<()> {
        unsupported()
    }

    pub fn remove(&mut self, _item: &SequenceItem) -> Result<bool> {
        unsupported()
    }

    pub fn replace(&mut self, _index: usize, _item: &SequenceItem) -> Result<()> {
        unsupported()
    }

    pub fn replace_symbol(&mut self, _index: usize, _symbol: char) -> Result<()> {
        unsupported()
    }

    pub fn replace_range(&mut self, _start: usize, _symbols: &str) -> Result<()> {
        unsupported()
    }

    pub fn clear(&mut self) -> Result<()> {
        unsupported()
    }

    pub fn range(&self, _start: usize, _length: usize) -> Result<Sequence> {
        unsupported()
    }

    pub fn copy_to(&self, _target: &mut [Option<&'static SequenceItem>], _offset: usize) -> Result<()> {
        unsupported()
    }

    pub fn complement(&self) -> Result<Sequence> {
        unsupported()
    }

    pub fn reverse(&self) -> Result<Sequence> {
        unsupported()
    }

    pub fn reverse_complement(&self) -> Result<Sequence> {
        unsupported()
    }
}

impl SequenceView for VirtualSequence {
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
        0
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn get(&self, _index: usize) -> Result<Option<&'static SequenceItem>> {
        unsupported()
    }

    fn index_of(&self, _item: &SequenceItem) -> Option<usize> {
        None
    }

    fn contains(&self, _item: &SequenceItem) -> bool {
        false
    }

    fn symbols(&self) -> Result<String> {
        unsupported()
    }
}
