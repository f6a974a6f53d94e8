use std::rc::Rc;
use std::sync::Arc;

use impl_tools::autoimpl;

pub use any::AnySequence;
pub use derived::{DerivedSequence, UpdateType, UpdatedItem};
pub use placeholder::VirtualSequence;
pub use sequence::Sequence;
pub use sparse::SparseSequence;
pub use statistics::SequenceStatistics;

use crate::alphabet::{Alphabet, MoleculeType, SequenceItem};
use crate::error::{Result, SeqError};

mod any;
mod derived;
mod placeholder;
mod sequence;
mod sparse;
mod statistics;

/// Read access shared by every sequence flavour.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>, Rc<T>, Arc<T>)]
pub trait SequenceView {
    fn id(&self) -> &str;

    fn display_id(&self) -> &str;

    fn documentation(&self) -> Option<&str>;

    fn alphabet(&self) -> &'static Alphabet;

    fn molecule_type(&self) -> MoleculeType;

    /// Logical number of positions
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_read_only(&self) -> bool;

    /// Item at `index`, or `None` for a position that holds no item.
    fn get(&self, index: usize) -> Result<Option<&'static SequenceItem>>;

    /// Position of the first occurrence of `item`
    fn index_of(&self, item: &SequenceItem) -> Option<usize>;

    fn contains(&self, item: &SequenceItem) -> bool {
        self.index_of(item).is_some()
    }

    /// Concatenated symbols of the sequence
    fn symbols(&self) -> Result<String>;
}

/// An item together with its position in a sequence
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IndexedItem<T> {
    pub index: usize,
    pub item: T,
}

impl<T> IndexedItem<T> {
    pub fn new(index: usize, item: T) -> Self {
        Self { index, item }
    }
}

/// Copies `items` into `target` starting at `offset`, failing if they do not fit.
pub(crate) fn copy_into(
    items: impl ExactSizeIterator<Item = &'static SequenceItem>,
    target: &mut [Option<&'static SequenceItem>],
    offset: usize,
) -> Result<()> {
    let needed = items.len();
    if offset > target.len() || target.len() - offset < needed {
        return Err(SeqError::invalid(format!(
            "destination of length {} cannot hold {needed} items at offset {offset}",
            target.len()
        )));
    }
    for (slot, item) in target[offset..].iter_mut().zip(items) {
        *slot = Some(item);
    }
    Ok(())
}

/// Ensures that `[0, index]` is a valid insertion point for a sequence of length `len`.
#[inline]
pub(crate) fn check_insertion(index: usize, len: usize) -> Result<()> {
    if index > len {
        Err(SeqError::out_of_range("position", index, len))
    } else {
        Ok(())
    }
}

/// Parses a non-empty run of symbols for bulk insertion or replacement.
pub(crate) fn parse_block(alphabet: &Alphabet, symbols: &str) -> Result<Vec<&'static SequenceItem>> {
    if symbols.is_empty() {
        return Err(SeqError::Empty { param: "sequence" });
    }
    alphabet.parse(symbols)
}
