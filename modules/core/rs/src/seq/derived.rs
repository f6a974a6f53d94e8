use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

use crate::alphabet::{Alphabet, MoleculeType, SequenceItem};
use crate::error::{check_index, check_range, Result};

use super::{check_insertion, copy_into, parse_block, IndexedItem, Sequence, SequenceView};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub enum UpdateType {
    Inserted,
    Removed,
    Replaced,
}

/// A single edit recorded on top of the source sequence
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UpdatedItem {
    pub kind: UpdateType,
    /// The new item for insertions/replacements, the hidden source item for removals
    pub item: &'static SequenceItem,
}

/// An editable view over a shared, immutable source sequence.
///
/// Only the edits are stored. They are keyed by *internal* positions: every source position plus
/// every inserted item occupies one internal slot, and removed slots stay in place as markers. The
/// effective index of a slot is its internal position minus the removal markers at or before it.
#[derive(Clone, Debug)]
pub struct DerivedSequence {
    source: Arc<Sequence>,
    updates: BTreeMap<usize, UpdatedItem>,
}

impl DerivedSequence {
    pub fn new(source: impl Into<Arc<Sequence>>) -> Self {
        Self {
            source: source.into(),
            updates: BTreeMap::new(),
        }
    }

    pub fn source(&self) -> &Arc<Sequence> {
        &self.source
    }

    fn count(&self, kind: UpdateType) -> usize {
        self.updates.values().filter(|x| x.kind == kind).count()
    }

    /// Internal slot backing the effective `index`
    fn internal_index(&self, index: usize) -> usize {
        let mut internal = index;
        for (key, _) in self
            .updates
            .iter()
            .filter(|(_, x)| x.kind == UpdateType::Removed)
        {
            if *key <= internal {
                internal += 1;
            } else {
                break;
            }
        }
        internal
    }

    fn source_item(&self, internal: usize) -> &'static SequenceItem {
        let inserted = self
            .updates
            .range(..internal)
            .filter(|(_, x)| x.kind == UpdateType::Inserted)
            .count();
        self.source.items()[internal - inserted]
    }

    fn internal_item(&self, internal: usize) -> &'static SequenceItem {
        match self.updates.get(&internal) {
            Some(x) if x.kind != UpdateType::Removed => x.item,
            _ => self.source_item(internal),
        }
    }

    /// Moves every edit keyed at or after `from` by one slot up (`grow`) or down.
    fn shift(&mut self, from: usize, grow: bool) {
        let tail = self.updates.split_off(&from);
        for (key, value) in tail {
            let key = if grow { key + 1 } else { key - 1 };
            self.updates.insert(key, value);
        }
    }

    /// Effective content, in order
    pub fn items(&self) -> Vec<&'static SequenceItem> {
        let slots = self.source.len() + self.count(UpdateType::Inserted);
        let mut result = Vec::with_capacity(self.len());
        let mut inserted = 0;
        for internal in 0..slots {
            match self.updates.get(&internal) {
                Some(x) if x.kind == UpdateType::Removed => {}
                Some(x) => {
                    if x.kind == UpdateType::Inserted {
                        inserted += 1;
                    }
                    result.push(x.item);
                }
                None => result.push(self.source.items()[internal - inserted]),
            }
        }
        result
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static SequenceItem> {
        self.items().into_iter()
    }

    pub fn item(&self, index: usize) -> Result<&'static SequenceItem> {
        check_index("index", index, self.len())?;
        Ok(self.internal_item(self.internal_index(index)))
    }

    /// The recorded edits ordered by internal position
    pub fn updated_items(&self) -> Vec<IndexedItem<UpdatedItem>> {
        self.updates
            .iter()
            .map(|(key, value)| IndexedItem::new(*key, *value))
            .collect()
    }

    pub fn push(&mut self, item: &SequenceItem) -> Result<()> {
        self.insert(self.len(), item)
    }

    pub fn insert(&mut self, index: usize, item: &SequenceItem) -> Result<()> {
        check_insertion(index, self.len())?;
        let item = self.source.alphabet().resolve(item)?;
        self.insert_unchecked(index, item);
        Ok(())
    }

    fn insert_unchecked(&mut self, index: usize, item: &'static SequenceItem) {
        let internal = self.internal_index(index);
        self.shift(internal, true);
        self.updates.insert(
            internal,
            UpdatedItem {
                kind: UpdateType::Inserted,
                item,
            },
        );
    }

    pub fn insert_symbol(&mut self, index: usize, symbol: char) -> Result<()> {
        let item = self.source.alphabet().item(symbol)?;
        self.insert(index, item)
    }

    pub fn insert_range(&mut self, index: usize, symbols: &str) -> Result<()> {
        check_insertion(index, self.len())?;
        let items = parse_block(self.source.alphabet(), symbols)?;
        for (offset, item) in items.into_iter().enumerate() {
            self.insert_unchecked(index + offset, item);
        }
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        check_index("index", index, self.len())?;
        self.remove_unchecked(index);
        Ok(())
    }

    fn remove_unchecked(&mut self, index: usize) {
        let internal = self.internal_index(index);
        match self.updates.get(&internal).map(|x| x.kind) {
            // An inserted item never touched the source: drop it without a trace
            Some(UpdateType::Inserted) => {
                self.updates.remove(&internal);
                self.shift(internal + 1, false);
            }
            _ => {
                let item = self.source_item(internal);
                self.updates.insert(
                    internal,
                    UpdatedItem {
                        kind: UpdateType::Removed,
                        item,
                    },
                );
            }
        }
    }

    pub fn remove_range(&mut self, start: usize, length: usize) -> Result<()> {
        check_range(start, length, self.len())?;
        for _ in 0..length {
            self.remove_unchecked(start);
        }
        Ok(())
    }

    /// Removes the first occurrence of `item`; returns false if it is absent.
    pub fn remove(&mut self, item: &SequenceItem) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.remove_unchecked(index);
                true
            }
            None => false,
        }
    }

    pub fn replace(&mut self, index: usize, item: &SequenceItem) -> Result<()> {
        check_index("index", index, self.len())?;
        let item = self.source.alphabet().resolve(item)?;
        self.replace_unchecked(index, item);
        Ok(())
    }

    fn replace_unchecked(&mut self, index: usize, item: &'static SequenceItem) {
        let internal = self.internal_index(index);
        match self.updates.get_mut(&internal) {
            Some(existing) => existing.item = item,
            None => {
                self.updates.insert(
                    internal,
                    UpdatedItem {
                        kind: UpdateType::Replaced,
                        item,
                    },
                );
            }
        }
    }

    pub fn replace_symbol(&mut self, index: usize, symbol: char) -> Result<()> {
        let item = self.source.alphabet().item(symbol)?;
        self.replace(index, item)
    }

    pub fn replace_range(&mut self, start: usize, symbols: &str) -> Result<()> {
        check_index("start", start, self.len())?;
        let items = parse_block(self.source.alphabet(), symbols)?;
        check_range(start, items.len(), self.len())?;
        for (offset, item) in items.into_iter().enumerate() {
            self.replace_unchecked(start + offset, item);
        }
        Ok(())
    }

    /// Drops every edit; the view becomes identical to the source again.
    pub fn clear(&mut self) {
        self.updates.clear();
    }

    /// An independent sequence holding `[start, start + length)` of the effective content
    pub fn range(&self, start: usize, length: usize) -> Result<Sequence> {
        check_range(start, length, self.len())?;
        let items = self.items()[start..start + length].to_vec();
        Ok(Sequence::from_parts(self.source.alphabet(), items))
    }

    pub fn copy_to(&self, target: &mut [Option<&'static SequenceItem>], offset: usize) -> Result<()> {
        copy_into(self.iter(), target, offset)
    }

    /// Materializes the effective content, keeping the source identity
    pub fn to_sequence(&self) -> Sequence {
        Sequence::from_parts(self.source.alphabet(), self.items()).with_metadata_of(&self.source)
    }
}

impl SequenceView for DerivedSequence {
    fn id(&self) -> &str {
        self.source.id()
    }

    fn display_id(&self) -> &str {
        self.source.display_id()
    }

    fn documentation(&self) -> Option<&str> {
        self.source.documentation()
    }

    fn alphabet(&self) -> &'static Alphabet {
        self.source.alphabet()
    }

    fn molecule_type(&self) -> MoleculeType {
        self.source.molecule_type()
    }

    fn len(&self) -> usize {
        self.source.len() + self.count(UpdateType::Inserted) - self.count(UpdateType::Removed)
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn get(&self, index: usize) -> Result<Option<&'static SequenceItem>> {
        self.item(index).map(Some)
    }

    fn index_of(&self, item: &SequenceItem) -> Option<usize> {
        self.iter().position(|x| x == item)
    }

    fn symbols(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl Display for DerivedSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for item in self.iter() {
            write!(f, "{}", item.symbol())?;
        }
        Ok(())
    }
}
