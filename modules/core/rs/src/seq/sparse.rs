use std::collections::BTreeMap;

use crate::alphabet::{Alphabet, MoleculeType, SequenceItem};
use crate::error::{check_index, check_range, Result, SeqError};

use super::{
    check_insertion, copy_into, parse_block, IndexedItem, SequenceStatistics, SequenceView,
};

/// A sequence over a large index space that stores only the occupied positions.
///
/// `len` is the logical length. Positions below it that were never set hold no item; they are
/// skipped by iteration, searches and statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseSequence {
    id: String,
    display_id: String,
    documentation: Option<String>,
    alphabet: &'static Alphabet,
    molecule_type: MoleculeType,
    items: BTreeMap<usize, &'static SequenceItem>,
    len: usize,
    read_only: bool,
}

impl SparseSequence {
    pub fn new(alphabet: &'static Alphabet) -> Self {
        Self::with_len(alphabet, 0)
    }

    pub fn with_len(alphabet: &'static Alphabet, len: usize) -> Self {
        Self {
            id: String::new(),
            display_id: String::new(),
            documentation: None,
            alphabet,
            molecule_type: alphabet.molecule(),
            items: BTreeMap::new(),
            len,
            read_only: false,
        }
    }

    /// A read-only sequence of length `index + 1` holding `item` at `index`
    pub fn with_item(alphabet: &'static Alphabet, index: usize, item: &SequenceItem) -> Result<Self> {
        Self::with_items(alphabet, index, &[Some(item)])
    }

    /// A read-only sequence holding `items` from `index` onwards; `None` entries stay unset.
    pub fn with_items(
        alphabet: &'static Alphabet,
        index: usize,
        items: &[Option<&SequenceItem>],
    ) -> Result<Self> {
        let mut seq = Self::with_len(alphabet, index + items.len());
        for (offset, item) in items.iter().enumerate() {
            if let Some(item) = item {
                seq.items.insert(index + offset, alphabet.resolve(item)?);
            }
        }
        seq.read_only = true;
        Ok(seq)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        if self.display_id.is_empty() {
            self.display_id.clone_from(&self.id);
        }
        self
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

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            Err(SeqError::ReadOnly)
        } else {
            Ok(())
        }
    }

    fn resolve(&self, item: Option<&SequenceItem>) -> Result<Option<&'static SequenceItem>> {
        item.map(|x| self.alphabet.resolve(x)).transpose()
    }

    /// Sets the logical length. Occupied positions beyond the new length are dropped.
    pub fn set_len(&mut self, len: usize) -> Result<()> {
        self.ensure_writable()?;
        let dropped = self.items.split_off(&len);
        if !dropped.is_empty() {
            log::warn!(
                "Shrinking sparse sequence to {len} positions dropped {} occupied entries",
                dropped.len()
            );
        }
        self.len = len;
        Ok(())
    }

    /// Number of occupied positions
    pub fn known_count(&self) -> usize {
        self.items.len()
    }

    pub fn known_items(&self) -> Vec<IndexedItem<&'static SequenceItem>> {
        self.iter().map(|(index, item)| IndexedItem::new(index, item)).collect()
    }

    /// Occupied positions and their items, in index order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &'static SequenceItem)> + '_ {
        self.items.iter().map(|(index, item)| (*index, *item))
    }

    pub fn first_known_index(&self) -> Option<usize> {
        self.items.keys().next().copied()
    }

    pub fn last_known_index(&self) -> Option<usize> {
        self.items.keys().next_back().copied()
    }

    /// First occupied position strictly after `index`
    pub fn next_known_index(&self, index: usize) -> Option<usize> {
        self.items.range(index + 1..).next().map(|(x, _)| *x)
    }

    /// Last occupied position strictly before `index`
    pub fn prev_known_index(&self, index: usize) -> Option<usize> {
        self.items.range(..index).next_back().map(|(x, _)| *x)
    }

    /// First position below the logical length that holds no item
    pub fn index_of_absent(&self) -> Option<usize> {
        let mut expected = 0;
        for index in self.items.keys() {
            if *index != expected {
                break;
            }
            expected += 1;
        }
        (expected < self.len).then_some(expected)
    }

    fn shift_up(&mut self, from: usize, by: usize) {
        let tail = self.items.split_off(&from);
        self.items
            .extend(tail.into_iter().map(|(index, item)| (index + by, item)));
    }

    fn shift_down(&mut self, from: usize, by: usize) {
        let tail = self.items.split_off(&from);
        self.items
            .extend(tail.into_iter().map(|(index, item)| (index - by, item)));
    }

    /// Stores `item` at `index` (or clears the position for `None`)
    pub fn set(&mut self, index: usize, item: Option<&SequenceItem>) -> Result<()> {
        self.replace(index, item)
    }

    /// Appends a position at the end of the sequence
    pub fn push(&mut self, item: Option<&SequenceItem>) -> Result<()> {
        self.ensure_writable()?;
        if let Some(item) = self.resolve(item)? {
            self.items.insert(self.len, item);
        }
        self.len += 1;
        Ok(())
    }

    pub fn insert(&mut self, index: usize, item: Option<&SequenceItem>) -> Result<()> {
        self.ensure_writable()?;
        check_insertion(index, self.len)?;
        let item = self.resolve(item)?;
        self.shift_up(index, 1);
        if let Some(item) = item {
            self.items.insert(index, item);
        }
        self.len += 1;
        Ok(())
    }

    pub fn insert_symbol(&mut self, index: usize, symbol: char) -> Result<()> {
        let item = self.alphabet.item(symbol)?;
        self.insert(index, Some(item))
    }

    pub fn insert_range(&mut self, index: usize, symbols: &str) -> Result<()> {
        self.ensure_writable()?;
        check_insertion(index, self.len)?;
        let items = parse_block(self.alphabet, symbols)?;
        self.shift_up(index, items.len());
        self.len += items.len();
        self.items.extend(
            items
                .into_iter()
                .enumerate()
                .map(|(offset, item)| (index + offset, item)),
        );
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        self.remove_range(index, 1)
    }

    pub fn remove_range(&mut self, start: usize, length: usize) -> Result<()> {
        self.ensure_writable()?;
        check_range(start, length, self.len)?;
        let mut tail = self.items.split_off(&start);
        let rest = tail.split_off(&(start + length));
        self.items
            .extend(rest.into_iter().map(|(index, item)| (index - length, item)));
        self.len -= length;
        Ok(())
    }

    /// Removes the first occupied occurrence of `item`; returns false if it is absent.
    pub fn remove(&mut self, item: &SequenceItem) -> Result<bool> {
        self.ensure_writable()?;
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(&index);
                self.shift_down(index + 1, 1);
                self.len -= 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn replace(&mut self, index: usize, item: Option<&SequenceItem>) -> Result<()> {
        self.ensure_writable()?;
        check_index("index", index, self.len)?;
        match self.resolve(item)? {
            Some(item) => self.items.insert(index, item),
            None => self.items.remove(&index),
        };
        Ok(())
    }

    pub fn replace_symbol(&mut self, index: usize, symbol: char) -> Result<()> {
        let item = self.alphabet.item(symbol)?;
        self.replace(index, Some(item))
    }

    pub fn replace_range(&mut self, start: usize, symbols: &str) -> Result<()> {
        self.ensure_writable()?;
        check_index("start", start, self.len)?;
        let items = parse_block(self.alphabet, symbols)?;
        check_range(start, items.len(), self.len)?;
        self.items.extend(
            items
                .into_iter()
                .enumerate()
                .map(|(offset, item)| (start + offset, item)),
        );
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ensure_writable()?;
        self.items.clear();
        self.len = 0;
        Ok(())
    }

    /// A writable sparse copy of `[start, start + length)`
    pub fn range(&self, start: usize, length: usize) -> Result<SparseSequence> {
        check_range(start, length, self.len)?;
        let mut result = Self::with_len(self.alphabet, length);
        result.items = self
            .items
            .range(start..start + length)
            .map(|(index, item)| (index - start, *item))
            .collect();
        Ok(result)
    }

    /// Copies the occupied items, in index order, into consecutive slots from `offset`.
    pub fn copy_to(&self, target: &mut [Option<&'static SequenceItem>], offset: usize) -> Result<()> {
        copy_into(self.items.values().copied(), target, offset)
    }

    pub fn statistics(&self) -> SequenceStatistics {
        SequenceStatistics::new(self.alphabet, self.items.values().copied())
    }
}

impl SequenceView for SparseSequence {
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
        self.len
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn get(&self, index: usize) -> Result<Option<&'static SequenceItem>> {
        check_index("index", index, self.len)?;
        Ok(self.items.get(&index).copied())
    }

    fn index_of(&self, item: &SequenceItem) -> Option<usize> {
        self.items
            .iter()
            .find(|(_, x)| **x == item)
            .map(|(index, _)| *index)
    }

    /// Only defined when every position is occupied
    fn symbols(&self) -> Result<String> {
        if let Some(index) = self.index_of_absent() {
            return Err(SeqError::invalid(format!(
                "position {index} of the sparse sequence holds no item"
            )));
        }
        Ok(self.items.values().map(|x| x.symbol()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DNA, PROTEIN};

    fn symbols(seq: &SparseSequence) -> Vec<(usize, char)> {
        seq.iter().map(|(index, item)| (index, item.symbol())).collect()
    }

    #[test]
    fn test_constructors() {
        let empty = SparseSequence::new(&DNA);
        assert_eq!(empty.len(), 0);
        assert!(!empty.is_read_only());

        let single = SparseSequence::with_item(&DNA, 50, DNA.item('G').unwrap()).unwrap();
        assert_eq!(single.len(), 51);
        assert_eq!(single.known_count(), 1);
        assert!(single.is_read_only());
        assert_eq!(single.get(50).unwrap().map(|x| x.symbol()), Some('G'));
        assert_eq!(single.get(10).unwrap(), None);
        assert!(matches!(single.get(51), Err(SeqError::OutOfRange { .. })));

        let a = DNA.item('A').unwrap();
        let multi = SparseSequence::with_items(&DNA, 10, &[Some(a), None, Some(a)]).unwrap();
        assert_eq!(multi.len(), 13);
        assert_eq!(symbols(&multi), vec![(10, 'A'), (12, 'A')]);

        assert!(matches!(
            SparseSequence::with_item(&DNA, 0, PROTEIN.item('W').unwrap()),
            Err(SeqError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_read_only() {
        let mut seq = SparseSequence::with_item(&DNA, 3, DNA.item('T').unwrap()).unwrap();
        assert_eq!(seq.push(None), Err(SeqError::ReadOnly));
        assert_eq!(seq.insert_symbol(0, 'A'), Err(SeqError::ReadOnly));
        assert_eq!(seq.set(0, None), Err(SeqError::ReadOnly));
        assert_eq!(seq.clear(), Err(SeqError::ReadOnly));
        seq.set_read_only(false);
        seq.replace_symbol(0, 'A').unwrap();
        assert_eq!(symbols(&seq), vec![(0, 'A'), (3, 'T')]);
    }

    #[test]
    fn test_len_counts_explicit_positions() {
        let mut seq = SparseSequence::new(&DNA);
        seq.set_len(2000).unwrap();
        assert_eq!(seq.len(), 2000);
        assert_eq!(seq.known_count(), 0);

        seq.set(1500, Some(DNA.item('C').unwrap())).unwrap();
        assert_eq!(seq.len(), 2000);
        assert_eq!(seq.known_count(), 1);

        seq.push(Some(DNA.item('A').unwrap())).unwrap();
        seq.push(None).unwrap();
        assert_eq!(seq.len(), 2002);
        assert_eq!(seq.known_count(), 2);
        assert_eq!(seq.last_known_index(), Some(2000));

        seq.set_len(1000).unwrap();
        assert_eq!(seq.known_count(), 0);
        assert!(matches!(seq.set(1000, None), Err(SeqError::OutOfRange { .. })));
    }

    #[test]
    fn test_insert_and_remove_shift() {
        let mut seq = SparseSequence::with_len(&DNA, 10);
        seq.set(2, Some(DNA.item('A').unwrap())).unwrap();
        seq.set(5, Some(DNA.item('C').unwrap())).unwrap();

        seq.insert(3, None).unwrap();
        assert_eq!(seq.len(), 11);
        assert_eq!(symbols(&seq), vec![(2, 'A'), (6, 'C')]);

        seq.insert_range(0, "GG").unwrap();
        assert_eq!(symbols(&seq), vec![(0, 'G'), (1, 'G'), (4, 'A'), (8, 'C')]);

        seq.remove_range(1, 4).unwrap();
        assert_eq!(symbols(&seq), vec![(0, 'G'), (4, 'C')]);
        assert_eq!(seq.len(), 9);

        assert!(seq.remove(DNA.item('C').unwrap()).unwrap());
        assert!(!seq.remove(DNA.item('T').unwrap()).unwrap());
        assert_eq!(seq.len(), 8);
        seq.remove_at(0).unwrap();
        assert_eq!(seq.known_count(), 0);
        assert!(matches!(seq.remove_range(5, 4), Err(SeqError::InvalidArgument(_))));
    }

    #[test]
    fn test_replace_none_clears_position() {
        let mut seq = SparseSequence::with_len(&DNA, 4);
        seq.replace_range(1, "ACG").unwrap();
        assert_eq!(seq.symbols().ok(), None);
        seq.replace_symbol(0, 't').unwrap();
        assert_eq!(seq.symbols().unwrap(), "TACG");
        seq.replace(2, None).unwrap();
        assert_eq!(seq.get(2).unwrap(), None);
        assert_eq!(seq.index_of_absent(), Some(2));
        assert!(matches!(seq.replace_range(2, "AAA"), Err(SeqError::InvalidArgument(_))));
    }

    #[test]
    fn test_search_only_occupied() {
        let mut seq = SparseSequence::with_len(&DNA, 100);
        seq.set(40, Some(DNA.item('T').unwrap())).unwrap();
        seq.set(70, Some(DNA.item('T').unwrap())).unwrap();
        assert_eq!(seq.index_of(DNA.item('T').unwrap()), Some(40));
        assert!(!seq.contains(DNA.item('A').unwrap()));
        assert_eq!(seq.first_known_index(), Some(40));
        assert_eq!(seq.next_known_index(40), Some(70));
        assert_eq!(seq.prev_known_index(70), Some(40));
        assert_eq!(seq.prev_known_index(40), None);
        assert_eq!(seq.index_of_absent(), Some(0));
        assert_eq!(seq.statistics().count('T'), 2);
    }

    #[test]
    fn test_range_and_copy() {
        let mut seq = SparseSequence::with_len(&DNA, 20);
        seq.set(3, Some(DNA.item('A').unwrap())).unwrap();
        seq.set(8, Some(DNA.item('C').unwrap())).unwrap();
        seq.set(15, Some(DNA.item('G').unwrap())).unwrap();

        let sub = seq.range(5, 11).unwrap();
        assert_eq!(sub.len(), 11);
        assert_eq!(symbols(&sub), vec![(3, 'C'), (10, 'G')]);

        let mut target = vec![None; 4];
        seq.copy_to(&mut target, 1).unwrap();
        let copied: Vec<_> = target.iter().map(|x| x.map(|x| x.symbol())).collect();
        assert_eq!(copied, vec![None, Some('A'), Some('C'), Some('G')]);
        assert!(seq.copy_to(&mut target, 2).is_err());

        seq.clear().unwrap();
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.known_count(), 0);
    }
}
