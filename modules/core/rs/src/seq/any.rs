use derive_more::From;

use crate::alphabet::{Alphabet, MoleculeType, SequenceItem};
use crate::error::{Result, SeqError};

use super::{DerivedSequence, Sequence, SequenceView, SparseSequence, VirtualSequence};

/// Any sequence flavour. Content-less virtual sequences are a variant of their own, so callers
/// can match on them instead of probing for [`SeqError::NotSupported`].
#[derive(Clone, Debug, From)]
pub enum AnySequence {
    Concrete(Sequence),
    Derived(DerivedSequence),
    Sparse(SparseSequence),
    Virtual(VirtualSequence),
}

impl AnySequence {
    fn view(&self) -> &dyn SequenceView {
        match self {
            AnySequence::Concrete(x) => x,
            AnySequence::Derived(x) => x,
            AnySequence::Sparse(x) => x,
            AnySequence::Virtual(x) => x,
        }
    }

    pub fn has_content(&self) -> bool {
        !matches!(self, AnySequence::Virtual(_))
    }

    /// Dense copy of the content with the same identity.
    ///
    /// Fails for virtual sequences and for sparse sequences with unset positions.
    pub fn to_sequence(&self) -> Result<Sequence> {
        match self {
            AnySequence::Concrete(x) => Ok(x.clone()),
            AnySequence::Derived(x) => Ok(x.to_sequence()),
            AnySequence::Sparse(x) => Sequence::from_view(x),
            AnySequence::Virtual(_) => Err(SeqError::NotSupported),
        }
    }
}

impl SequenceView for AnySequence {
    fn id(&self) -> &str {
        self.view().id()
    }

    fn display_id(&self) -> &str {
        self.view().display_id()
    }

    fn documentation(&self) -> Option<&str> {
        self.view().documentation()
    }

    fn alphabet(&self) -> &'static Alphabet {
        self.view().alphabet()
    }

    fn molecule_type(&self) -> MoleculeType {
        self.view().molecule_type()
    }

    fn len(&self) -> usize {
        self.view().len()
    }

    fn is_read_only(&self) -> bool {
        self.view().is_read_only()
    }

    fn get(&self, index: usize) -> Result<Option<&'static SequenceItem>> {
        self.view().get(index)
    }

    fn index_of(&self, item: &SequenceItem) -> Option<usize> {
        self.view().index_of(item)
    }

    fn contains(&self, item: &SequenceItem) -> bool {
        self.view().contains(item)
    }

    fn symbols(&self) -> Result<String> {
        self.view().symbols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::DNA;

    #[test]
    fn test_dispatch() {
        let source = Sequence::new(&DNA, "ACGT").unwrap().with_id("s1");
        let mut derived = DerivedSequence::new(source.clone());
        derived.remove_at(0).unwrap();

        let all: Vec<AnySequence> = vec![
            source.into(),
            derived.into(),
            SparseSequence::with_item(&DNA, 2, DNA.item('T').unwrap())
                .unwrap()
                .into(),
            VirtualSequence::new(&DNA).with_id("v1").into(),
        ];
        let lengths: Vec<_> = all.iter().map(|x| x.len()).collect();
        assert_eq!(lengths, vec![4, 3, 3, 0]);

        let content: Vec<_> = all.iter().map(|x| x.has_content()).collect();
        assert_eq!(content, vec![true, true, true, false]);

        assert_eq!(all[1].to_sequence().unwrap().to_string(), "CGT");
        assert_eq!(all[1].id(), "s1");
        assert!(all[2].to_sequence().is_err());
        assert_eq!(all[3].to_sequence(), Err(SeqError::NotSupported));
        assert_eq!(all[3].symbols(), Err(SeqError::NotSupported));
        assert!(!all[3].contains(DNA.item('A').unwrap()));
    }
}
