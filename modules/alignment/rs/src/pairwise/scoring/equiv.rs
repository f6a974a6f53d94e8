use impl_tools::autoimpl;
use seqweave_core_rs::alignment::pairwise::Op;

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Match,
    Mismatch,
    Equivalent,
}

/// Sorts aligned symbol pairs into alignment column classes
#[autoimpl(for<T: trait + ?Sized> &T)]
pub trait Classifier {
    type Symbol;

    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type;
}

impl From<Type> for Op {
    fn from(value: Type) -> Self {
        match value {
            Type::Match => Op::Match,
            Type::Mismatch => Op::Mismatch,
            Type::Equivalent => Op::Equivalent,
        }
    }
}
