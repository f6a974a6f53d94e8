#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// A single column class in a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub enum Op {
    /// A gap in the first sequence (v): the second sequence contributes a residue, the first a gap
    GapFirst,
    /// A gap in the second sequence (^)
    GapSecond,
    /// Different residues with a positive substitution score (~), e.g. similar amino acids
    Equivalent,
    /// Identical residues (=)
    Match,
    /// Different residues without a positive substitution score (X)
    Mismatch,
}

impl Op {
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Equivalent => '~',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// True if the column consumes a residue from both sequences
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Equivalent | Op::Match | Op::Mismatch)
    }

    /// The same column seen with the sequences swapped
    pub fn swapped(&self) -> Op {
        match self {
            Op::GapFirst => Op::GapSecond,
            Op::GapSecond => Op::GapFirst,
            x => *x,
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '~' => Ok(Op::Equivalent),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
