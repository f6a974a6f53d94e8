use std::fmt::Display;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use itertools::Itertools;

use crate::num::PrimUInt;

use super::op::Op;

/// A run of identical alignment columns
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct Step<Len: PrimUInt = u32> {
    pub op: Op,
    /// Number of consecutive columns sharing the operation
    pub len: Len,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Self {
        Self { op, len }
    }

    /// Run-length encodes a stream of columns. Runs longer than `Len::max_value()` are split.
    pub fn collapse(ops: impl IntoIterator<Item = Op>) -> Vec<Step<Len>> {
        let mut steps: Vec<Step<Len>> = Vec::new();
        for op in ops {
            match steps.last_mut() {
                Some(last) if last.op == op && last.len < Len::max_value() => {
                    last.len = last.len + Len::one();
                }
                _ => steps.push(Step::new(op, Len::one())),
            }
        }
        steps
    }

    /// Expands the steps back into one operation per column
    pub fn columns(steps: &[Step<Len>]) -> impl Iterator<Item = Op> + '_ {
        steps.iter().flat_map(|x| {
            let len = x.len.to_usize().unwrap_or(0);
            std::iter::repeat_n(x.op, len)
        })
    }
}

impl<Len: PrimUInt + Display> Step<Len> {
    /// Compact text form, e.g. `3=1X2v`
    pub fn rle(steps: &[Step<Len>]) -> String {
        steps
            .iter()
            .map(|x| format!("{}{}", x.len, x.op.symbol()))
            .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse() {
        let ops = [
            Op::Match,
            Op::Match,
            Op::Mismatch,
            Op::GapFirst,
            Op::GapFirst,
            Op::Match,
        ];
        let steps = Step::<u32>::collapse(ops);
        assert_eq!(
            steps,
            vec![
                Step::new(Op::Match, 2),
                Step::new(Op::Mismatch, 1),
                Step::new(Op::GapFirst, 2),
                Step::new(Op::Match, 1),
            ]
        );
        assert_eq!(Step::rle(&steps), "2=1X2v1=");
        assert_eq!(Step::columns(&steps).collect::<Vec<_>>(), ops);
    }

    #[test]
    fn test_collapse_splits_long_runs() {
        let steps = Step::<u8>::collapse(std::iter::repeat_n(Op::GapSecond, 300));
        assert_eq!(
            steps,
            vec![Step::new(Op::GapSecond, 255), Step::new(Op::GapSecond, 45)]
        );
        assert!(Step::<u8>::collapse([]).is_empty());
    }
}
