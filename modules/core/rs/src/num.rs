use std::fmt::Debug;

/// Unsigned primitive integers used for run lengths and counters
pub trait PrimUInt: ::num::PrimInt + ::num::Unsigned + Debug + Default {}

impl<T: ::num::PrimInt + ::num::Unsigned + Debug + Default> PrimUInt for T {}
