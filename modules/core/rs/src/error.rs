use thiserror::Error;

/// Errors raised by sequence construction, mutation and translation.
///
/// Every check runs before any state change, so a returned error always leaves the sequence untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A required value is missing (e.g. an empty string where at least one symbol is needed)
    #[error("{param} must not be empty")]
    Empty { param: &'static str },

    /// An index or position lies outside the valid range
    #[error("{param} {value} is out of range for length {len}")]
    OutOfRange {
        param: &'static str,
        value: usize,
        len: usize,
    },

    /// A structurally invalid argument: bad length, mismatched alphabets, wrong arity, etc.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A symbol that does not belong to the target alphabet
    #[error("symbol '{symbol}' is not part of the {alphabet} alphabet")]
    InvalidSymbol { symbol: char, alphabet: &'static str },

    #[error("sequence is read-only")]
    ReadOnly,

    /// The operation requires residue content that the sequence does not carry
    #[error("operation not supported on a virtual sequence")]
    NotSupported,
}

pub type Result<T> = std::result::Result<T, SeqError>;

impl SeqError {
    pub fn out_of_range(param: &'static str, value: usize, len: usize) -> Self {
        SeqError::OutOfRange { param, value, len }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        SeqError::InvalidArgument(msg.into())
    }
}

/// Fails with [`SeqError::OutOfRange`] unless `index < len`.
#[inline]
pub(crate) fn check_index(param: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SeqError::out_of_range(param, index, len))
    }
}

/// Fails unless `[start, start + length)` lies inside `[0, len)`.
pub(crate) fn check_range(start: usize, length: usize, len: usize) -> Result<()> {
    check_index("start", start, len)?;
    if length > len - start {
        return Err(SeqError::invalid(format!(
            "length {length} starting at {start} exceeds the sequence length {len}"
        )));
    }
    Ok(())
}
