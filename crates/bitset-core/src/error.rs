use std::fmt;

/// Error type for bit-index operations on a fixed-size bitset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitSetError {
    /// Bit index at or beyond the bitset's logical size.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The bitset's logical size at the time of the call.
        size: usize,
    },
}

impl fmt::Display for BitSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitSetError::OutOfRange { index, size } => {
                write!(f, "bit index {index} out of range for bitset of size {size}")
            }
        }
    }
}

impl std::error::Error for BitSetError {}
