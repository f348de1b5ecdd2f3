//! Bit vectors packed into 64-bit words.
//!
//! Two variants share the same packed representation:
//!
//! - [`BitSet`] holds a fixed number of bits chosen at construction;
//!   indexing past that size is rejected with [`BitSetError::OutOfRange`].
//! - [`GrowableBitSet`] extends itself on demand; writes past the current
//!   size grow the storage instead of failing.
//!
//! Neither type is safe for concurrent mutation from multiple threads.
//! Callers that share an instance across threads must provide their own
//! synchronization, or use one instance per thread.

mod bitset;
mod error;
mod growable;
mod iter;

pub use bitset::BitSet;
pub use error::BitSetError;
pub use growable::GrowableBitSet;
pub use iter::Ones;
