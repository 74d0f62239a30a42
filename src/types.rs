//! This module holds the buffer type and the search it is built on.
use crate::Error;

pub mod buffer;
pub mod search;

pub use buffer::{ByteBuffer, MAX_CAPACITY};
pub use search::{BadCharTable, Finder};

/// Trait that express the ability of a collection to be extended with another collection
/// when growing it may fail.
pub trait TryExtend<T> {
    /// Appends `collection`, leaving `self` unchanged if it cannot grow to fit it.
    ///
    /// # Errors
    /// Returns the error reported by the growth of `self`.
    fn try_extend(&mut self, collection: T) -> Result<(), Error>;
}
