//! Errors reported by the map's fallible operations.

use thiserror::Error;

/// The reason an operation on an [`OrderedMap`](crate::OrderedMap) failed.
///
/// Every failure is recoverable: the map is left exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// An entry with an equal key is already present. Existing values are never overwritten.
    #[error("key is already present in the map")]
    DuplicateKey,
    /// No entry with an equal key is present.
    #[error("key is not present in the map")]
    KeyNotFound,
    /// The operation needs at least one entry but the map is empty.
    #[error("map is empty")]
    EmptyMap,
}

/// A `Result` whose error type is [`Error`].
pub type Result<T> = ::std::result::Result<T, Error>;
