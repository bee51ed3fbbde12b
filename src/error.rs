//! Error type for the few fallible operations in this crate.
//!
//! Looking up, changing or deleting a key that isn't in the tree is not an
//! error: those operations report a miss with `false` or `None`.

use thiserror::Error;

/// Errors returned by [`Cursor::try_get`][crate::Cursor::try_get] and by
/// parsing an [`Order`][crate::Order].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cursor positioned at the end sentinel was dereferenced. The end
    /// position has no key or value.
    #[error("cursor is at the end of the tree")]
    EndOfTree,

    /// A string didn't name one of the traversal orders.
    #[error("unknown traversal order `{0}`")]
    UnknownOrder(String),
}

/// A `Result` using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
