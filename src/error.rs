//! Library error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The operating system could not supply seed material. Never retried
    /// with a weaker source.
    #[error("operating system entropy source failed")]
    Entropy(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("password must be {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("character {ch:?} at position {position} is not in any character class")]
    Unclassified { ch: char, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
