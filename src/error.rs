use std::error::Error as StdError;
use std::fmt;

/// Errors raised by engine construction and the loader contract.
///
/// Searches themselves never fail -- empty or unmatched input simply yields
/// an empty result list, per the `search` contract. `not-found` lookups
/// (`update_count`, `get_word_context`) return `Option::None` rather than
/// an `Error` variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A synonym key wasn't present in the word dictionary, or a key was
    /// otherwise malformed, at construction time.
    BadInput(String),
    /// An external source (file, cache) couldn't be read.
    LoaderIo(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadInput(msg) => write!(f, "bad input: {}", msg),
            Error::LoaderIo(msg) => write!(f, "loader io error: {}", msg),
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;
