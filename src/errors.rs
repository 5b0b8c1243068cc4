//! Error types shared by optionals, function combinators and pipelines.
//!
//! Every failure in this crate is local and synchronous: arguments are
//! validated up front and the first violation is returned. Nothing is retried
//! and an absent function argument is never silently treated as identity.
//!
//! # Example
//!
//! ```rust
//! use lazypipe::errors::Error;
//!
//! let err = Error::null_argument("predicate");
//! assert_eq!(err.category(), "NullArgument");
//! assert_eq!(err.to_string(), "Null argument: predicate must not be absent");
//! ```

use thiserror::Error;

/// Main error type for lazypipe operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required function, predicate, comparator or consumer was absent
    #[error("Null argument: {argument} must not be absent")]
    NullArgument { argument: &'static str },

    /// Attempted to read a value that is not there
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// A consumed pipeline or finalized builder was used again
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// An argument was outside its accepted domain (negative counts, inverted ranges)
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// A sub-range index fell outside the source
    #[error("Index out of range: {index} exceeds length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// A buffering stage grew past the configured `max_buffered`
    #[error("Buffer limit exceeded: more than {limit} elements buffered")]
    BufferLimitExceeded { limit: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a null-argument error naming the missing parameter
    pub fn null_argument(argument: &'static str) -> Self {
        Self::NullArgument { argument }
    }

    pub fn no_such_element(message: impl Into<String>) -> Self {
        Self::NoSuchElement(message.into())
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState(message.into())
    }

    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::NullArgument { .. } => "NullArgument",
            Self::NoSuchElement(_) => "NoSuchElement",
            Self::IllegalState(_) => "IllegalState",
            Self::IllegalArgument(_) => "IllegalArgument",
            Self::IndexOutOfRange { .. } => "IndexOutOfRange",
            Self::BufferLimitExceeded { .. } => "BufferLimitExceeded",
            Self::Config(_) => "Config",
            Self::Io(_) => "I/O",
        }
    }

    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }

    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, Self::IllegalArgument(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Unwrap a possibly-absent argument or fail with [`Error::NullArgument`].
pub(crate) fn require<F>(value: impl Into<Option<F>>, argument: &'static str) -> Result<F> {
    value.into().ok_or(Error::NullArgument { argument })
}
