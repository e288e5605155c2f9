//! Common error types used throughout the crate.

use std::collections::TryReserveError;
use std::fmt;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type covering failures across the containers of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated preconditions, e.g., a negative bit index.
    InvalidArgument(String),
    /// The storage needed to address a position cannot be represented or allocated.
    CapacityOverflow(String),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the provided message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::CapacityOverflow`] with the provided message.
    pub fn capacity_overflow(msg: impl Into<String>) -> Self {
        Self::CapacityOverflow(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "{msg}"),
            Error::CapacityOverflow(msg) => write!(f, "capacity overflow: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::CapacityOverflow(err.to_string())
    }
}
