//! Error types for the ledger domain.

use thiserror::Error;

/// Errors raised by ledger operations and value object construction.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// Day index outside the accepted 0..=6 range.
    #[error("invalid day {day}: must be between 0 and 6")]
    InvalidDay {
        /// The rejected day index.
        day: i64,
    },

    /// Slot token was neither "am" nor "pm".
    #[error("invalid slot '{token}': expected 'am' or 'pm'")]
    InvalidSlot {
        /// The rejected token.
        token: String,
    },

    /// Operation requires a record that does not exist.
    #[error("no price data recorded for user '{user}'")]
    NoRecord {
        /// The user the lookup was for.
        user: String,
    },

    /// User identifier was empty.
    #[error("user id cannot be empty")]
    EmptyUser,

    /// The document store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Creates an invalid day error.
    pub fn invalid_day(day: i64) -> Self {
        LedgerError::InvalidDay { day }
    }

    /// Creates an invalid slot error.
    pub fn invalid_slot(token: impl Into<String>) -> Self {
        LedgerError::InvalidSlot {
            token: token.into(),
        }
    }

    /// Creates a no record error.
    pub fn no_record(user: impl Into<String>) -> Self {
        LedgerError::NoRecord { user: user.into() }
    }
}

/// Failure kinds at the document store boundary.
///
/// Each store operation is a single document call; these are the ways it can
/// go wrong. `NotFound` is not an error at this boundary; absent records are
/// an `Option::None` from `find_by_user`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be reached or refused the operation.
    #[error("document store unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// A stored document could not be decoded, or a record could not be encoded.
    #[error("document serialization failed: {message}")]
    Serialization {
        /// Error details.
        message: String,
    },

    /// Underlying I/O failed.
    #[error("store i/o error: {message}")]
    Io {
        /// Error details.
        message: String,
    },
}

impl StoreError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        StoreError::Serialization {
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        StoreError::Io {
            message: message.into(),
        }
    }
}
