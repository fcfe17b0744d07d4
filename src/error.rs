//! Error types for Sugerir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Sugerir operations.
///
/// Covers malformed interaction events, empty inputs, queries for unknown
/// users, and dimension mismatches between compute primitives.
///
/// # Examples
///
/// ```
/// use sugerir::error::SugerirError;
///
/// let err = SugerirError::UnknownUser { user_id: 42 };
/// assert!(err.to_string().contains("42"));
/// ```
#[derive(Debug)]
pub enum SugerirError {
    /// Malformed interaction event (non-positive ids or bad weight).
    InvalidEvent {
        /// User id carried by the offending event
        user_id: i64,
        /// Item id carried by the offending event
        item_id: i64,
        /// Constraint that was violated
        reason: String,
    },

    /// No usable data; no recommendations possible.
    EmptyInput {
        /// What was empty (e.g., "interaction counts")
        context: String,
    },

    /// Query for a user absent from the interaction matrix.
    ///
    /// Recoverable at the call site: treat as "new user / no history" and
    /// fall back to a non-personalized strategy.
    UnknownUser {
        /// The user id that was queried
        user_id: i64,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SugerirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SugerirError::InvalidEvent {
                user_id,
                item_id,
                reason,
            } => {
                write!(
                    f,
                    "Invalid interaction event (user_id={user_id}, item_id={item_id}): {reason}"
                )
            }
            SugerirError::EmptyInput { context } => {
                write!(f, "Empty input: {context}")
            }
            SugerirError::UnknownUser { user_id } => {
                write!(
                    f,
                    "Unknown user: {user_id} is not present in the interaction matrix"
                )
            }
            SugerirError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            SugerirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SugerirError {}

impl From<&str> for SugerirError {
    fn from(msg: &str) -> Self {
        SugerirError::Other(msg.to_string())
    }
}

impl From<String> for SugerirError {
    fn from(msg: String) -> Self {
        SugerirError::Other(msg)
    }
}

impl SugerirError {
    /// Create an invalid-event error with the violated constraint.
    #[must_use]
    pub fn invalid_event(user_id: i64, item_id: i64, reason: &str) -> Self {
        Self::InvalidEvent {
            user_id,
            item_id,
            reason: reason.to_string(),
        }
    }

    /// Create an empty-input error with descriptive context.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Create a dimension mismatch error from two lengths.
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{expected}"),
            actual: format!("{actual}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SugerirError>;
