//! # Validation Errors
//!
//! Errors produced by the validated constructors of the core newtypes.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! Construction-time validation means a `ValidationError` is the only way
//! a malformed identifier can surface — once a value exists, it is known
//! good and downstream code never re-checks it.

use thiserror::Error;

/// Errors from validated newtype constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Account identifier is empty or whitespace-only.
    #[error("invalid account id: must be non-empty")]
    InvalidAccountId,

    /// Country code is not a two-letter ISO 3166-1 alpha-2 code.
    #[error("invalid country code {0:?}: must be two ASCII letters")]
    InvalidCountryCode(String),

    /// Timestamp string could not be parsed, or carried a non-UTC offset.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// User type string did not match any known classification.
    #[error("unknown user type: {0:?}")]
    UnknownUserType(String),
}
