//! # Registry Errors
//!
//! Errors surfaced by the identity registry's public contract.
//!
//! ## Design
//!
//! Malformed issuance input fails fast and leaves registry state
//! unchanged. Eligibility queries never error: `has_id` answers `false`
//! for both missing and expired records. Only the explicit accessors
//! (`country`, `user_type`) report `NotFound`, so callers can tell
//! "ineligible" apart from "unknown account".

use poi_core::AccountId;
use thiserror::Error;

/// Errors from identity registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Issuance input was malformed. Registry state is unchanged.
    #[error("invalid issuance argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input.
        reason: String,
    },

    /// No identity record exists for the account.
    #[error("no identity record for account {account}")]
    NotFound {
        /// The account that was queried.
        account: AccountId,
    },
}
