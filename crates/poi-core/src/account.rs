//! # Account Identifiers
//!
//! Newtype for the principal identifier used across the stack. An
//! `AccountId` is the address-equivalent under which identity records are
//! keyed and token balances are held.
//!
//! ## Validation
//!
//! [`AccountId`] is validated to be non-empty at construction time. No
//! further format restrictions are imposed because account addressing
//! varies across host environments (hex addresses, bech32, test labels).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for AccountId -------------------------------------

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// The principal identifier for an account.
///
/// Identity records are keyed by `AccountId`, and the fungible-token
/// service resolves balances against the same identifier space.
///
/// # Validation
///
/// Must be a non-empty string. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account identifier from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAccountId`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidAccountId);
        }
        Ok(Self(trimmed))
    }

    /// Access the account identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
