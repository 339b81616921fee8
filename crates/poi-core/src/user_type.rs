//! # User Classification
//!
//! Defines the `UserType` enum carried on every identity record. Set at
//! issuance; immutable thereafter unless the identity is reissued.
//!
//! A single enum with exhaustive `match` everywhere — adding a
//! classification forces every consumer to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// The classification of an identity holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// An individual retail participant.
    Retail,
    /// A regulated institutional participant.
    Institutional,
    /// A platform operator account.
    Operator,
}

impl UserType {
    /// All user types in canonical order.
    pub fn all() -> &'static [UserType] {
        &[Self::Retail, Self::Institutional, Self::Operator]
    }

    /// The snake_case string identifier for this classification.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Institutional => "institutional",
            Self::Operator => "operator",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ValidationError;

    /// Parse a user type from its snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retail" => Ok(Self::Retail),
            "institutional" => Ok(Self::Institutional),
            "operator" => Ok(Self::Operator),
            other => Err(ValidationError::UnknownUserType(other.to_string())),
        }
    }
}
