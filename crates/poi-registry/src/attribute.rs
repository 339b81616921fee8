//! # Identity Attributes & Expiries
//!
//! Defines the `AttributeKind` enum — the four tracked attribute
//! categories — and `AttributeExpiries`, the per-kind expiry map carried
//! on every identity record.
//!
//! ## Why an enum and not a positional array
//!
//! Upstream encodings pass expiries as a fixed 4-element array, which
//! invites silent misindexing: nothing stops slot 1 being read as slot 2.
//! Here the mapping is kind → timestamp with exhaustive `match` — adding
//! a fifth attribute category forces every consumer to handle it at
//! compile time. [`AttributeExpiries::from_array`] preserves the external
//! arity of four for callers that hold the positional form.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use poi_core::Timestamp;

use crate::error::RegistryError;

/// The four tracked attribute categories of an identity record.
///
/// Canonical order (and the slot order of the upstream 4-array encoding):
/// liveliness, primary-ID, country, competency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Proof-of-liveliness claim.
    Liveliness,
    /// Primary-identity claim (this account is the holder's primary identity).
    PrimaryId,
    /// Jurisdiction (country code) classification.
    Country,
    /// Competency rating, the fourth tracked category.
    Competency,
}

/// Total number of attribute kinds. Matches the upstream array arity.
pub const ATTRIBUTE_KIND_COUNT: usize = 4;

impl AttributeKind {
    /// All attribute kinds in canonical order.
    pub fn all() -> &'static [AttributeKind] {
        &[
            Self::Liveliness,
            Self::PrimaryId,
            Self::Country,
            Self::Competency,
        ]
    }

    /// The snake_case string identifier for this kind.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liveliness => "liveliness",
            Self::PrimaryId => "primary_id",
            Self::Country => "country",
            Self::Competency => "competency",
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKind {
    type Err = RegistryError;

    /// Parse an attribute kind from its snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liveliness" => Ok(Self::Liveliness),
            "primary_id" => Ok(Self::PrimaryId),
            "country" => Ok(Self::Country),
            "competency" => Ok(Self::Competency),
            other => Err(RegistryError::InvalidArgument {
                reason: format!("unknown attribute kind: {other:?}"),
            }),
        }
    }
}

/// The per-kind expiry map of an identity record.
///
/// One expiry per [`AttributeKind`]. An attribute is valid at instant
/// `now` iff `now < expiry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeExpiries {
    /// Expiry of the proof-of-liveliness claim.
    liveliness: Timestamp,
    /// Expiry of the primary-identity claim.
    primary_id: Timestamp,
    /// Expiry of the country classification.
    country: Timestamp,
    /// Expiry of the competency rating.
    competency: Timestamp,
}

impl AttributeExpiries {
    /// Build from a 4-element array in canonical kind order.
    ///
    /// This is the upstream positional encoding; the array index is
    /// interpreted via [`AttributeKind::all`] and never again after
    /// construction.
    pub fn from_array(expiries: [Timestamp; ATTRIBUTE_KIND_COUNT]) -> Self {
        let [liveliness, primary_id, country, competency] = expiries;
        Self {
            liveliness,
            primary_id,
            country,
            competency,
        }
    }

    /// Build from named per-kind expiries.
    pub fn from_parts(
        liveliness: Timestamp,
        primary_id: Timestamp,
        country: Timestamp,
        competency: Timestamp,
    ) -> Self {
        Self {
            liveliness,
            primary_id,
            country,
            competency,
        }
    }

    /// The expiry for one attribute kind.
    pub fn expiry(&self, kind: AttributeKind) -> Timestamp {
        match kind {
            AttributeKind::Liveliness => self.liveliness,
            AttributeKind::PrimaryId => self.primary_id,
            AttributeKind::Country => self.country,
            AttributeKind::Competency => self.competency,
        }
    }

    /// Whether one attribute is valid at `now` (`now < expiry`).
    pub fn is_valid_at(&self, kind: AttributeKind, now: Timestamp) -> bool {
        now < self.expiry(kind)
    }

    /// Whether every attribute is valid at `now`.
    pub fn all_valid_at(&self, now: Timestamp) -> bool {
        AttributeKind::all()
            .iter()
            .all(|kind| self.is_valid_at(*kind, now))
    }

    /// The earliest expiry across all kinds — the instant at which the
    /// identity as a whole stops being eligible.
    pub fn earliest(&self) -> Timestamp {
        AttributeKind::all()
            .iter()
            .map(|kind| self.expiry(*kind))
            .min()
            .unwrap_or(self.liveliness)
    }

    /// Validate that every expiry is strictly in the future at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidArgument`] naming the first
    /// offending kind in canonical order.
    pub fn validate_future(&self, now: Timestamp) -> Result<(), RegistryError> {
        for kind in AttributeKind::all() {
            if !self.is_valid_at(*kind, now) {
                return Err(RegistryError::InvalidArgument {
                    reason: format!(
                        "expiry for attribute {kind} is not in the future ({} <= {})",
                        self.expiry(*kind),
                        now
                    ),
                });
            }
        }
        Ok(())
    }
}
