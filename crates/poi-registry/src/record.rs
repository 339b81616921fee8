//! # Identity Records
//!
//! The per-account record the registry owns: classification, country,
//! boolean claims, per-attribute expiries, and the opaque metadata
//! pointer.

use serde::{Deserialize, Serialize};

use poi_core::{AccountId, CountryCode, Timestamp, UserType};

use crate::attribute::AttributeExpiries;

/// One verified identity, keyed by its account.
///
/// Created (and overwritten) exclusively by
/// [`IdentityRegistry::issue_identity`](crate::IdentityRegistry::issue_identity);
/// never implicitly deleted. An account with no record is simply absent
/// from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// The account this identity belongs to. Primary key.
    pub account: AccountId,
    /// Classification set at issuance; immutable unless reissued.
    pub user_type: UserType,
    /// Registered jurisdiction, used by country-filtered distribution.
    pub country_code: CountryCode,
    /// Proof-of-liveliness claim.
    pub proof_of_liveliness: bool,
    /// Whether this account is the holder's primary identity.
    pub primary_id: bool,
    /// Per-attribute expiries.
    pub expiries: AttributeExpiries,
    /// Opaque metadata pointer. Documentary only; never consulted by
    /// eligibility logic.
    pub token_uri: String,
    /// When this record was issued (or last reissued).
    pub issued_at: Timestamp,
}

impl IdentityRecord {
    /// Whether this identity is valid at `now`: every tracked attribute
    /// must be unexpired.
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        self.expiries.all_valid_at(now)
    }

    /// The instant at which this identity stops being eligible.
    pub fn expires_at(&self) -> Timestamp {
        self.expiries.earliest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeExpiries;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn record(expiries: AttributeExpiries) -> IdentityRecord {
        IdentityRecord {
            account: AccountId::new("user-1").unwrap(),
            user_type: UserType::Retail,
            country_code: CountryCode::new("ng").unwrap(),
            proof_of_liveliness: true,
            primary_id: true,
            expiries,
            token_uri: "ipfs://record-meta".to_string(),
            issued_at: ts("2026-08-01T00:00:00Z"),
        }
    }

    #[test]
    fn valid_while_all_attributes_unexpired() {
        let rec = record(AttributeExpiries::from_array([ts("2028-08-01T00:00:00Z"); 4]));
        assert!(rec.is_valid_at(ts("2027-08-01T00:00:00Z")));
        assert!(!rec.is_valid_at(ts("2028-08-01T00:00:00Z")));
    }

    #[test]
    fn one_expired_attribute_invalidates() {
        let future = ts("2028-08-01T00:00:00Z");
        let near = ts("2026-09-01T00:00:00Z");
        let rec = record(AttributeExpiries::from_parts(future, future, near, future));
        assert!(rec.is_valid_at(ts("2026-08-15T00:00:00Z")));
        assert!(!rec.is_valid_at(ts("2026-09-01T00:00:00Z")));
        assert_eq!(rec.expires_at(), near);
    }

    #[test]
    fn serde_roundtrip() {
        let rec = record(AttributeExpiries::from_array([ts("2028-08-01T00:00:00Z"); 4]));
        let json = serde_json::to_string(&rec).unwrap();
        let deser: IdentityRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, deser);
    }
}
