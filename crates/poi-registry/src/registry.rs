//! # The Identity Registry
//!
//! The shared, in-memory record store behind the registry's public
//! contract. Writes (`issue_identity`) replace whole records under a
//! write lock; queries take a read lock and never mutate, so any number
//! of readers may run without coordination.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use poi_core::{AccountId, CountryCode, Timestamp, UserType};

use crate::attribute::{AttributeExpiries, ATTRIBUTE_KIND_COUNT};
use crate::error::RegistryError;
use crate::record::IdentityRecord;

/// Arguments for issuing (or reissuing) an identity.
///
/// `expiries` uses the upstream positional encoding: a 4-element array in
/// canonical attribute-kind order (liveliness, primary-ID, country,
/// competency). Every expiry must be strictly in the future at issuance
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueIdentityArgs {
    /// The account receiving the identity.
    pub account: AccountId,
    /// Classification of the holder.
    pub user_type: UserType,
    /// Proof-of-liveliness claim.
    pub proof_of_liveliness: bool,
    /// Whether this account is the holder's primary identity.
    pub primary_id: bool,
    /// Registered jurisdiction.
    pub country_code: CountryCode,
    /// Per-attribute expiries in canonical kind order.
    pub expiries: [Timestamp; ATTRIBUTE_KIND_COUNT],
    /// Opaque metadata pointer stored verbatim on the record.
    pub token_uri: String,
}

/// Diagnostic view of an account's standing in the registry.
///
/// Eligibility callers should use [`IdentityRegistry::has_id`], which
/// collapses `Missing` and `Expired` into `false`. This tri-state exists
/// so operators can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityStatus {
    /// No record has ever been issued for the account.
    Missing,
    /// A record exists but at least one attribute has expired.
    Expired,
    /// A record exists and every attribute is unexpired.
    Valid,
}

impl std::fmt::Display for IdentityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "Missing"),
            Self::Expired => write!(f, "Expired"),
            Self::Valid => write!(f, "Valid"),
        }
    }
}

/// The canonical record store of verified identities.
///
/// Cheaply cloneable — all clones share the same underlying store, so a
/// distributor and a provisioning layer can hold handles to the same
/// registry. The registry is the sole owner of identity state; nothing
/// outside this type mutates records.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    inner: Arc<RwLock<HashMap<AccountId, IdentityRecord>>>,
}

impl IdentityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue an identity for `args.account`, overwriting any existing
    /// record. Reissuance is the only way to change a record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidArgument`] if any expiry is not
    /// strictly in the future at issuance time. The registry is unchanged
    /// on failure.
    pub fn issue_identity(&self, args: IssueIdentityArgs) -> Result<(), RegistryError> {
        self.issue_identity_at(args, Timestamp::now())
    }

    /// [`issue_identity`](Self::issue_identity) with an explicit issuance
    /// instant, for callers that manage their own clock.
    pub fn issue_identity_at(
        &self,
        args: IssueIdentityArgs,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        let expiries = AttributeExpiries::from_array(args.expiries);
        expiries.validate_future(now)?;

        let record = IdentityRecord {
            account: args.account.clone(),
            user_type: args.user_type,
            country_code: args.country_code,
            proof_of_liveliness: args.proof_of_liveliness,
            primary_id: args.primary_id,
            expiries,
            token_uri: args.token_uri,
            issued_at: now,
        };

        // Whole-record replace under the write lock: readers see either
        // the old record or the new one, never a mix.
        let previous = self.inner.write().insert(args.account.clone(), record);

        debug!(
            account = %args.account,
            reissued = previous.is_some(),
            expires_at = %expiries.earliest(),
            "identity issued"
        );
        Ok(())
    }

    /// Whether `account` holds a valid (non-expired) identity right now.
    ///
    /// Missing and expired records both answer `false`; this query never
    /// errors.
    pub fn has_id(&self, account: &AccountId) -> bool {
        self.has_id_at(account, Timestamp::now())
    }

    /// [`has_id`](Self::has_id) evaluated at an explicit instant.
    pub fn has_id_at(&self, account: &AccountId, now: Timestamp) -> bool {
        self.inner
            .read()
            .get(account)
            .is_some_and(|record| record.is_valid_at(now))
    }

    /// The registered country of `account`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record exists. An expired
    /// record still answers — the country classification is a statement of
    /// record, not of eligibility.
    pub fn country(&self, account: &AccountId) -> Result<CountryCode, RegistryError> {
        self.inner
            .read()
            .get(account)
            .map(|record| record.country_code.clone())
            .ok_or_else(|| RegistryError::NotFound {
                account: account.clone(),
            })
    }

    /// The registered classification of `account`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record exists.
    pub fn user_type(&self, account: &AccountId) -> Result<UserType, RegistryError> {
        self.inner
            .read()
            .get(account)
            .map(|record| record.user_type)
            .ok_or_else(|| RegistryError::NotFound {
                account: account.clone(),
            })
    }

    /// A clone of the full record for `account`, if one exists.
    pub fn record(&self, account: &AccountId) -> Option<IdentityRecord> {
        self.inner.read().get(account).cloned()
    }

    /// Diagnostic standing of `account` right now.
    pub fn status(&self, account: &AccountId) -> IdentityStatus {
        self.status_at(account, Timestamp::now())
    }

    /// [`status`](Self::status) evaluated at an explicit instant.
    pub fn status_at(&self, account: &AccountId, now: Timestamp) -> IdentityStatus {
        match self.inner.read().get(account) {
            None => IdentityStatus::Missing,
            Some(record) if record.is_valid_at(now) => IdentityStatus::Valid,
            Some(_) => IdentityStatus::Expired,
        }
    }

    /// Number of issued records (valid or expired).
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no identities have been issued.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
