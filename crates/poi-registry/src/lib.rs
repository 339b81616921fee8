//! # poi-registry — The Identity Registry
//!
//! The canonical owner of verified-identity state. Each account has at
//! most one [`IdentityRecord`] carrying its classification, country,
//! boolean claims, and one expiry per tracked attribute. The registry
//! answers the eligibility queries the distributor depends on.
//!
//! ## Attribute Expiries
//!
//! The registry tracks exactly four attribute categories
//! ([`AttributeKind`]). Each carries its own expiry; an attribute is
//! valid at instant `now` iff `now < expiry`. An identity is eligible
//! ([`IdentityRegistry::has_id`]) iff a record exists **and** every
//! attribute is unexpired — absence and expiry are indistinguishable to
//! eligibility callers, and distinguishable only through the diagnostic
//! [`IdentityRegistry::status`] query.
//!
//! ## Ownership
//!
//! The registry is the sole writer of identity state. Consumers
//! (the distributor included) hold a shared handle and only read.
//! Writes replace whole records atomically; a reader never observes a
//! half-written record.

pub mod attribute;
pub mod error;
pub mod record;
pub mod registry;

pub use attribute::{AttributeExpiries, AttributeKind, ATTRIBUTE_KIND_COUNT};
pub use error::RegistryError;
pub use record::IdentityRecord;
pub use registry::{IdentityRegistry, IdentityStatus, IssueIdentityArgs};
