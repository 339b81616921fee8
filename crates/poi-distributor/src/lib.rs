//! # poi-distributor — Identity-Gated Batch Distribution
//!
//! Pays a uniform token amount to every eligible recipient in a batch,
//! consulting the identity registry per recipient and skipping anyone
//! without a valid identity. Optionally restricts the batch further to a
//! requested jurisdiction.
//!
//! ## Batch Independence
//!
//! Recipients are processed sequentially in input order, and each
//! recipient's outcome is isolated: an ineligible recipient or a failed
//! transfer never aborts the batch or influences a sibling's outcome. The
//! full per-recipient result comes back in a [`DistributionReport`] —
//! eligibility and transfer outcomes are collected, never thrown.
//!
//! ## Statelessness
//!
//! The distributor persists nothing across calls. Each batch is a fresh
//! evaluation over current registry state; eligibility is checked at the
//! moment of transfer within one synchronous pass. Retrying a failed
//! recipient is the caller's job, with the same call and a narrowed
//! recipient list.

pub mod distributor;
pub mod outcome;

pub use distributor::Distributor;
pub use outcome::{DistributionReport, RecipientOutcome};
