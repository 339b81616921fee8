//! # poi-token-client — Fungible Token Service Boundary
//!
//! The distributor pays recipients through an external fungible-token
//! service. This crate defines the adapter interface for that service and
//! a deterministic in-memory implementation for tests and development.
//!
//! ## Architecture
//!
//! The [`FungibleToken`] trait abstracts over the token backend.
//! Production deployments implement it against the live token service of
//! the host environment; test environments use [`InMemoryToken`]. This
//! separation lets the distribution logic compose token transfers without
//! coupling to a specific ledger.
//!
//! ## Funding Model
//!
//! A `FungibleToken` handle is bound to the holdings it spends from (the
//! treasury). The distributor never approves allowances on anyone's
//! behalf — it relies on having been pre-funded or pre-authorized by the
//! harness or deployment layer before a batch runs.

pub mod memory;
pub mod token;

pub use memory::InMemoryToken;
pub use token::{FungibleToken, TokenError};
