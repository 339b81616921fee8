//! # poi-core — Foundational Types for the Proof-of-Identity Stack
//!
//! This crate is the bedrock of the Proof-of-Identity Distribution Stack.
//! It defines the type-system primitives shared by the identity registry
//! and the distributor. Every other crate in the workspace depends on
//! `poi-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId`,
//!    `CountryCode`, `TokenAmount` — all newtypes with validated
//!    constructors. No bare strings for identifiers, no bare integers for
//!    amounts.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so attribute-expiry comparisons are
//!    unambiguous across the stack.
//!
//! 3. **Single `UserType` enum.** One definition, exhaustive `match`
//!    everywhere. Adding a classification forces every consumer to handle
//!    it at compile time.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `poi-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod account;
pub mod amount;
pub mod country;
pub mod error;
pub mod temporal;
pub mod user_type;

// Re-export primary types for ergonomic imports.
pub use account::AccountId;
pub use amount::TokenAmount;
pub use country::CountryCode;
pub use error::ValidationError;
pub use temporal::Timestamp;
pub use user_type::UserType;
