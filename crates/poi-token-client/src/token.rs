//! # Fungible Token Adapter Interface
//!
//! Defines the trait the distributor pays through, and the structured
//! errors a token backend can report.
//!
//! ## Integration Points
//!
//! - **transfer**: move an amount from the handle's backing holdings to a
//!   recipient
//! - **balance_of**: read an account's balance (absent accounts read as
//!   zero)

use poi_core::{AccountId, TokenAmount};

/// Errors from fungible-token service operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The backing holdings do not cover the requested amount.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        /// Amount the transfer needed.
        required: TokenAmount,
        /// Amount actually available to spend.
        available: TokenAmount,
    },

    /// The spending authorization does not cover the requested amount.
    #[error("insufficient allowance: required {required}, remaining {remaining}")]
    InsufficientAllowance {
        /// Amount the transfer needed.
        required: TokenAmount,
        /// Authorization remaining on the handle.
        remaining: TokenAmount,
    },

    /// The token service refused the transfer for a backend-specific reason.
    #[error("transfer rejected: {reason}")]
    TransferRejected {
        /// Description of the rejection.
        reason: String,
    },

    /// The token service is unreachable or failed internally.
    #[error("token service unavailable: {reason}")]
    ServiceUnavailable {
        /// Description of the outage or error.
        reason: String,
    },
}

/// Adapter trait for the external fungible-token service.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// threads behind an `Arc`. The trait is object-safe to support runtime
/// backend selection (mock vs. live).
pub trait FungibleToken: Send + Sync {
    /// Move `amount` from the holdings backing this handle to `to`.
    ///
    /// A failed transfer must leave all balances unchanged.
    fn transfer(&self, to: &AccountId, amount: TokenAmount) -> Result<(), TokenError>;

    /// The current balance of `account`. Accounts the ledger has never
    /// seen read as zero.
    fn balance_of(&self, account: &AccountId) -> TokenAmount;

    /// The human-readable name of this adapter implementation
    /// (e.g. "InMemoryToken", "HostLedgerV1").
    fn adapter_name(&self) -> &str;
}
