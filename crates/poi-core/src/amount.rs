//! # Token Amounts
//!
//! Newtype for fungible-token amounts, expressed in the token's smallest
//! unit (wei-style). For example, 0.001 tokens with 18 decimals =
//! 1_000_000_000_000_000.
//!
//! ## Arithmetic
//!
//! All arithmetic is checked. Overflow never panics; it surfaces as
//! `None` and the caller decides how to report it. `u128` gives enough
//! headroom that a batch total of 1e15-unit payouts cannot realistically
//! overflow, but the ledger code still goes through the checked paths.

use serde::{Deserialize, Serialize};

/// A fungible-token amount in the token's smallest unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TokenAmount(u128);

impl TokenAmount {
    /// The zero amount.
    pub const ZERO: TokenAmount = TokenAmount(0);

    /// Create an amount from a smallest-unit value.
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    /// The smallest-unit value.
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Whether this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. `None` on overflow.
    pub fn checked_add(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_add(other.0).map(TokenAmount)
    }

    /// Checked subtraction. `None` if `other` exceeds `self`.
    pub fn checked_sub(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_sub(other.0).map(TokenAmount)
    }

    /// Checked multiplication by a count (e.g. amount × eligible recipients).
    pub fn checked_mul(self, count: u64) -> Option<TokenAmount> {
        self.0.checked_mul(u128::from(count)).map(TokenAmount)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
