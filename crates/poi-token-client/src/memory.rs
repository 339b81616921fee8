//! # In-Memory Token Ledger
//!
//! A deterministic [`FungibleToken`] implementation for tests and
//! development. Balances live in a single locked map; transfers debit the
//! treasury account bound at construction.
//!
//! ## Harness Surface
//!
//! `mint` and `approve` are harness-side provisioning, not part of the
//! [`FungibleToken`] trait — the distributor never calls them. They model
//! the funding precondition: before a batch runs, someone must have
//! funded the treasury and authorized spending from it.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use poi_core::{AccountId, TokenAmount};

use crate::token::{FungibleToken, TokenError};

struct Ledger {
    balances: HashMap<AccountId, TokenAmount>,
    /// Spending authorization remaining on this handle.
    allowance: TokenAmount,
    /// When set, every transfer is refused. Failure injection for
    /// batch-isolation tests.
    refuse_transfers: bool,
    /// Recipients whose transfers are refused individually. Failure
    /// injection that leaves the rest of a batch unaffected.
    refused_recipients: HashSet<AccountId>,
}

/// An in-memory fungible-token ledger spending from one treasury account.
pub struct InMemoryToken {
    treasury: AccountId,
    ledger: Mutex<Ledger>,
}

impl InMemoryToken {
    /// Create an empty ledger whose transfers spend from `treasury`.
    ///
    /// The treasury starts unfunded and unauthorized; call
    /// [`mint`](Self::mint) and [`approve`](Self::approve) before
    /// transferring.
    pub fn new(treasury: AccountId) -> Self {
        Self {
            treasury,
            ledger: Mutex::new(Ledger {
                balances: HashMap::new(),
                allowance: TokenAmount::ZERO,
                refuse_transfers: false,
                refused_recipients: HashSet::new(),
            }),
        }
    }

    /// The treasury account this handle spends from.
    pub fn treasury(&self) -> &AccountId {
        &self.treasury
    }

    /// Credit `amount` to `account` out of thin air (harness-side).
    pub fn mint(&self, account: &AccountId, amount: TokenAmount) {
        let mut ledger = self.ledger.lock();
        let balance = ledger.balances.entry(account.clone()).or_default();
        // Saturating: a harness that mints past u128::MAX gets the cap,
        // not a poisoned lock.
        *balance = balance.checked_add(amount).unwrap_or(TokenAmount::new(u128::MAX));
    }

    /// Authorize spending of up to `amount` from the treasury
    /// (harness-side, replaces any prior authorization).
    pub fn approve(&self, amount: TokenAmount) {
        self.ledger.lock().allowance = amount;
    }

    /// Refuse every subsequent transfer. Failure injection for tests.
    pub fn refuse_transfers(&self) {
        self.ledger.lock().refuse_transfers = true;
    }

    /// Refuse subsequent transfers to one recipient only; transfers to
    /// every other account proceed normally. Failure injection for tests
    /// that need a failure in the middle of an otherwise healthy batch.
    pub fn refuse_transfers_to(&self, account: &AccountId) {
        self.ledger.lock().refused_recipients.insert(account.clone());
    }
}

impl FungibleToken for InMemoryToken {
    fn transfer(&self, to: &AccountId, amount: TokenAmount) -> Result<(), TokenError> {
        let mut ledger = self.ledger.lock();

        if ledger.refuse_transfers {
            return Err(TokenError::TransferRejected {
                reason: "transfers refused by token service".to_string(),
            });
        }

        if ledger.refused_recipients.contains(to) {
            return Err(TokenError::TransferRejected {
                reason: format!("transfers to {to} refused by token service"),
            });
        }

        let remaining = ledger.allowance;
        if remaining < amount {
            return Err(TokenError::InsufficientAllowance {
                required: amount,
                remaining,
            });
        }

        let available = ledger
            .balances
            .get(&self.treasury)
            .copied()
            .unwrap_or_default();
        let debited = available
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientFunds {
                required: amount,
                available,
            })?;

        // All checks passed; apply both sides and burn the allowance.
        ledger.allowance = remaining.checked_sub(amount).unwrap_or_default();
        ledger.balances.insert(self.treasury.clone(), debited);
        let credited = ledger
            .balances
            .entry(to.clone())
            .or_default()
            .checked_add(amount)
            .unwrap_or(TokenAmount::new(u128::MAX));
        ledger.balances.insert(to.clone(), credited);
        Ok(())
    }

    fn balance_of(&self, account: &AccountId) -> TokenAmount {
        self.ledger
            .lock()
            .balances
            .get(account)
            .copied()
            .unwrap_or_default()
    }

    fn adapter_name(&self) -> &str {
        "InMemoryToken"
    }
}
