//! # The Distributor
//!
//! Pays a uniform amount to the eligible subset of a recipient batch.
//! Bound at construction to exactly one identity registry, fixed for its
//! lifetime; the registry is only ever read.

use tracing::{debug, info, warn};

use poi_core::{AccountId, CountryCode, TokenAmount};
use poi_registry::IdentityRegistry;
use poi_token_client::FungibleToken;

use crate::outcome::{DistributionReport, RecipientOutcome};

/// An identity-gated batch payer.
///
/// Stateless across calls: each [`distribute`](Self::distribute) is a
/// fresh evaluation over the bound registry's current state. Holdings are
/// external — the distributor relies on the token handle having been
/// pre-funded or pre-authorized for `amount × eligible recipients`.
#[derive(Debug, Clone)]
pub struct Distributor {
    registry: IdentityRegistry,
}

impl Distributor {
    /// Bind a distributor to the one registry it trusts for eligibility.
    pub fn new(registry: IdentityRegistry) -> Self {
        Self { registry }
    }

    /// The bound registry handle.
    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }

    /// Whether `account` holds a valid identity in the bound registry.
    ///
    /// Pass-through convenience for callers that only hold a distributor
    /// handle.
    pub fn has_id(&self, account: &AccountId) -> bool {
        self.registry.has_id(account)
    }

    /// Pay `amount` to every recipient with a valid identity.
    ///
    /// Recipients are processed sequentially in input order. Each outcome
    /// is independent: a recipient without a valid identity is skipped
    /// and a failed transfer is recorded, in both cases continuing with
    /// the rest of the batch.
    pub fn distribute(
        &self,
        token: &dyn FungibleToken,
        recipients: &[AccountId],
        amount: TokenAmount,
    ) -> DistributionReport {
        self.run_batch(token, recipients, amount, None)
    }

    /// [`distribute`](Self::distribute) restricted to one jurisdiction:
    /// a recipient is paid only if it holds a valid identity **and** its
    /// registered country equals `country`.
    pub fn distribute_by_country(
        &self,
        token: &dyn FungibleToken,
        recipients: &[AccountId],
        amount: TokenAmount,
        country: &CountryCode,
    ) -> DistributionReport {
        self.run_batch(token, recipients, amount, Some(country))
    }

    fn run_batch(
        &self,
        token: &dyn FungibleToken,
        recipients: &[AccountId],
        amount: TokenAmount,
        country: Option<&CountryCode>,
    ) -> DistributionReport {
        info!(
            recipients = recipients.len(),
            amount = %amount,
            token = token.adapter_name(),
            country = country.map(CountryCode::as_str).unwrap_or("*"),
            "distribution batch started"
        );

        let mut outcomes = Vec::with_capacity(recipients.len());
        let mut total_sent = TokenAmount::ZERO;

        for recipient in recipients {
            let outcome = self.pay_one(token, recipient, amount, country);
            if outcome.is_sent() {
                total_sent = match total_sent.checked_add(amount) {
                    Some(sum) => sum,
                    // Unreachable through any real ledger (it cannot hold
                    // more than the amount range), but the report must
                    // never silently disagree with its outcomes.
                    None => {
                        warn!(recipient = %recipient, "batch total overflow; total_sent saturates");
                        TokenAmount::new(u128::MAX)
                    }
                };
            }
            outcomes.push((recipient.clone(), outcome));
        }

        let report = DistributionReport::new(amount, outcomes, total_sent);
        info!(
            sent = report.sent_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            total_sent = %report.total_sent(),
            "distribution batch finished"
        );
        report
    }

    /// Evaluate and pay a single recipient. Eligibility is checked at the
    /// moment of transfer; nothing is pre-computed or queued.
    fn pay_one(
        &self,
        token: &dyn FungibleToken,
        recipient: &AccountId,
        amount: TokenAmount,
        country: Option<&CountryCode>,
    ) -> RecipientOutcome {
        if !self.registry.has_id(recipient) {
            debug!(recipient = %recipient, "skipped: no valid identity");
            return RecipientOutcome::SkippedNoIdentity;
        }

        if let Some(requested) = country {
            match self.registry.country(recipient) {
                Ok(registered) if &registered == requested => {}
                Ok(registered) => {
                    debug!(
                        recipient = %recipient,
                        registered = %registered,
                        requested = %requested,
                        "skipped: country mismatch"
                    );
                    return RecipientOutcome::SkippedCountryMismatch;
                }
                // has_id just held, so a record existed; treat a racing
                // reissue that removed visibility as no identity.
                Err(_) => return RecipientOutcome::SkippedNoIdentity,
            }
        }

        match token.transfer(recipient, amount) {
            Ok(()) => RecipientOutcome::Sent,
            Err(err) => {
                warn!(recipient = %recipient, error = %err, "transfer failed");
                RecipientOutcome::TransferFailed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
