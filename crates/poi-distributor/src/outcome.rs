//! # Distribution Outcomes
//!
//! Per-recipient outcomes and the batch report the distributor returns.
//! Skips are expected results of eligibility filtering, not errors;
//! transfer failures are recorded per recipient and never abort siblings.

use serde::{Deserialize, Serialize};

use poi_core::{AccountId, TokenAmount};

/// The outcome of one recipient's evaluation within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipientOutcome {
    /// The recipient was eligible and the transfer succeeded.
    Sent,
    /// The recipient holds no valid identity. Expected, silent skip.
    SkippedNoIdentity,
    /// The recipient holds a valid identity registered under a different
    /// country than the batch requested. Expected, silent skip.
    SkippedCountryMismatch,
    /// The recipient was eligible but the token service refused the
    /// transfer. The batch continued past it.
    TransferFailed {
        /// Description of the failure, from the token service.
        reason: String,
    },
}

impl RecipientOutcome {
    /// Whether the recipient actually received funds.
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Whether the recipient was skipped by eligibility filtering.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedNoIdentity | Self::SkippedCountryMismatch)
    }
}

impl std::fmt::Display for RecipientOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => write!(f, "Sent"),
            Self::SkippedNoIdentity => write!(f, "SkippedNoIdentity"),
            Self::SkippedCountryMismatch => write!(f, "SkippedCountryMismatch"),
            Self::TransferFailed { reason } => write!(f, "TransferFailed: {reason}"),
        }
    }
}

/// The full result of one distribution call: one outcome per input
/// recipient, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionReport {
    /// The uniform per-recipient amount this batch paid.
    amount: TokenAmount,
    /// Per-recipient outcomes, aligned with the input sequence.
    outcomes: Vec<(AccountId, RecipientOutcome)>,
    /// Total actually transferred (`amount` × sent recipients).
    total_sent: TokenAmount,
}

impl DistributionReport {
    pub(crate) fn new(
        amount: TokenAmount,
        outcomes: Vec<(AccountId, RecipientOutcome)>,
        total_sent: TokenAmount,
    ) -> Self {
        Self {
            amount,
            outcomes,
            total_sent,
        }
    }

    /// The uniform per-recipient amount of the batch.
    pub fn amount(&self) -> TokenAmount {
        self.amount
    }

    /// Per-recipient outcomes in input order.
    pub fn outcomes(&self) -> &[(AccountId, RecipientOutcome)] {
        &self.outcomes
    }

    /// The outcome for `account` (first occurrence, if the batch listed
    /// it more than once).
    pub fn outcome_for(&self, account: &AccountId) -> Option<&RecipientOutcome> {
        self.outcomes
            .iter()
            .find(|(candidate, _)| candidate == account)
            .map(|(_, outcome)| outcome)
    }

    /// Number of recipients that received funds.
    pub fn sent_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_sent()).count()
    }

    /// Number of recipients skipped by eligibility filtering.
    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_skipped()).count()
    }

    /// Number of eligible recipients whose transfer failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, RecipientOutcome::TransferFailed { .. }))
            .count()
    }

    /// Total amount actually transferred by the batch.
    pub fn total_sent(&self) -> TokenAmount {
        self.total_sent
    }

    /// Whether every recipient in the batch was paid.
    pub fn is_complete(&self) -> bool {
        self.sent_count() == self.outcomes.len()
    }

    /// Number of recipients in the batch.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
