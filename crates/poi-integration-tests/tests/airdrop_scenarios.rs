//! # Airdrop Scenario Tests
//!
//! End-to-end distribution scenarios over the full stack: eight test
//! accounts, identities issued for the first four (country "ng", two-year
//! expiries), a funded in-memory token, and a distributor bound to the
//! registry.

use poi_core::{AccountId, CountryCode, Timestamp, TokenAmount, UserType};
use poi_distributor::{Distributor, RecipientOutcome};
use poi_registry::{IdentityRegistry, IssueIdentityArgs, ATTRIBUTE_KIND_COUNT};
use poi_token_client::{FungibleToken, InMemoryToken};

/// 0.001 tokens at 18 decimals — the per-recipient payout.
const DROP: u128 = 1_000_000_000_000_000;
/// Treasury funding, comfortably above any batch total.
const FUNDING: u128 = 100_000_000_000_000_000;

struct Harness {
    registry: IdentityRegistry,
    distributor: Distributor,
    token: InMemoryToken,
}

fn user(n: usize) -> AccountId {
    AccountId::new(format!("user-{n}")).unwrap()
}

fn issue_args(account: AccountId, country: &str) -> IssueIdentityArgs {
    let expiry = Timestamp::now().plus_days(2 * 365);
    IssueIdentityArgs {
        account,
        user_type: UserType::Retail,
        proof_of_liveliness: true,
        primary_id: true,
        country_code: CountryCode::new(country).unwrap(),
        expiries: [expiry; ATTRIBUTE_KIND_COUNT],
        token_uri: "test-uri".to_string(),
    }
}

/// Identities for users 1-4 (country "ng"); users 5-8 unregistered.
fn setup() -> Harness {
    let registry = IdentityRegistry::new();
    for n in 1..=4 {
        registry.issue_identity(issue_args(user(n), "ng")).unwrap();
    }

    let treasury = AccountId::new("treasury").unwrap();
    let token = InMemoryToken::new(treasury.clone());
    token.mint(&treasury, TokenAmount::new(FUNDING));
    token.approve(TokenAmount::new(FUNDING));

    Harness {
        distributor: Distributor::new(registry.clone()),
        registry,
        token,
    }
}

// ---------------------------------------------------------------------------
// 1. Deployment wiring
// ---------------------------------------------------------------------------

#[test]
fn distributor_is_bound_to_the_registry() {
    let h = setup();
    // Same underlying store: a post-construction issuance is visible
    // through the distributor handle.
    h.registry.issue_identity(issue_args(user(9), "ng")).unwrap();
    assert!(h.distributor.has_id(&user(9)));
}

#[test]
fn users_1_to_4_have_ids() {
    let h = setup();
    for n in 1..=4 {
        assert!(h.distributor.has_id(&user(n)), "user-{n} should have an ID");
    }
}

#[test]
fn users_5_to_8_have_no_ids() {
    let h = setup();
    for n in 5..=8 {
        assert!(!h.distributor.has_id(&user(n)), "user-{n} should have no ID");
    }
}

// ---------------------------------------------------------------------------
// 2. distribute
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_all_registered_recipients_are_paid() {
    let h = setup();
    let batch = [user(1), user(2), user(3), user(4)];
    let report = h.distributor.distribute(&h.token, &batch, TokenAmount::new(DROP));

    // Uniform behavior across all positions, the first included.
    assert!(report.is_complete());
    for n in 1..=4 {
        assert_eq!(
            h.token.balance_of(&user(n)),
            TokenAmount::new(DROP),
            "user-{n} balance"
        );
    }
    assert_eq!(report.total_sent(), TokenAmount::new(4 * DROP));
}

#[test]
fn scenario_b_unregistered_recipients_receive_nothing() {
    let h = setup();
    let batch = [user(5), user(6), user(7), user(8)];
    let report = h.distributor.distribute(&h.token, &batch, TokenAmount::new(DROP));

    assert_eq!(report.sent_count(), 0);
    assert_eq!(report.skipped_count(), 4);
    for n in 5..=8 {
        assert_eq!(
            report.outcome_for(&user(n)),
            Some(&RecipientOutcome::SkippedNoIdentity)
        );
        assert_eq!(h.token.balance_of(&user(n)), TokenAmount::ZERO);
    }
    assert_eq!(h.token.balance_of(&AccountId::new("treasury").unwrap()), TokenAmount::new(FUNDING));
}

#[test]
fn scenario_c_mixed_batch_pays_only_id_holders() {
    let h = setup();
    let batch = [user(2), user(4), user(6), user(8)];
    let report = h.distributor.distribute(&h.token, &batch, TokenAmount::new(DROP));

    assert_eq!(h.token.balance_of(&user(2)), TokenAmount::new(DROP));
    assert_eq!(h.token.balance_of(&user(4)), TokenAmount::new(DROP));
    assert_eq!(h.token.balance_of(&user(6)), TokenAmount::ZERO);
    assert_eq!(h.token.balance_of(&user(8)), TokenAmount::ZERO);
    assert_eq!(report.sent_count(), 2);
    assert_eq!(report.skipped_count(), 2);
}

#[test]
fn skipped_recipients_do_not_disturb_their_neighbors() {
    let h = setup();
    // Ineligible recipients interleaved around eligible ones.
    let batch = [user(5), user(1), user(6), user(2), user(7)];
    let report = h.distributor.distribute(&h.token, &batch, TokenAmount::new(DROP));

    assert_eq!(report.sent_count(), 2);
    assert_eq!(h.token.balance_of(&user(1)), TokenAmount::new(DROP));
    assert_eq!(h.token.balance_of(&user(2)), TokenAmount::new(DROP));
    for n in [5, 6, 7] {
        assert_eq!(h.token.balance_of(&user(n)), TokenAmount::ZERO);
    }
}

#[test]
fn underfunded_treasury_fails_late_recipients_only() {
    let h = setup();
    // Re-authorize down to two payouts' worth.
    h.token.approve(TokenAmount::new(2 * DROP));

    let batch = [user(1), user(2), user(3), user(4)];
    let report = h.distributor.distribute(&h.token, &batch, TokenAmount::new(DROP));

    assert_eq!(report.sent_count(), 2);
    assert_eq!(report.failed_count(), 2);
    assert_eq!(h.token.balance_of(&user(1)), TokenAmount::new(DROP));
    assert_eq!(h.token.balance_of(&user(2)), TokenAmount::new(DROP));
    assert_eq!(h.token.balance_of(&user(3)), TokenAmount::ZERO);
    assert_eq!(h.token.balance_of(&user(4)), TokenAmount::ZERO);
    assert!(matches!(
        report.outcome_for(&user(3)),
        Some(RecipientOutcome::TransferFailed { .. })
    ));
}

// ---------------------------------------------------------------------------
// 3. distribute_by_country
// ---------------------------------------------------------------------------

#[test]
fn country_filter_pays_matching_jurisdiction_only() {
    let h = setup();
    // Users 11 and 12 are registered under "sg".
    for n in [11, 12] {
        h.registry.issue_identity(issue_args(user(n), "sg")).unwrap();
    }

    let batch = [user(1), user(11), user(2), user(12), user(5)];
    let report = h.distributor.distribute_by_country(
        &h.token,
        &batch,
        TokenAmount::new(DROP),
        &CountryCode::new("ng").unwrap(),
    );

    assert_eq!(h.token.balance_of(&user(1)), TokenAmount::new(DROP));
    assert_eq!(h.token.balance_of(&user(2)), TokenAmount::new(DROP));
    assert_eq!(h.token.balance_of(&user(11)), TokenAmount::ZERO);
    assert_eq!(h.token.balance_of(&user(12)), TokenAmount::ZERO);
    assert_eq!(
        report.outcome_for(&user(11)),
        Some(&RecipientOutcome::SkippedCountryMismatch)
    );
    assert_eq!(
        report.outcome_for(&user(5)),
        Some(&RecipientOutcome::SkippedNoIdentity)
    );
}

#[test]
fn country_filter_over_other_jurisdiction_pays_its_members() {
    let h = setup();
    for n in [11, 12] {
        h.registry.issue_identity(issue_args(user(n), "sg")).unwrap();
    }

    let batch = [user(1), user(11), user(12)];
    let report = h.distributor.distribute_by_country(
        &h.token,
        &batch,
        TokenAmount::new(DROP),
        &CountryCode::new("sg").unwrap(),
    );

    assert_eq!(report.sent_count(), 2);
    assert_eq!(h.token.balance_of(&user(1)), TokenAmount::ZERO);
    assert_eq!(h.token.balance_of(&user(11)), TokenAmount::new(DROP));
    assert_eq!(h.token.balance_of(&user(12)), TokenAmount::new(DROP));
}

// ---------------------------------------------------------------------------
// 4. Report shape
// ---------------------------------------------------------------------------

#[test]
fn report_serializes_with_per_recipient_outcomes() {
    let h = setup();
    let batch = [user(1), user(5)];
    let report = h.distributor.distribute(&h.token, &batch, TokenAmount::new(DROP));

    let json = serde_json::to_value(&report).unwrap();
    let outcomes = json["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0][0], "user-1");
    assert_eq!(outcomes[0][1], "Sent");
    assert_eq!(outcomes[1][1], "SkippedNoIdentity");
}

// ---------------------------------------------------------------------------
// 5. Expiry
// ---------------------------------------------------------------------------

#[test]
fn expired_identity_becomes_ineligible() {
    let registry = IdentityRegistry::new();
    let issued_at = Timestamp::parse("2026-08-01T00:00:00Z").unwrap();
    let expiry = issued_at.plus_days(30);

    registry
        .issue_identity_at(
            IssueIdentityArgs {
                account: user(1),
                user_type: UserType::Retail,
                proof_of_liveliness: true,
                primary_id: true,
                country_code: CountryCode::new("ng").unwrap(),
                expiries: [expiry; ATTRIBUTE_KIND_COUNT],
                token_uri: "test-uri".to_string(),
            },
            issued_at,
        )
        .unwrap();

    assert!(registry.has_id_at(&user(1), issued_at.plus_days(29)));
    assert!(!registry.has_id_at(&user(1), expiry));
    assert!(!registry.has_id_at(&user(1), expiry.plus_days(1)));
}

#[test]
fn reissuance_restores_eligibility() {
    let registry = IdentityRegistry::new();
    let distributor = Distributor::new(registry.clone());

    let issued_at = Timestamp::parse("2026-08-01T00:00:00Z").unwrap();
    let short = issued_at.plus_days(1);
    registry
        .issue_identity_at(
            IssueIdentityArgs {
                account: user(1),
                user_type: UserType::Retail,
                proof_of_liveliness: true,
                primary_id: true,
                country_code: CountryCode::new("ng").unwrap(),
                expiries: [short; ATTRIBUTE_KIND_COUNT],
                token_uri: "test-uri".to_string(),
            },
            issued_at,
        )
        .unwrap();

    let later = issued_at.plus_days(10);
    assert!(!registry.has_id_at(&user(1), later));

    // Reissue with fresh expiries; the distributor sees the new record.
    registry
        .issue_identity_at(issue_args(user(1), "ng"), later)
        .unwrap();
    assert!(distributor.has_id(&user(1)));
}
