//! Balance calculations
//!
//! Equal-split accounting: every participant's fair share is the session
//! total divided by the roster size. Debt is the distance from that share.
//! Nothing is cached; every call recomputes from the recorded expenses.

use serde::Serialize;
use tracing::debug;

use crate::models::{Money, Participant};
use crate::services::Session;

/// Computed balance for one participant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub participant: String,
    #[serde(skip)]
    pub avatar: String,
    pub expense_count: usize,
    /// Sum of the expenses this participant paid
    pub total_paid: Money,
    /// Positive: owes money. Negative: has paid more than their share.
    pub debt: f64,
}

impl AccountSummary {
    pub fn owes(&self) -> bool {
        self.debt > 0.0
    }
}

/// Sum of a participant's expenses
pub fn total_paid(participant: &Participant) -> Money {
    participant.total_paid()
}

/// Session total divided by the number of participants
pub fn equal_share(session: &Session) -> f64 {
    session.total().as_f64() / session.participant_count() as f64
}

/// Equal share minus what the participant paid
pub fn debt(session: &Session, participant: &Participant) -> f64 {
    equal_share(session) - total_paid(participant).as_f64()
}

/// Summary for a single participant
pub fn account_summary(session: &Session, participant: &Participant) -> AccountSummary {
    AccountSummary {
        participant: participant.name.clone(),
        avatar: participant.avatar.clone(),
        expense_count: participant.expense_count(),
        total_paid: total_paid(participant),
        debt: debt(session, participant),
    }
}

/// Summaries for the whole roster, in roster order
pub fn account_summaries(session: &Session) -> Vec<AccountSummary> {
    let summaries: Vec<AccountSummary> = session
        .participants()
        .iter()
        .map(|p| account_summary(session, p))
        .collect();

    debug!(
        participants = summaries.len(),
        total = %session.total(),
        "account summaries recomputed"
    );

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn session() -> Session {
        Session::new(vec![
            Participant::new("Bob Esponja", ""),
            Participant::new("Calamardo", ""),
            Participant::new("Patricio", ""),
        ])
        .unwrap()
    }

    fn add(session: &mut Session, who: &str, cents: i64) {
        session
            .record_expense(who, Expense::new("Item", Money::from_cents(cents), "01/01/2024"))
            .unwrap();
    }

    #[test]
    fn test_no_expenses_means_no_debt() {
        let session = session();
        for summary in account_summaries(&session) {
            assert_eq!(summary.debt, 0.0);
            assert!(summary.total_paid.is_zero());
        }
    }

    #[test]
    fn test_single_payer() {
        let mut session = session();
        add(&mut session, "Bob Esponja", 3000);

        let bob = session.get("Bob Esponja").unwrap();
        let pat = session.get("Patricio").unwrap();
        assert!((debt(&session, bob) - -20.0).abs() < TOLERANCE);
        assert!((debt(&session, pat) - 10.0).abs() < TOLERANCE);
        assert!((equal_share(&session) - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_uneven_split_keeps_fractions() {
        let mut session = session();
        add(&mut session, "Calamardo", 1000);

        let summaries = account_summaries(&session);
        assert!((summaries[0].debt - 10.0 / 3.0).abs() < TOLERANCE);
        assert!((summaries[1].debt - (10.0 / 3.0 - 10.0)).abs() < TOLERANCE);
        assert!(summaries[0].owes());
        assert!(!summaries[1].owes());
    }

    #[test]
    fn test_debts_sum_to_zero() {
        let mut session = session();
        let additions = [
            ("Bob Esponja", 1999),
            ("Patricio", 100_000),
            ("Calamardo", 1),
            ("Bob Esponja", 33_333),
            ("Patricio", 0),
            ("Calamardo", 71_017),
        ];

        for (who, cents) in additions {
            add(&mut session, who, cents);
            let total: f64 = account_summaries(&session).iter().map(|s| s.debt).sum();
            assert!(total.abs() < 1e-6, "debts sum to {total}");
        }
    }

    #[test]
    fn test_summary_order_and_counts() {
        let mut session = session();
        add(&mut session, "Patricio", 500);
        add(&mut session, "Patricio", 250);

        let summaries = account_summaries(&session);
        let names: Vec<&str> = summaries.iter().map(|s| s.participant.as_str()).collect();
        assert_eq!(names, vec!["Bob Esponja", "Calamardo", "Patricio"]);
        assert_eq!(summaries[2].expense_count, 2);
        assert_eq!(summaries[2].total_paid, Money::from_cents(750));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// After any sequence of additions the debts cancel out.
        #[test]
        fn debts_always_sum_to_zero(
            additions in prop::collection::vec((0usize..3, 0i64..=100_000i64), 0..30)
        ) {
            let mut session = session();
            for (who, cents) in additions {
                let name = session.participants()[who].name.clone();
                add(&mut session, &name, cents);

                let total: f64 = account_summaries(&session).iter().map(|s| s.debt).sum();
                prop_assert!(total.abs() < 1e-6, "debts sum to {}", total);
            }
        }
    }
}
