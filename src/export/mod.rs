//! Machine-readable session summaries
//!
//! Snapshot of the session (balances and every recorded expense) written as
//! JSON or YAML. Output goes to a writer; nothing is read back.

pub mod json;
pub mod yaml;

pub use json::export_summary_json;
pub use yaml::export_summary_yaml;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Money;
use crate::services::balance::{account_summaries, equal_share, AccountSummary};
use crate::services::Session;

/// One recorded expense in the snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseRecord {
    pub participant: String,
    pub title: String,
    pub amount: Money,
    pub date: String,
    pub recorded_at: DateTime<Utc>,
}

/// Full snapshot of a session
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport {
    pub generated_at: DateTime<Utc>,
    pub app_version: String,
    pub currency_symbol: String,
    /// Sum of all expenses, in cents
    pub total: Money,
    pub equal_share: f64,
    pub participants: Vec<AccountSummary>,
    pub expenses: Vec<ExpenseRecord>,
}

impl SummaryExport {
    pub fn from_session(session: &Session, currency_symbol: &str) -> Self {
        let expenses = session
            .expenses()
            .map(|(participant, expense)| ExpenseRecord {
                participant: participant.name.clone(),
                title: expense.title.clone(),
                amount: expense.amount,
                date: expense.date.clone(),
                recorded_at: expense.recorded_at,
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: currency_symbol.to_string(),
            total: session.total(),
            equal_share: equal_share(session),
            participants: account_summaries(session),
            expenses,
        }
    }
}
