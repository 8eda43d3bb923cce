//! Account summary formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::MoneyFormat;
use crate::services::balance::AccountSummary;
use crate::services::Session;

/// Format a debt with two decimals, never showing "-0.00"
pub fn format_debt(debt: f64, fmt: &MoneyFormat) -> String {
    let rounded = (debt * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    fmt.decorate(&format!("{:.2}", rounded))
}

/// Format the account card for one participant
pub fn format_account_summary(summary: &AccountSummary, fmt: &MoneyFormat) -> String {
    format!(
        "{}\n  Has paid {}\n  Debt: {}\n",
        summary.participant,
        fmt.money(summary.total_paid),
        format_debt(summary.debt, fmt)
    )
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Participant")]
    participant: String,
    #[tabled(rename = "Expenses")]
    expenses: usize,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Debt")]
    debt: String,
}

/// Format all account summaries as a table
pub fn format_summary_table(summaries: &[AccountSummary], fmt: &MoneyFormat) -> String {
    if summaries.is_empty() {
        return "No participants.".to_string();
    }

    let rows = summaries.iter().map(|s| SummaryRow {
        participant: s.participant.clone(),
        expenses: s.expense_count,
        paid: fmt.money(s.total_paid),
        debt: format_debt(s.debt, fmt),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "Participant")]
    name: String,
    #[tabled(rename = "Avatar")]
    avatar: String,
}

/// Format the session roster
pub fn format_roster(session: &Session) -> String {
    let rows = session.participants().iter().map(|p| RosterRow {
        name: p.name.clone(),
        avatar: if p.avatar.is_empty() {
            "-".to_string()
        } else {
            p.avatar.clone()
        },
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
