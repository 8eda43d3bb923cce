//! Rendering surface for recorded expenses and balances
//!
//! `Renderer` is the seam between the calculation core and whatever shows
//! the results. The submission flow calls it after every accepted or rejected
//! form.

use std::io::Write;

use super::{format_account_summary, format_expense_card, format_summary_table, MoneyFormat};
use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Participant};
use crate::services::balance::AccountSummary;
use crate::validation::ValidationErrors;

/// Presentation adapter consumed by the submission flow
pub trait Renderer {
    /// Show a newly recorded expense
    fn render_expense_card(&mut self, participant: &Participant, expense: &Expense) -> SplitResult<()>;

    /// Show one participant's totals
    fn render_account_summary(&mut self, summary: &AccountSummary) -> SplitResult<()>;

    /// Show a rejected form
    fn render_errors(&mut self, errors: &ValidationErrors) -> SplitResult<()>;

    /// Show the totals of the whole roster
    fn render_account_summaries(&mut self, summaries: &[AccountSummary]) -> SplitResult<()> {
        for summary in summaries {
            self.render_account_summary(summary)?;
        }
        Ok(())
    }
}

/// Plain-text renderer writing to any `Write` (stdout in the CLI)
pub struct TerminalRenderer<W: Write> {
    out: W,
    format: MoneyFormat,
    table: bool,
    errors: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, format: MoneyFormat) -> Self {
        Self {
            out,
            format,
            table: false,
            errors: true,
        }
    }

    /// Render the roster summary as one table instead of per-participant cards
    pub fn with_table(mut self, table: bool) -> Self {
        self.table = table;
        self
    }

    /// Skip rejected-form messages when the caller reports them elsewhere
    pub fn with_errors(mut self, errors: bool) -> Self {
        self.errors = errors;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> SplitResult<()> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| SplitError::Output(e.to_string()))
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_expense_card(&mut self, participant: &Participant, expense: &Expense) -> SplitResult<()> {
        let card = format_expense_card(participant, expense, &self.format);
        self.write(&card)
    }

    fn render_account_summary(&mut self, summary: &AccountSummary) -> SplitResult<()> {
        let card = format_account_summary(summary, &self.format);
        self.write(&card)
    }

    fn render_errors(&mut self, errors: &ValidationErrors) -> SplitResult<()> {
        if !self.errors {
            return Ok(());
        }
        let mut text = String::new();
        for message in errors.messages() {
            text.push_str(&format!("✗ {}\n", message));
        }
        self.write(&text)
    }

    fn render_account_summaries(&mut self, summaries: &[AccountSummary]) -> SplitResult<()> {
        if self.table {
            let table = format_summary_table(summaries, &self.format);
            self.write(&format!("{}\n", table))
        } else {
            for summary in summaries {
                self.render_account_summary(summary)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::validation::FieldError;

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_errors() {
        let mut renderer = TerminalRenderer::new(Vec::new(), MoneyFormat::default());
        let errors = ValidationErrors::from(vec![FieldError::MissingTitle, FieldError::InvalidDate]);
        renderer.render_errors(&errors).unwrap();

        assert_eq!(
            output(renderer),
            "✗ Enter a title\n✗ Invalid date. It must use the format dd/mm/yyyy.\n"
        );
    }

    #[test]
    fn test_render_errors_can_be_silenced() {
        let mut renderer = TerminalRenderer::new(Vec::new(), MoneyFormat::default()).with_errors(false);
        let errors = ValidationErrors::from(vec![FieldError::MissingTitle]);
        renderer.render_errors(&errors).unwrap();

        assert_eq!(output(renderer), "");
    }

    #[test]
    fn test_render_card() {
        let mut renderer = TerminalRenderer::new(Vec::new(), MoneyFormat::default());
        let participant = Participant::new("Ana", "");
        let expense = Expense::new("Bus", Money::from_cents(150), "09/09/2024");
        renderer.render_expense_card(&participant, &expense).unwrap();

        assert!(output(renderer).contains("Paid 1.50€ on 09/09/2024"));
    }

    #[test]
    fn test_summaries_as_cards_or_table() {
        let summaries = vec![AccountSummary {
            participant: "Ana".into(),
            avatar: String::new(),
            expense_count: 0,
            total_paid: Money::zero(),
            debt: 0.0,
        }];

        let mut cards = TerminalRenderer::new(Vec::new(), MoneyFormat::default());
        cards.render_account_summaries(&summaries).unwrap();
        assert_eq!(output(cards), "Ana\n  Has paid 0.00€\n  Debt: 0.00€\n");

        let mut table = TerminalRenderer::new(Vec::new(), MoneyFormat::default()).with_table(true);
        table.render_account_summaries(&summaries).unwrap();
        assert!(output(table).contains("Participant"));
    }
}
