//! Expense submission flow
//!
//! One form submission: validate every field, record the expense if the form
//! is clean, then show the new card and the refreshed balances of the whole
//! roster.

use tracing::warn;

use crate::display::Renderer;
use crate::error::SplitResult;
use crate::models::Expense;
use crate::services::balance::account_summaries;
use crate::services::Session;
use crate::validation::{validate, ExpenseForm, ValidationErrors};

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Recorded { participant: String, expense: Expense },
    Rejected(ValidationErrors),
}

impl Submission {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

/// Validate and record a form, rendering the result
///
/// A rejected form is not an error: it comes back as
/// `Submission::Rejected` after the messages have been rendered. `Err` means
/// the renderer failed.
pub fn submit<R: Renderer + ?Sized>(
    session: &mut Session,
    form: &ExpenseForm,
    renderer: &mut R,
) -> SplitResult<Submission> {
    let valid = match validate(form, session.participants()) {
        Ok(valid) => valid,
        Err(errors) => {
            warn!(
                participant = %form.participant,
                errors = errors.len(),
                "expense rejected"
            );
            renderer.render_errors(&errors)?;
            return Ok(Submission::Rejected(errors));
        }
    };

    let payer = session.record_expense(&valid.participant, valid.expense.clone())?;
    renderer.render_expense_card(payer, &valid.expense)?;

    let summaries = account_summaries(session);
    renderer.render_account_summaries(&summaries)?;

    Ok(Submission::Recorded {
        participant: valid.participant,
        expense: valid.expense,
    })
}
