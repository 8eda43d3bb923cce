//! `split check`: validate a form without recording anything

use std::io::Write;

use clap::Args;

use crate::error::{SplitError, SplitResult};
use crate::services::Session;
use crate::validation::{validate, ExpenseForm};

/// Form fields to validate
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Participant who paid
    #[arg(short, long, default_value = "")]
    pub participant: String,
    /// Expense title
    #[arg(short, long, default_value = "")]
    pub title: String,
    /// Amount (0.00 - 1000.00)
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,
    /// Date (dd/mm/yyyy)
    #[arg(short, long, default_value = "")]
    pub date: String,
}

impl From<CheckArgs> for ExpenseForm {
    fn from(args: CheckArgs) -> Self {
        ExpenseForm::new(args.participant, args.title, args.amount, args.date)
    }
}

/// Validate the fields and print the verdict
///
/// Returns whether the form is valid.
pub fn handle_check_command<W: Write>(session: &Session, args: CheckArgs, out: &mut W) -> SplitResult<bool> {
    let form = ExpenseForm::from(args);

    let (text, valid) = match validate(&form, session.participants()) {
        Ok(_) => ("OK\n".to_string(), true),
        Err(errors) => (format!("{}\n", errors), false),
    };

    out.write_all(text.as_bytes())
        .map_err(|e| SplitError::Output(e.to_string()))?;

    Ok(valid)
}
