//! Expense form validation
//!
//! Checks the four raw fields of an expense form. Every field is checked and
//! all problems are reported together; nothing is recorded unless the whole
//! form is valid.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Expense, Money, Participant};

/// Placeholder shown by an unselected participant picker
pub const NO_PARTICIPANT: &str = "---";

/// Largest accepted amount, in cents
pub const MAX_AMOUNT_CENTS: i64 = 100_000;

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\s]{1,20}$").expect("static regex should not panic")
});

// Integer part admits 1000 so that 1000.00 reaches the range check.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]{0,2}|1000)(\.[0-9]{2})?$").expect("static regex should not panic")
});

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("static regex should not panic")
});

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub participant: String,
    pub title: String,
    pub amount: String,
    pub date: String,
}

impl ExpenseForm {
    /// Build a form from its four fields
    pub fn new(
        participant: impl Into<String>,
        title: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            participant: participant.into(),
            title: title.into(),
            amount: amount.into(),
            date: date.into(),
        }
    }
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Select a participant")]
    MissingParticipant,

    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("Enter a title")]
    MissingTitle,

    #[error("Invalid title. Use 1-20 letters, digits or spaces.")]
    InvalidTitle,

    #[error("Enter an amount")]
    MissingAmount,

    #[error("Invalid amount. It must be between 0.00 and 1000.00.")]
    InvalidAmount,

    #[error("The amount must be between 0.00 and 1000.00.")]
    AmountOutOfRange,

    #[error("Enter a date")]
    MissingDate,

    #[error("Invalid date. It must use the format dd/mm/yyyy.")]
    InvalidDate,
}

impl FieldError {
    /// Name of the form field this error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingParticipant | Self::UnknownParticipant(_) => "participant",
            Self::MissingTitle | Self::InvalidTitle => "title",
            Self::MissingAmount | Self::InvalidAmount | Self::AmountOutOfRange => "amount",
            Self::MissingDate | Self::InvalidDate => "date",
        }
    }
}

/// Every problem found in one form, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Human-readable messages, one per rejected field
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Check whether a given field was rejected
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

/// A form that passed validation, ready to be recorded
#[derive(Debug, Clone, PartialEq)]
pub struct ValidExpense {
    /// Name of the paying participant, known to be on the roster
    pub participant: String,
    pub expense: Expense,
}

/// Validate a form against the session roster
pub fn validate(form: &ExpenseForm, roster: &[Participant]) -> Result<ValidExpense, ValidationErrors> {
    let mut errors = Vec::new();

    if let Err(e) = check_participant(&form.participant, roster) {
        errors.push(e);
    }
    if let Err(e) = check_title(&form.title) {
        errors.push(e);
    }
    let amount = match check_amount(&form.amount) {
        Ok(amount) => Some(amount),
        Err(e) => {
            errors.push(e);
            None
        }
    };
    if let Err(e) = check_date(&form.date) {
        errors.push(e);
    }

    match amount {
        Some(amount) if errors.is_empty() => Ok(ValidExpense {
            participant: form.participant.trim().to_string(),
            expense: Expense::new(form.title.clone(), amount, form.date.clone()),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

fn check_participant(participant: &str, roster: &[Participant]) -> Result<(), FieldError> {
    let participant = participant.trim();
    if participant.is_empty() || participant == NO_PARTICIPANT {
        return Err(FieldError::MissingParticipant);
    }
    if !roster.iter().any(|p| p.matches_name(participant)) {
        return Err(FieldError::UnknownParticipant(participant.to_string()));
    }
    Ok(())
}

fn check_title(title: &str) -> Result<(), FieldError> {
    if title.is_empty() {
        return Err(FieldError::MissingTitle);
    }
    if !TITLE_PATTERN.is_match(title) {
        return Err(FieldError::InvalidTitle);
    }
    Ok(())
}

fn check_amount(amount: &str) -> Result<Money, FieldError> {
    if amount.is_empty() {
        return Err(FieldError::MissingAmount);
    }
    if !AMOUNT_PATTERN.is_match(amount) {
        return Err(FieldError::InvalidAmount);
    }
    let money = Money::parse(amount).map_err(|_| FieldError::InvalidAmount)?;
    if !(0..=MAX_AMOUNT_CENTS).contains(&money.cents()) {
        return Err(FieldError::AmountOutOfRange);
    }
    Ok(money)
}

fn check_date(date: &str) -> Result<(), FieldError> {
    if date.is_empty() {
        return Err(FieldError::MissingDate);
    }
    if !DATE_PATTERN.is_match(date) {
        return Err(FieldError::InvalidDate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn roster() -> Vec<Participant> {
        vec![
            Participant::new("Bob Esponja", "bob.png"),
            Participant::new("Patricio", "patricio.png"),
        ]
    }

    fn form(amount: &str) -> ExpenseForm {
        ExpenseForm::new("Patricio", "Lunch 2", amount, "05/03/2024")
    }

    #[test]
    fn test_valid_form() {
        let valid = validate(&form("12.50"), &roster()).unwrap();
        assert_eq!(valid.participant, "Patricio");
        assert_eq!(valid.expense.title, "Lunch 2");
        assert_eq!(valid.expense.amount.cents(), 1250);
        assert_eq!(valid.expense.date, "05/03/2024");
    }

    #[test]
    fn test_amount_boundaries() {
        assert!(validate(&form("0"), &roster()).is_ok());
        assert!(validate(&form("0.00"), &roster()).is_ok());
        assert!(validate(&form("999.99"), &roster()).is_ok());
        assert_eq!(
            validate(&form("1000.00"), &roster()).unwrap().expense.amount.cents(),
            100_000
        );
        assert!(validate(&form("1000"), &roster()).is_ok());

        let err = validate(&form("1000.01"), &roster()).unwrap_err();
        assert_eq!(err.errors(), &[FieldError::AmountOutOfRange]);
    }

    #[test]
    fn test_amount_pattern_rejections() {
        for amount in ["-1", "01", "1.5", "1.234", "1001", "12,50", " 12", "abc", "1e3"] {
            let err = validate(&form(amount), &roster()).unwrap_err();
            assert_eq!(err.errors(), &[FieldError::InvalidAmount], "amount {amount:?}");
        }
        let err = validate(&form(""), &roster()).unwrap_err();
        assert_eq!(err.errors(), &[FieldError::MissingAmount]);
    }

    #[test]
    fn test_title_rules() {
        let mut f = form("10.00");
        f.title = "Lunch!".into();
        assert_eq!(validate(&f, &roster()).unwrap_err().errors(), &[FieldError::InvalidTitle]);

        f.title = "A".repeat(21);
        assert_eq!(validate(&f, &roster()).unwrap_err().errors(), &[FieldError::InvalidTitle]);

        f.title = "A".repeat(20);
        assert!(validate(&f, &roster()).is_ok());

        f.title = String::new();
        assert_eq!(validate(&f, &roster()).unwrap_err().errors(), &[FieldError::MissingTitle]);
    }

    #[test]
    fn test_date_rules() {
        let mut f = form("10.00");
        f.date = "5/3/24".into();
        assert_eq!(validate(&f, &roster()).unwrap_err().errors(), &[FieldError::InvalidDate]);

        // Not checked against the calendar
        f.date = "99/99/2024".into();
        assert!(validate(&f, &roster()).is_ok());

        f.date = "2024-03-05".into();
        assert_eq!(validate(&f, &roster()).unwrap_err().errors(), &[FieldError::InvalidDate]);

        f.date = String::new();
        assert_eq!(validate(&f, &roster()).unwrap_err().errors(), &[FieldError::MissingDate]);
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        let mut f = form("10.00");
        f.date = "٠٥/٠٣/٢٠٢٤".into();
        assert!(validate(&f, &roster()).unwrap_err().has_field("date"));
    }

    #[test]
    fn test_participant_rules() {
        let mut f = form("10.00");
        f.participant = String::new();
        assert_eq!(validate(&f, &roster()).unwrap_err().errors(), &[FieldError::MissingParticipant]);

        f.participant = NO_PARTICIPANT.into();
        assert_eq!(validate(&f, &roster()).unwrap_err().errors(), &[FieldError::MissingParticipant]);

        f.participant = "Gary".into();
        assert_eq!(
            validate(&f, &roster()).unwrap_err().errors(),
            &[FieldError::UnknownParticipant("Gary".into())]
        );
    }

    #[test]
    fn test_all_errors_collected_in_field_order() {
        let f = ExpenseForm::new("", "Lunch!", "-1", "5/3/24");
        let err = validate(&f, &roster()).unwrap_err();
        assert_eq!(
            err.errors(),
            &[
                FieldError::MissingParticipant,
                FieldError::InvalidTitle,
                FieldError::InvalidAmount,
                FieldError::InvalidDate,
            ]
        );
        assert_eq!(
            err.to_string(),
            "Select a participant\n\
             Invalid title. Use 1-20 letters, digits or spaces.\n\
             Invalid amount. It must be between 0.00 and 1000.00.\n\
             Invalid date. It must use the format dd/mm/yyyy."
        );
    }

    #[test]
    fn test_empty_form() {
        let err = validate(&ExpenseForm::default(), &roster()).unwrap_err();
        assert_eq!(err.len(), 4);
        for field in ["participant", "title", "amount", "date"] {
            assert!(err.has_field(field));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Any two-decimal amount below 1000 is accepted and keeps its exact cents.
        #[test]
        fn two_decimal_amounts_are_accepted(amount in "(0|[1-9][0-9]{0,2})\\.[0-9]{2}") {
            let (whole, fraction) = amount.split_once('.').unwrap();
            let expected = whole.parse::<i64>().unwrap() * 100 + fraction.parse::<i64>().unwrap();

            let valid = validate(&form(&amount), &roster()).unwrap();
            prop_assert_eq!(valid.expense.amount.cents(), expected);
        }

        /// Amounts above 1000.00 never get through, whichever check stops them.
        #[test]
        fn amounts_above_limit_are_rejected(cents in (MAX_AMOUNT_CENTS + 1)..10_000_000i64) {
            let amount = format!("{}.{:02}", cents / 100, cents % 100);
            let errors = validate(&form(&amount), &roster()).unwrap_err();
            prop_assert!(errors.has_field("amount"));
        }
    }
}
