//! Participant model
//!
//! A person sharing expenses. Participants own the expenses they paid for;
//! the roster itself is fixed for the lifetime of a session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::money::Money;

/// A roster member and the expenses they have paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique name within the session
    pub name: String,

    /// Avatar reference, used only by renderers
    pub avatar: String,

    /// Expenses paid by this participant, in recording order
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl Participant {
    /// Create a participant with no expenses
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
            expenses: Vec::new(),
        }
    }

    /// Expenses paid by this participant
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Sum of every expense this participant paid
    pub fn total_paid(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Append an expense. Only the session records expenses, so every
    /// expense ends up owned by exactly one roster member.
    pub(crate) fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Check if this participant has the given name (exact match)
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_participant_has_no_expenses() {
        let p = Participant::new("Patricio", "./img/usuarios/patricio.png");
        assert_eq!(p.expense_count(), 0);
        assert!(p.total_paid().is_zero());
    }

    #[test]
    fn test_total_paid() {
        let mut p = Participant::new("Calamardo", "calamardo.png");
        p.add_expense(Expense::new("Clarinet", Money::from_cents(15000), "01/01/2024"));
        p.add_expense(Expense::new("Reeds", Money::from_cents(1275), "02/01/2024"));
        assert_eq!(p.total_paid(), Money::from_cents(16275));
        assert_eq!(p.expenses()[1].title, "Reeds");
    }

    #[test]
    fn test_matches_name_is_exact() {
        let p = Participant::new("Bob Esponja", "bob.png");
        assert!(p.matches_name("Bob Esponja"));
        assert!(!p.matches_name("bob esponja"));
        assert!(!p.matches_name("Bob"));
    }
}
