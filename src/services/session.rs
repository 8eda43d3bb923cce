//! Session service
//!
//! A session owns the roster for one run of the program and is the only way
//! to record an expense. It replaces a process-wide participant list: callers
//! pass the session explicitly.

use std::collections::HashSet;

use tracing::info;

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Money, Participant};

/// In-memory roster of participants and their expenses
#[derive(Debug, Clone)]
pub struct Session {
    participants: Vec<Participant>,
}

impl Session {
    /// Start a session with a fixed roster
    ///
    /// The roster must be non-empty and names must be non-empty and unique.
    pub fn new(participants: Vec<Participant>) -> SplitResult<Self> {
        if participants.is_empty() {
            return Err(SplitError::Config(
                "The roster needs at least one participant".into(),
            ));
        }

        let mut seen = HashSet::new();
        for participant in &participants {
            if participant.name.trim().is_empty() {
                return Err(SplitError::Config("Participant name cannot be empty".into()));
            }
            if !seen.insert(participant.name.as_str()) {
                return Err(SplitError::duplicate_participant(&participant.name));
            }
        }

        Ok(Self { participants })
    }

    /// Participants in roster order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Find a participant by exact name
    pub fn find(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.matches_name(name))
    }

    /// Get a participant by name, failing if it is not on the roster
    pub fn get(&self, name: &str) -> SplitResult<&Participant> {
        self.find(name)
            .ok_or_else(|| SplitError::participant_not_found(name))
    }

    /// Record an expense paid by `participant`
    ///
    /// Returns the participant as it stands after the addition.
    pub fn record_expense(&mut self, participant: &str, expense: Expense) -> SplitResult<&Participant> {
        let payer = self
            .participants
            .iter_mut()
            .find(|p| p.matches_name(participant))
            .ok_or_else(|| SplitError::participant_not_found(participant))?;

        info!(
            participant = %payer.name,
            title = %expense.title,
            amount = %expense.amount,
            date = %expense.date,
            "expense recorded"
        );
        payer.add_expense(expense);

        Ok(&*payer)
    }

    /// Sum of every expense across the roster
    pub fn total(&self) -> Money {
        self.participants.iter().map(Participant::total_paid).sum()
    }

    /// Number of expenses recorded across the roster
    pub fn expense_count(&self) -> usize {
        self.participants.iter().map(Participant::expense_count).sum()
    }

    /// All expenses with their payer, grouped by participant in roster order
    pub fn expenses(&self) -> impl Iterator<Item = (&Participant, &Expense)> + '_ {
        self.participants
            .iter()
            .flat_map(|p| p.expenses().iter().map(move |e| (p, e)))
    }
}
