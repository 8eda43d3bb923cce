//! Expense model
//!
//! A single recorded payment. Expenses are only built from a validated form,
//! so the fields here are trusted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A payment made by one participant on behalf of the group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-text title (1-20 letters, digits or spaces)
    pub title: String,

    /// Amount paid, 0.00 to 1000.00
    pub amount: Money,

    /// Date as entered, dd/mm/yyyy (not checked against the calendar)
    pub date: String,

    /// When the expense was recorded in this session
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense stamped with the current time
    pub fn new(title: impl Into<String>, amount: Money, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount,
            date: date.into(),
            recorded_at: Utc::now(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.title, self.amount)
    }
}
