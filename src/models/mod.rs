//! Core data models for splitpot
//!
//! Participants, the expenses they paid for, and the money type both use.

pub mod expense;
pub mod money;
pub mod participant;

pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use participant::Participant;
