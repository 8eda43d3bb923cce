//! splitpot - split shared expenses from the terminal
//!
//! Record who paid for what and see how far each participant is from an
//! equal share of the total.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings (currency, roster)
//! - `error`: Custom error types
//! - `models`: Participants, expenses and the money type
//! - `validation`: Expense form validation
//! - `services`: Session, balance calculations, submission flow, CSV import
//! - `display`: The `Renderer` seam and terminal formatting
//! - `export`: JSON/YAML session summaries
//! - `logging`: Tracing setup
//! - `cli`: Command handlers for the `split` binary
//!
//! # Example
//!
//! ```rust
//! use splitpot::models::Participant;
//! use splitpot::services::{balance, Session};
//! use splitpot::validation::{validate, ExpenseForm};
//!
//! let mut session = Session::new(vec![
//!     Participant::new("Ana", ""),
//!     Participant::new("Luis", ""),
//! ])?;
//!
//! let form = ExpenseForm::new("Ana", "Dinner", "40.00", "05/03/2024");
//! let valid = validate(&form, session.participants()).map_err(splitpot::SplitError::from)?;
//! session.record_expense(&valid.participant, valid.expense)?;
//!
//! let luis = session.get("Luis")?;
//! assert_eq!(balance::debt(&session, luis), 20.0);
//! # Ok::<(), splitpot::SplitError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod validation;

pub use error::SplitError;
