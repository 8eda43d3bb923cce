//! Service layer for splitpot
//!
//! Session state, balance calculations, and the submission flow that ties
//! validation, recording and rendering together.

pub mod balance;
pub mod import;
pub mod session;
pub mod submission;

pub use balance::AccountSummary;
pub use import::{import_csv, ImportResult, RejectedRow};
pub use session::Session;
pub use submission::{submit, Submission};
