//! CLI command handlers
//!
//! Bridges clap argument parsing with the session, submission and display
//! layers.

pub mod check;
pub mod import;
pub mod session;

pub use check::{handle_check_command, CheckArgs};
pub use import::{handle_import_command, ImportArgs, SummaryFormat};
pub use session::{handle_session_command, run_session};
