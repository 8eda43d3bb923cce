//! Configuration module for splitpot
//!
//! - Path resolution for the settings file
//! - User settings (currency display, participant roster)

pub mod paths;
pub mod settings;

pub use paths::SplitPaths;
pub use settings::{ParticipantConfig, Settings};
