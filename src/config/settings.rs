//! User settings for splitpot
//!
//! Holds display preferences and the participant roster a session starts
//! with. Expenses themselves are never written here.

use serde::{Deserialize, Serialize};

use super::paths::SplitPaths;
use crate::error::SplitError;
use crate::models::Participant;

/// One roster entry as stored in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantConfig {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

impl ParticipantConfig {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

impl From<&ParticipantConfig> for Participant {
    fn from(config: &ParticipantConfig) -> Self {
        Participant::new(config.name.trim(), config.avatar.clone())
    }
}

/// User settings for splitpot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Render the symbol after the amount ("12.50€") instead of before
    #[serde(default = "default_symbol_after_amount")]
    pub symbol_after_amount: bool,

    /// Participants every session starts with
    #[serde(default = "default_roster")]
    pub roster: Vec<ParticipantConfig>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_symbol_after_amount() -> bool {
    true
}

fn default_roster() -> Vec<ParticipantConfig> {
    vec![
        ParticipantConfig::new("Bob Esponja", "./img/usuarios/bob_esponja.png"),
        ParticipantConfig::new("Calamardo", "./img/usuarios/calamardo.png"),
        ParticipantConfig::new("Patricio", "./img/usuarios/patricio.png"),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            symbol_after_amount: default_symbol_after_amount(),
            roster: default_roster(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SplitPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - `split init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitPaths) -> Result<(), SplitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Fresh participants for a new session
    pub fn participants(&self) -> Vec<Participant> {
        self.roster.iter().map(Participant::from).collect()
    }
}
