//! Forge configuration
//!
//! Luck constants and loop budgets, loadable from a JSON file. Missing
//! fields fall back to the defaults in [`crate::consts`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    ACTIVATION_CHANCE, A_CURSED, BIAS_LUCK, IM_LUCK, MAX_ACTIVATION_SAMPLES, MAX_RETRIES,
    WEIRD_LUCK,
};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for the artifact generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub bias_luck: u32,
    pub im_luck: u32,
    pub weird_luck: u32,
    pub activation_chance: u32,
    pub cursed_chance: u32,
    /// Re-roll budget for table outcomes that do not fit the item
    pub max_retries: u32,
    /// Sample budget for the generic activation table
    pub max_activation_samples: u32,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            bias_luck: BIAS_LUCK,
            im_luck: IM_LUCK,
            weird_luck: WEIRD_LUCK,
            activation_chance: ACTIVATION_CHANCE,
            cursed_chance: A_CURSED,
            max_retries: MAX_RETRIES,
            max_activation_samples: MAX_ACTIVATION_SAMPLES,
        }
    }
}

impl ForgeConfig {
    /// Load and validate a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: ForgeConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ForgeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Every luck value is a "1 in N" denominator and every budget must allow
    /// at least one attempt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("bias_luck", self.bias_luck),
            ("im_luck", self.im_luck),
            ("weird_luck", self.weird_luck),
            ("activation_chance", self.activation_chance),
            ("cursed_chance", self.cursed_chance),
            ("max_retries", self.max_retries),
            ("max_activation_samples", self.max_activation_samples),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}
