use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed display config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("decimal places must be at most {max}, got {got}")]
    TooManyDecimals { max: usize, got: usize },
}

/// Labels and number display for the betslip widget. Missing keys fall back
/// to the defaults.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub currency_symbol: String,
    pub decimal_places: usize,
    pub empty_message: String,
    pub place_bets_label: String,
}

impl DisplayConfig {
    pub const MAX_DECIMAL_PLACES: usize = 8;

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(ConfigError::TooManyDecimals {
                max: Self::MAX_DECIMAL_PLACES,
                got: config.decimal_places,
            });
        }
        Ok(config)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Betslip".into(),
            currency_symbol: "£".into(),
            decimal_places: 2,
            empty_message: "Your betslip is empty".into(),
            place_bets_label: "Place Bets".into(),
        }
    }
}
