use serde::{Deserialize, Serialize};

pub mod betslip;
pub mod config;
pub mod money;
pub mod placement;
pub mod stake;

pub use betslip::{Betslip, BetslipAction, BetslipSummary};
pub use config::{ConfigError, DisplayConfig};
pub use placement::{BetslipReceipt, PlacementError};
pub use stake::StakeInput;

/// One selection in a betslip. `id` is the only key the slip uses for lookups.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    pub id: String,
    pub selection: String,
    pub odds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stake: Option<f64>,
    pub event_name: String,
    pub market_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Bet {
    pub fn new(
        id: impl Into<String>,
        selection: impl Into<String>,
        odds: f64,
        event_name: impl Into<String>,
        market_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            selection: selection.into(),
            odds,
            stake: None,
            event_name: event_name.into(),
            market_name: market_name.into(),
            description: None,
        }
    }

    pub fn with_stake(mut self, stake: f64) -> Self {
        self.stake = Some(stake);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Stake counted towards totals; an unentered stake counts as zero.
    pub fn staked(&self) -> f64 {
        self.stake.unwrap_or(0.0)
    }

    pub fn returns(&self) -> f64 {
        self.staked() * self.odds
    }
}
