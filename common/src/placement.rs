use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Bet, Betslip, BetslipSummary};

#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    #[error("betslip is empty")]
    EmptySlip,
    #[error("bet {bet_id} has an invalid stake of {stake}")]
    InvalidStake { bet_id: String, stake: f64 },
    #[error("bet {bet_id} has invalid odds of {odds}")]
    InvalidOdds { bet_id: String, odds: f64 },
    #[error("no bet has a stake entered")]
    NothingStaked,
}

/// The bets that would be committed, with totals over exactly those bets.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BetslipReceipt {
    pub bets: Vec<Bet>,
    pub summary: BetslipSummary,
}

impl Betslip {
    /// Checks the slip and builds a receipt. Never mutates the slip.
    pub fn place_bets(&self) -> Result<BetslipReceipt, PlacementError> {
        if self.is_empty() {
            return Err(PlacementError::EmptySlip);
        }

        for bet in self.bets() {
            if let Some(stake) = bet.stake {
                if !stake.is_finite() || stake < 0.0 {
                    return Err(PlacementError::InvalidStake {
                        bet_id: bet.id.clone(),
                        stake,
                    });
                }
            }
        }

        let staked: Betslip = self
            .bets()
            .iter()
            .filter(|bet| bet.staked() > 0.0)
            .cloned()
            .collect();

        if let Some(bet) = staked
            .bets()
            .iter()
            .find(|bet| !bet.odds.is_finite() || bet.odds <= 0.0)
        {
            return Err(PlacementError::InvalidOdds {
                bet_id: bet.id.clone(),
                odds: bet.odds,
            });
        }

        if staked.is_empty() {
            return Err(PlacementError::NothingStaked);
        }

        let summary = staked.summary();
        log::info!(
            "placing {} bets, stake {} for returns {}",
            staked.len(),
            summary.total_stake,
            summary.potential_returns
        );
        Ok(BetslipReceipt {
            bets: staked.bets().to_vec(),
            summary,
        })
    }
}
