use serde::{Deserialize, Serialize};

use crate::Bet;

/// Ordered bets for one session. Every mutation returns a fresh snapshot and
/// leaves the receiver untouched.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone)]
#[serde(transparent)]
pub struct Betslip {
    bets: Vec<Bet>,
}

/// Commands the presentation layer sends into the slip.
#[derive(Debug, PartialEq, Clone)]
pub enum BetslipAction {
    RemoveBet(String),
    UpdateStake(String, Option<f64>),
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct BetslipSummary {
    pub total_stake: f64,
    pub potential_returns: f64,
}

impl Betslip {
    /// Seeds the slip in the given order. Ids and odds are taken as given.
    pub fn new(initial: impl IntoIterator<Item = Bet>) -> Self {
        let bets: Vec<Bet> = initial.into_iter().collect();
        log::debug!("betslip initialised with {} bets", bets.len());
        Self { bets }
    }

    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    pub fn len(&self) -> usize {
        self.bets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    pub fn get(&self, bet_id: &str) -> Option<&Bet> {
        self.bets.iter().find(|bet| bet.id == bet_id)
    }

    fn position(&self, bet_id: &str) -> Option<usize> {
        self.bets.iter().position(|bet| bet.id == bet_id)
    }

    /// Drops the first bet with `bet_id`. Unknown ids yield an equal slip.
    pub fn remove_bet(&self, bet_id: &str) -> Self {
        let mut next = self.clone();
        match self.position(bet_id) {
            Some(index) => {
                next.bets.remove(index);
                log::debug!("removed bet {bet_id}, {} left", next.bets.len());
            }
            None => log::trace!("remove ignored, no bet {bet_id}"),
        }
        next
    }

    /// Replaces the stake of the first bet with `bet_id`. The value is stored
    /// as given; sanitising it is up to the caller.
    pub fn update_stake(&self, bet_id: &str, stake: Option<f64>) -> Self {
        let mut next = self.clone();
        match self.position(bet_id) {
            Some(index) => {
                next.bets[index].stake = stake;
                log::debug!("stake for bet {bet_id} set to {stake:?}");
            }
            None => log::trace!("stake update ignored, no bet {bet_id}"),
        }
        next
    }

    pub fn apply(&self, action: BetslipAction) -> Self {
        match action {
            BetslipAction::RemoveBet(bet_id) => self.remove_bet(&bet_id),
            BetslipAction::UpdateStake(bet_id, stake) => self.update_stake(&bet_id, stake),
        }
    }

    pub fn total_stake(&self) -> f64 {
        // folded from +0.0, an empty `sum()` of f64 yields -0.0
        self.bets.iter().map(Bet::staked).fold(0.0, |acc, v| acc + v)
    }

    pub fn potential_returns(&self) -> f64 {
        self.bets.iter().map(Bet::returns).fold(0.0, |acc, v| acc + v)
    }

    pub fn summary(&self) -> BetslipSummary {
        BetslipSummary {
            total_stake: self.total_stake(),
            potential_returns: self.potential_returns(),
        }
    }
}

impl FromIterator<Bet> for Betslip {
    fn from_iter<I: IntoIterator<Item = Bet>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::format_money;
    use crate::DisplayConfig;

    fn sample() -> Betslip {
        Betslip::new(vec![
            Bet::new(
                "1",
                "Manchester United to win",
                2.5,
                "Manchester United vs Liverpool",
                "Match Result",
            )
            .with_stake(10.0),
            Bet::new(
                "2",
                "Over 2.5 Goals",
                1.8,
                "Manchester United vs Liverpool",
                "Total Goals",
            )
            .with_stake(20.0),
        ])
    }

    fn ids(slip: &Betslip) -> Vec<&str> {
        slip.bets().iter().map(|bet| bet.id.as_str()).collect()
    }

    #[test]
    fn keeps_initial_order() {
        let slip = Betslip::new(vec![
            Bet::new("c", "C", 2.0, "e", "m"),
            Bet::new("a", "A", 2.0, "e", "m"),
            Bet::new("b", "B", 2.0, "e", "m"),
        ]);
        assert_eq!(ids(&slip), vec!["c", "a", "b"]);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let slip = sample();
        assert_eq!(slip.remove_bet("missing"), slip);
    }

    #[test]
    fn removes_exactly_the_matching_bet() {
        let slip = sample();
        let next = slip.remove_bet("1");
        assert_eq!(next.len(), slip.len() - 1);
        assert!(next.get("1").is_none());
        assert_eq!(ids(&next), vec!["2"]);
        // previous snapshot is untouched
        assert_eq!(slip.len(), 2);
    }

    #[test]
    fn removes_only_first_duplicate() {
        let slip = Betslip::new(vec![
            Bet::new("x", "first", 2.0, "e", "m"),
            Bet::new("x", "second", 3.0, "e", "m"),
        ]);
        let next = slip.remove_bet("x");
        assert_eq!(next.len(), 1);
        assert_eq!(next.bets()[0].selection, "second");
    }

    #[test]
    fn stake_update_touches_only_its_bet() {
        let slip = sample();
        let next = slip.update_stake("2", Some(5.5));

        let mut expected = slip.bets().to_vec();
        expected[1].stake = Some(5.5);
        assert_eq!(next.bets(), expected.as_slice());
    }

    #[test]
    fn stake_update_for_unknown_id_is_a_no_op() {
        let slip = sample();
        assert_eq!(slip.update_stake("nope", Some(99.0)), slip);
    }

    #[test]
    fn stake_can_be_cleared() {
        let next = sample().update_stake("1", None);
        assert_eq!(next.get("1").unwrap().stake, None);
        assert_eq!(next.total_stake(), 20.0);
    }

    #[test]
    fn negative_stake_is_stored_as_given() {
        let next = sample().update_stake("1", Some(-3.0));
        assert_eq!(next.get("1").unwrap().stake, Some(-3.0));
    }

    #[test]
    fn totals_for_two_bets() {
        let slip = sample();
        assert_eq!(slip.total_stake(), 30.0);
        assert!((slip.potential_returns() - 61.0).abs() < 1e-9);
    }

    #[test]
    fn empty_slip_has_zero_totals() {
        let slip = Betslip::new(Vec::new());
        assert!(slip.is_empty());
        assert_eq!(slip.summary(), BetslipSummary::default());
    }

    #[test]
    fn empty_totals_are_positive_zero() {
        let config = DisplayConfig::default();
        let emptied = sample().remove_bet("1").remove_bet("2");
        for slip in [Betslip::new(Vec::new()), emptied] {
            assert!(!slip.total_stake().is_sign_negative());
            assert!(!slip.potential_returns().is_sign_negative());
            assert_eq!(format_money(slip.total_stake(), &config), "£0.00");
            assert_eq!(format_money(slip.potential_returns(), &config), "£0.00");
        }
    }

    #[test]
    fn absent_stakes_count_as_zero() {
        let slip = Betslip::new(vec![
            Bet::new("1", "Home", 2.5, "e", "m"),
            Bet::new("2", "Away", 4.0, "e", "m").with_stake(2.0),
        ]);
        assert_eq!(slip.total_stake(), 2.0);
        assert_eq!(slip.potential_returns(), 8.0);
    }

    #[test]
    fn relative_order_survives_mixed_commands() {
        let slip = Betslip::new(
            ["a", "b", "c", "d", "e"]
                .into_iter()
                .map(|id| Bet::new(id, id, 2.0, "e", "m")),
        );
        let next = [
            BetslipAction::UpdateStake("d".into(), Some(1.0)),
            BetslipAction::RemoveBet("b".into()),
            BetslipAction::UpdateStake("a".into(), Some(3.0)),
            BetslipAction::RemoveBet("zzz".into()),
            BetslipAction::RemoveBet("e".into()),
        ]
        .into_iter()
        .fold(slip, |slip, action| slip.apply(action));

        assert_eq!(ids(&next), vec!["a", "c", "d"]);
        assert_eq!(next.total_stake(), 4.0);
    }

    #[test]
    fn serializes_as_plain_list() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[1]["id"], "2");
    }
}
