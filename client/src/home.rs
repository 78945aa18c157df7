use anyhow::Context;
use common::{Bet, DisplayConfig};
use yew::prelude::*;

use crate::betslip::BetslipView;

const SAMPLE_BETS: &str = include_str!("../sample_bets.json");
const DISPLAY_CONFIG: &str = include_str!("../display_config.json");

pub fn sample_bets() -> anyhow::Result<Vec<Bet>> {
    serde_json::from_str(SAMPLE_BETS).context("bundled sample bets are malformed")
}

pub fn display_config() -> anyhow::Result<DisplayConfig> {
    DisplayConfig::from_json(DISPLAY_CONFIG).context("bundled display config is invalid")
}

#[function_component]
pub fn HomeMessage() -> Html {
    let bets = use_memo((), |_| {
        sample_bets().unwrap_or_else(|err| {
            log::error!("{err:#}");
            Vec::new()
        })
    });
    let config = use_memo((), |_| {
        display_config().unwrap_or_else(|err| {
            log::error!("{err:#}");
            DisplayConfig::default()
        })
    });
    let on_place_bets = Callback::from(|receipt: common::BetslipReceipt| {
        log::info!("receipt for {} bets", receipt.bets.len());
    });

    html! {
        <BetslipView bets={(*bets).clone()} config={(*config).clone()} {on_place_bets} />
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeMessageIconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn HomeMessageIcon(props: &HomeMessageIconProps) -> Html {
    html! {
        <span class={classes!("home-message-icon", props.class.clone())}>{ "👋" }</span>
    }
}
