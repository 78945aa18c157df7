use common::money::{format_money, format_odds, format_stake};
use common::{stake, Bet, Betslip, BetslipAction, BetslipReceipt, DisplayConfig, PlacementError};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

#[derive(Properties, PartialEq)]
pub struct BetCardProps {
    pub bet: Bet,
    pub on_remove: Callback<String>,
    pub on_update_stake: Callback<(String, Option<f64>)>,
}

/// One row of the slip. The stake field keeps its own text so a trailing
/// separator survives between keystrokes.
#[function_component]
pub fn BetCard(props: &BetCardProps) -> Html {
    let bet = &props.bet;
    let draft = use_state(|| format_stake(bet.stake));

    let onclick = {
        let id = bet.id.clone();
        props.on_remove.reform(move |_: MouseEvent| id.clone())
    };

    let oninput = {
        let draft = draft.clone();
        let id = bet.id.clone();
        let on_update_stake = props.on_update_stake.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            match stake::sanitize(&raw).into_stake() {
                Some(value) => {
                    draft.set(stake::strip(&raw));
                    on_update_stake.emit((id.clone(), value));
                }
                None => input.set_value(&draft),
            }
        })
    };

    html! {
        <div class="bet-card">
            <div class="bet-header">
                <div>
                    <div class="event-name">{ bet.event_name.clone() }</div>
                    <div class="market-name">{ bet.market_name.clone() }</div>
                    <div class="selection">{ bet.selection.clone() }</div>
                    { for bet.description.clone().map(|text| html! {
                        <div class="description">{ text }</div>
                    }) }
                </div>
                <button class="remove-button" aria-label="Remove bet" {onclick}>{ "✕" }</button>
            </div>
            <div class="bet-footer">
                <span class="odds">{ format_odds(bet.odds) }</span>
                <input
                    class="stake-input"
                    placeholder="Stake"
                    inputmode="decimal"
                    value={(*draft).clone()}
                    {oninput}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BetslipProps {
    pub bets: Vec<Bet>,
    #[prop_or_default]
    pub config: DisplayConfig,
    #[prop_or_default]
    pub on_remove_bet: Option<Callback<String>>,
    #[prop_or_default]
    pub on_update_stake: Option<Callback<(String, Option<f64>)>>,
    #[prop_or_default]
    pub on_place_bets: Option<Callback<BetslipReceipt>>,
}

pub struct BetslipView {
    slip: Betslip,
    placement: Option<Result<BetslipReceipt, PlacementError>>,
}

pub enum BetslipMessage {
    Command(BetslipAction),
    PlaceBets,
}

impl Component for BetslipView {
    type Message = BetslipMessage;
    type Properties = BetslipProps;

    // later changes to `bets` are ignored, the slip belongs to this view once mounted
    fn create(ctx: &Context<Self>) -> Self {
        Self {
            slip: Betslip::new(ctx.props().bets.iter().cloned()),
            placement: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            BetslipMessage::Command(action) => {
                match &action {
                    BetslipAction::RemoveBet(id) => {
                        if let Some(cb) = &props.on_remove_bet {
                            cb.emit(id.clone());
                        }
                    }
                    BetslipAction::UpdateStake(id, stake) => {
                        if let Some(cb) = &props.on_update_stake {
                            cb.emit((id.clone(), *stake));
                        }
                    }
                }
                self.slip = self.slip.apply(action);
                self.placement = None;
                true
            }
            BetslipMessage::PlaceBets => {
                let result = self.slip.place_bets();
                match &result {
                    Ok(receipt) => {
                        if let Some(cb) = &props.on_place_bets {
                            cb.emit(receipt.clone());
                        }
                    }
                    Err(err) => log::warn!("bets not placed: {err}"),
                }
                self.placement = Some(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        html! {
            <div class="betslip">
                <h2 class="title">{ config.title.clone() }</h2>
                <div class="scroll-view">
                    { match empty_message(&self.slip, config) {
                        Some(message) => html! { <p class="empty-text">{ message }</p> },
                        None => self.view_bets(ctx),
                    } }
                </div>
            </div>
        }
    }
}

impl BetslipView {
    fn view_bets(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let link = ctx.link();
        let on_remove =
            link.callback(|id: String| BetslipMessage::Command(BetslipAction::RemoveBet(id)));
        let on_update_stake = link.callback(|(id, stake): (String, Option<f64>)| {
            BetslipMessage::Command(BetslipAction::UpdateStake(id, stake))
        });
        let place_bets = link.callback(|_: MouseEvent| BetslipMessage::PlaceBets);

        html! {
            <>
                { for self.slip.bets().iter().map(|bet| html! {
                    <BetCard
                        key={bet.id.clone()}
                        bet={bet.clone()}
                        on_remove={on_remove.clone()}
                        on_update_stake={on_update_stake.clone()}
                    />
                }) }
                <div class="summary">
                    { for summary_rows(&self.slip, config).into_iter().map(|(label, value)| html! {
                        <div class="summary-row">
                            <span>{ label }</span>
                            <span>{ value }</span>
                        </div>
                    }) }
                    <button class="place-bet-button" onclick={place_bets}>
                        { config.place_bets_label.clone() }
                    </button>
                    { for self.placement.as_ref().map(|result| html! {
                        <p class="placement-status">{ placement_status(result, config) }</p>
                    }) }
                </div>
            </>
        }
    }
}

fn summary_rows(slip: &Betslip, config: &DisplayConfig) -> [(&'static str, String); 2] {
    let summary = slip.summary();
    [
        ("Total Stake:", format_money(summary.total_stake, config)),
        ("Potential Returns:", format_money(summary.potential_returns, config)),
    ]
}

/// The empty-state text, or `None` when the bet rows and summary should render.
fn empty_message<'a>(slip: &Betslip, config: &'a DisplayConfig) -> Option<&'a str> {
    slip.is_empty().then_some(config.empty_message.as_str())
}

fn placement_status(
    result: &Result<BetslipReceipt, PlacementError>,
    config: &DisplayConfig,
) -> String {
    match result {
        Ok(receipt) => format!(
            "{} bet(s) placed for {}",
            receipt.bets.len(),
            format_money(receipt.summary.total_stake, config)
        ),
        Err(err) => format!("Could not place bets: {err}"),
    }
}
