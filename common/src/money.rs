use crate::DisplayConfig;

/// Rounds for display only; stored amounts keep full precision.
pub fn format_money(value: f64, config: &DisplayConfig) -> String {
    format!(
        "{}{:.*}",
        config.currency_symbol, config.decimal_places, value
    )
}

pub fn format_odds(odds: f64) -> String {
    // shortest representation that round-trips, so 2.5 stays "2.5"
    format!("{odds}")
}

/// Text to prefill a stake field with.
pub fn format_stake(stake: Option<f64>) -> String {
    stake.map(|s| format!("{s}")).unwrap_or_default()
}
