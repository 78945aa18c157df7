/// Outcome of sanitising one edit of a stake text field.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StakeInput {
    Amount(f64),
    /// Field emptied; the bet goes back to "not yet entered".
    Cleared,
    /// Edit ignored, the previous stake stays.
    Rejected,
}

impl StakeInput {
    /// The stake to forward to the slip, `None` when the edit should be dropped.
    pub fn into_stake(self) -> Option<Option<f64>> {
        match self {
            StakeInput::Amount(amount) => Some(Some(amount)),
            StakeInput::Cleared => Some(None),
            StakeInput::Rejected => None,
        }
    }
}

/// Keeps digits and `.` only.
pub fn strip(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Text holding more than one separator after stripping is rejected outright
/// rather than repaired.
pub fn sanitize(raw: &str) -> StakeInput {
    let numeric = strip(raw);
    if numeric.is_empty() {
        return StakeInput::Cleared;
    }
    if numeric.matches('.').count() > 1 {
        return StakeInput::Rejected;
    }

    let whole = numeric.trim_end_matches('.');
    let normalised = match whole {
        "" => "0".to_string(),
        w if w.starts_with('.') => format!("0{w}"),
        w => w.to_string(),
    };

    match normalised.parse::<f64>() {
        Ok(amount) if amount.is_finite() => StakeInput::Amount(amount),
        _ => {
            log::warn!("stake text {raw:?} does not fit a finite amount");
            StakeInput::Rejected
        }
    }
}
