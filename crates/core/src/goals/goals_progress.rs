use crate::errors::{Error, Result};

/// `current / target * 100`, unclamped.
///
/// A zero target yields a non-finite value; callers that render the number
/// should go through [`display_percent`].
pub fn progress_percent(current: f64, target: f64) -> f64 {
    (current / target) * 100.0
}

/// Rounded percentage clamped to `[0, 100]`; non-finite ratios show as 0.
pub fn display_percent(current: f64, target: f64) -> u8 {
    let raw = progress_percent(current, target);
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Parses a user-typed target amount such as `"$1,200.50"`.
pub fn parse_goal_amount(input: &str) -> Result<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err(Error::Validation("Goal amount is required".to_string()));
    }
    let amount: f64 = cleaned
        .parse()
        .map_err(|_| Error::Validation(format!("Goal amount '{}' is not a number", input)))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation(format!(
            "Goal amount must be greater than zero, got {}",
            input
        )));
    }
    Ok(amount)
}
