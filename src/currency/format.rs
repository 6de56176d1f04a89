//! Price conversion and display formatting
//!
//! Pure functions over the registry: no state, no I/O. Negative and
//! non-finite amounts are rejected rather than clamped; a miscomputed
//! price must surface as an error, never as a plausible-looking label.
//!
//! Rendering uses a fixed locale-neutral convention: symbol prefix, comma
//! thousands grouping, dot decimal point, and the currency's minor-unit
//! precision (`"€50.00"`, `"¥1,235"`).

use super::registry::{Currency, CurrencyCode, CurrencyRegistry};
use crate::error::{Result, TourkitError};
use crate::types::Price;

/// Convert a base-currency amount into a target currency
///
/// Returns the raw converted amount without rounding; use [`format_price`]
/// for display strings.
pub fn convert_to(
    registry: &CurrencyRegistry,
    amount_in_base: Price,
    code: CurrencyCode,
) -> Result<Price> {
    if !amount_in_base.is_finite() || amount_in_base < 0.0 {
        return Err(TourkitError::InvalidAmount {
            amount: amount_in_base,
        });
    }

    let currency = registry.get(code)?;
    Ok(amount_in_base * currency.rate_to_base)
}

/// Format a base-currency amount as a display string in the target currency
pub fn format_price(
    registry: &CurrencyRegistry,
    amount_in_base: Price,
    code: CurrencyCode,
) -> Result<String> {
    let converted = convert_to(registry, amount_in_base, code)?;
    let currency = registry.get(code)?;
    Ok(render(currency, converted))
}

/// Render an already-converted amount with symbol, grouping, and precision
fn render(currency: &Currency, amount: f64) -> String {
    let scale = 10u64.pow(u32::from(currency.minor_units));
    // Work in integer minor units so float representation error cannot
    // leak into the rendered digits.
    let minor = (amount * scale as f64).round() as u64;
    let whole = group_thousands(minor / scale);

    if currency.minor_units == 0 {
        format!("{}{}", currency.symbol, whole)
    } else {
        format!(
            "{}{}.{:0width$}",
            currency.symbol,
            whole,
            minor % scale,
            width = usize::from(currency.minor_units)
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
