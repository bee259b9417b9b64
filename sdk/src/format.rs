//! Formatting of the raw numbers returned by the OpenSea API.
//!
//! All functions here are total: any `f64` produces a printable string.
//! Decimal places are rounded half away from zero, so `0.125` becomes `0.13`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of wei in one ETH.
pub const WEI_PER_ETH: f64 = 1e18;

/// Convert a wei-equivalent amount to ETH with 4 decimal places.
///
/// Zero and NaN (which is what a missing or garbage field ends up as) are
/// printed as `0 ETH` without decimals.
pub fn wei_to_eth(wei: f64) -> String {
    if wei == 0.0 || wei.is_nan() {
        return "0 ETH".to_string();
    }

    format!("{} ETH", to_fixed(wei / WEI_PER_ETH, 4))
}

/// Shorten large counts with a `K` or `M` suffix and one decimal place.
pub fn compact_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{}M", to_fixed(n / 1_000_000.0, 1))
    } else if n >= 1_000.0 {
        format!("{}K", to_fixed(n / 1_000.0, 1))
    } else {
        n.to_string()
    }
}

/// Percentage with an explicit sign and 2 decimal places.
pub fn signed_percent(n: f64) -> String {
    // Normalize -0.0 so that it is rendered as `+0.00%`.
    let n = if n == 0.0 { 0.0 } else { n };
    let sign = if n >= 0.0 { "+" } else { "" };

    format!("{sign}{}%", to_fixed(n, 2))
}

/// Fixed-point rendering with ties rounded away from zero. Plain `{:.N}`
/// rounds an exact tie to the even digit instead.
fn to_fixed(x: f64, digits: u32) -> String {
    let precision = digits as usize;

    match Decimal::from_f64_retain(x) {
        Some(value) => format!(
            "{:.*}",
            precision,
            value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
        ),
        // Infinite or beyond the decimal range.
        None => format!("{x:.precision$}"),
    }
}
