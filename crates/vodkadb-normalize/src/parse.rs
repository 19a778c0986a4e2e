//! Price, volume and ABV extraction from shelf-label text.
//!
//! Polish stores print decimals with either `,` or `.` and sometimes render
//! the grosze as a separate superscript, which reaches us as `"59 99"`. All
//! parsers take the first matching token and return `None` when nothing
//! matches; none of them fail.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::text::clean_text;

/// `"59 99"`, `"59,99"`, `"59.99"`: integer part, one separator, two digits.
static PRICE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[\s,.]([0-9]{2})").expect("valid price regex"));

static PRICE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[.,][0-9]{2}").expect("valid price token regex"));

/// Number immediately followed by a unit token. `\b` keeps the bare `l` from
/// matching inside words such as `"litra"` or `"lód"`.
pub(crate) static VOLUME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:[.,][0-9]+)?)\s*(ml|cl|l)\b").expect("valid volume regex")
});

/// One or two digits, optional single decimal, then `%`. The number must not
/// continue a longer one, so `"100%"` yields nothing instead of `0`. Group 1
/// is the number; the whole match may include one leading non-digit.
pub(crate) static ABV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{1,2}(?:[.,][0-9])?)\s*%").expect("valid abv regex")
});

/// Volume unit recognized in listing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Milliliters,
    Centiliters,
    Liters,
}

impl VolumeUnit {
    #[must_use]
    pub fn to_liters(self, value: f64) -> f64 {
        match self {
            VolumeUnit::Milliliters => value / 1000.0,
            VolumeUnit::Centiliters => value / 100.0,
            VolumeUnit::Liters => value,
        }
    }
}

/// Maps a unit token to a [`VolumeUnit`]. Unknown tokens yield `None`; no
/// unit is ever assumed.
#[must_use]
pub fn resolve_unit(token: &str) -> Option<VolumeUnit> {
    match token.trim().to_lowercase().as_str() {
        "ml" => Some(VolumeUnit::Milliliters),
        "cl" => Some(VolumeUnit::Centiliters),
        "l" => Some(VolumeUnit::Liters),
        _ => None,
    }
}

/// Parses a shelf price such as `"59,99 zł"` or `"59 99"`.
///
/// Search order:
/// 1. integer part, one of space/comma/period, exactly two digits;
/// 2. any `N.NN` / `N,NN` token.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let text = clean_text(raw);
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = PRICE_SPLIT_RE.captures(&text) {
        return format!("{}.{}", &caps[1], &caps[2]).parse().ok();
    }

    PRICE_TOKEN_RE
        .find(&text)
        .and_then(|m| m.as_str().replace(',', ".").parse().ok())
}

/// Parses a container size into liters, rounded to three decimals.
///
/// `"500 ml"` → `0.5`, `"0,5l"` → `0.5`, `"70 cl"` → `0.7`.
#[must_use]
pub fn parse_volume(raw: &str) -> Option<f64> {
    let text = clean_text(raw).to_lowercase();
    let caps = VOLUME_RE.captures(&text)?;

    let value: f64 = caps[1].replace(',', ".").parse().ok()?;
    let unit = resolve_unit(&caps[2])?;

    round_dp(unit.to_liters(value), 3)
}

/// Parses an ABV like `"40%"` or `"37,5 %"` and truncates it to whole percent.
#[must_use]
pub fn parse_abv(raw: &str) -> Option<i32> {
    let text = clean_text(raw);
    let caps = ABV_RE.captures(&text)?;
    let value: f64 = caps[1].replace(',', ".").parse().ok()?;
    Some(truncate_percent(value))
}

// The ABV pattern caps the integer part at two digits, and numeric ABVs are
// clamped by the float-to-int cast, so truncation cannot wrap.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn truncate_percent(value: f64) -> i32 {
    value.trunc() as i32
}

/// Rounds half away from zero to `dp` decimal places.
///
/// Returns `None` for NaN, infinities, and magnitudes outside what
/// [`Decimal`] can represent.
pub(crate) fn round_dp(value: f64, dp: u32) -> Option<f64> {
    Decimal::from_f64(value)?
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
