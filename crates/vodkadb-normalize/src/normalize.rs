//! Normalization from [`RawProductRecord`] to [`CanonicalProductRecord`].
//!
//! Field parsing is delegated to [`crate::parse`], [`crate::flavor`] and
//! [`crate::name`]; this module decides which source feeds each field.

use vodkadb_core::{CanonicalProductRecord, RawField, RawProductRecord};

use crate::flavor::classify_flavor;
use crate::name::canonicalize_name;
use crate::parse::{parse_abv, parse_price, parse_volume, round_dp, truncate_percent};

/// ABV assumed for a listing that carries no ABV information at all. Nearly
/// all bottled vodka is sold at 40%.
pub const DEFAULT_ABV: i32 = 40;

/// Normalizes one raw listing for `store`.
///
/// Never fails: any field that cannot be parsed becomes `None` and the
/// record is still returned. `store` is copied verbatim.
#[must_use]
pub fn normalize_product(raw: RawProductRecord, store: &str) -> CanonicalProductRecord {
    let card_text = raw.card_text.as_deref();

    let price = resolve_price(&raw.price, card_text);
    let volume_liters = resolve_volume(&raw.volume, card_text);
    let alcohol_percentage = resolve_abv(&raw.alcohol_percentage, &raw.name, card_text);
    let flavor = classify_flavor(&raw.name);
    let name = canonicalize_name(&raw.name);

    // Scrapers emit `""` when an <img> has no src; treat it as absent.
    let image_url = raw.image_url.filter(|s| !s.trim().is_empty());

    tracing::trace!(
        store,
        raw_name = %raw.name,
        %name,
        %flavor,
        ?price,
        ?volume_liters,
        ?alcohol_percentage,
        "normalized product"
    );

    CanonicalProductRecord {
        name,
        flavor,
        volume_liters,
        alcohol_percentage,
        price,
        store: store.to_owned(),
        image_url,
    }
}

/// Normalizes a batch, preserving input order.
#[must_use]
pub fn normalize_batch<I>(records: I, store: &str) -> Vec<CanonicalProductRecord>
where
    I: IntoIterator<Item = RawProductRecord>,
{
    let normalized: Vec<_> = records
        .into_iter()
        .map(|raw| normalize_product(raw, store))
        .collect();

    let missing_price = normalized.iter().filter(|r| r.price.is_none()).count();
    let missing_volume = normalized.iter().filter(|r| r.volume_liters.is_none()).count();
    tracing::debug!(
        store,
        count = normalized.len(),
        missing_price,
        missing_volume,
        "normalized batch"
    );

    normalized
}

fn resolve_price(field: &RawField, card_text: Option<&str>) -> Option<f64> {
    let parsed = match field {
        // Typed input bypasses text parsing and never falls back.
        RawField::Number(n) => return round_dp(*n, 2),
        RawField::Text(s) => parse_price(s),
        RawField::Absent => None,
    };
    parsed.or_else(|| card_text.and_then(parse_price))
}

fn resolve_volume(field: &RawField, card_text: Option<&str>) -> Option<f64> {
    let parsed = match field {
        // Typed volume is already in liters.
        RawField::Number(n) => return round_dp(*n, 3),
        RawField::Text(s) => parse_volume(s),
        RawField::Absent => None,
    };
    parsed.or_else(|| card_text.and_then(parse_volume))
}

/// ABV resolution order:
/// - typed number: used as-is, `0`/non-finite means "unknown" → [`DEFAULT_ABV`];
/// - non-blank text: parsed, else card text, else `None`;
/// - blank text: ABV embedded in the name, else card text, else `None`;
/// - absent: ABV embedded in the name, else card text, else [`DEFAULT_ABV`].
#[allow(clippy::float_cmp)]
fn resolve_abv(field: &RawField, name: &str, card_text: Option<&str>) -> Option<i32> {
    let from_card = || card_text.and_then(parse_abv);
    match field {
        RawField::Number(n) if *n == 0.0 || !n.is_finite() => Some(DEFAULT_ABV),
        RawField::Number(n) => Some(truncate_percent(*n)),
        RawField::Text(s) if !field.is_blank() => parse_abv(s).or_else(from_card),
        RawField::Text(_) => parse_abv(name).or_else(from_card),
        RawField::Absent => Some(
            parse_abv(name)
                .or_else(from_card)
                .unwrap_or(DEFAULT_ABV),
        ),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
