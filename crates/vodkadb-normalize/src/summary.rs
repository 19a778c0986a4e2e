//! Splitting of one-line product summaries.
//!
//! Some stores render a tile as a single link text such as
//! `"Soplica Cytrynówka | 0,5L | 28%"` instead of separate name, volume and
//! ABV elements. [`parse_summary`] recovers the three raw fields so they can
//! go through the regular normalization pass.

use std::sync::LazyLock;

use regex::Regex;
use vodkadb_core::{RawField, RawProductRecord};

use crate::parse::{ABV_RE, VOLUME_RE};
use crate::text::clean_text;

static SEGMENT_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[|•]\s*|\n+").expect("valid separator regex"));

/// Raw pieces of a summary line. Missing pieces are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub name_part: String,
    /// First volume token found anywhere in the line, e.g. `"0,5l"`.
    pub raw_volume: String,
    /// First ABV token found anywhere in the line, e.g. `"28%"`.
    pub raw_abv: String,
}

impl ProductSummary {
    /// Converts the summary into a raw record. Price is not part of a summary
    /// line and stays absent.
    #[must_use]
    pub fn into_raw(self, image_url: Option<String>) -> RawProductRecord {
        RawProductRecord {
            name: self.name_part,
            price: RawField::Absent,
            volume: RawField::Text(self.raw_volume),
            alcohol_percentage: RawField::Text(self.raw_abv),
            image_url,
            card_text: None,
        }
    }
}

/// Splits a summary line on `|`, `•` or line breaks. The first non-empty
/// segment is the name; volume and ABV are searched across the whole line.
#[must_use]
pub fn parse_summary(raw: &str) -> ProductSummary {
    let name_part = SEGMENT_SEPARATOR_RE
        .split(raw)
        .map(clean_text)
        .find(|segment| !segment.is_empty())
        .unwrap_or_default();

    let text = clean_text(raw);

    let raw_volume = VOLUME_RE
        .find(&text.to_lowercase())
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default();

    // Skip the leading non-digit the pattern may consume.
    let raw_abv = ABV_RE
        .captures(&text)
        .and_then(|caps| Some(&text[caps.get(1)?.start()..caps.get(0)?.end()]))
        .map(str::to_owned)
        .unwrap_or_default();

    ProductSummary {
        name_part,
        raw_volume,
        raw_abv,
    }
}
