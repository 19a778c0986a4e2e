use std::sync::LazyLock;

use regex::Regex;

use crate::text::clean_text;

/// Generic category words that every listing repeats and that carry no
/// product identity.
static CATEGORY_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:wódka|vodka)\b").expect("valid category regex"));

/// ABV fragment including an optional leading comma, e.g. `", 40%"` or
/// `" 37,5 %"`. Group 1 is the preceding non-digit, kept on replacement, so
/// `"100%"` is not mistaken for an ABV.
static EMBEDDED_ABV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9])(?:,?\s*[0-9]{1,2}(?:[.,][0-9])?\s*%)")
        .expect("valid embedded abv regex")
});

/// Strips category words and embedded ABV from a listing title and
/// title-cases what remains.
///
/// `"Wódka Żubrówka, 40%"` → `"Żubrówka"`.
#[must_use]
pub fn canonicalize_name(raw: &str) -> String {
    let cleaned = clean_text(raw);
    let without_category = CATEGORY_WORD_RE.replace_all(&cleaned, "");
    let without_abv = EMBEDDED_ABV_RE.replace_all(&without_category, "${1}");
    title_case(&clean_text(&without_abv))
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// A word starts after any non-alphabetic character, so `"0,5l"` becomes
/// `"0,5L"` and `"o'neil"` becomes `"O'Neil"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if in_word {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        in_word = ch.is_alphabetic();
    }
    out
}
