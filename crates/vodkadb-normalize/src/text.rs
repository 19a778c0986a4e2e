/// Collapses every whitespace run to a single ASCII space and trims both ends.
///
/// Non-breaking spaces (`U+00A0`, `U+202F`, `U+2007`) count as whitespace, so
/// a shelf label like `"59\u{a0}99"` becomes `"59 99"`. Empty input yields an
/// empty string. The result is a fixed point: cleaning it again changes nothing.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
