use serde::{Deserialize, Serialize};

/// A raw listing field as handed over by a retrieval collaborator.
///
/// Sources disagree on whether a value arrives as display text (`"34,99 zł"`),
/// an already-typed number (`34.99`), or not at all. Modelling the three
/// cases explicitly keeps the "numbers bypass text parsing" rule visible at
/// every call site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    #[default]
    Absent,
}

impl RawField {
    /// `true` for [`RawField::Absent`] and for text that holds nothing but
    /// whitespace (non-breaking spaces included).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            RawField::Number(_) => false,
            RawField::Text(s) => s.chars().all(char::is_whitespace),
            RawField::Absent => true,
        }
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        RawField::Text(s.to_owned())
    }
}

impl From<String> for RawField {
    fn from(s: String) -> Self {
        RawField::Text(s)
    }
}

impl From<f64> for RawField {
    fn from(n: f64) -> Self {
        RawField::Number(n)
    }
}

/// One product tile as scraped from a single store page, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProductRecord {
    /// Unparsed product title, e.g. `"Wódka Żubrówka Biała 37,5%"`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: RawField,
    #[serde(default)]
    pub volume: RawField,
    #[serde(default, rename = "alcoholPercentage")]
    pub alcohol_percentage: RawField,
    #[serde(default, rename = "imageSrc")]
    pub image_url: Option<String>,
    /// Full text of the product tile, used as a last-resort source when a
    /// dedicated field is missing or unparseable.
    #[serde(default, rename = "rawText", skip_serializing_if = "Option::is_none")]
    pub card_text: Option<String>,
}

/// Closed flavor taxonomy. Names that match no known flavor are [`Flavor::Pure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    Pure,
    Lemon,
    Cranberry,
    Plum,
    Apple,
    Mint,
    Caramel,
    Pear,
    Cherry,
    Currant,
    Mango,
}

impl Flavor {
    pub const ALL: [Flavor; 11] = [
        Flavor::Pure,
        Flavor::Lemon,
        Flavor::Cranberry,
        Flavor::Plum,
        Flavor::Apple,
        Flavor::Mint,
        Flavor::Caramel,
        Flavor::Pear,
        Flavor::Cherry,
        Flavor::Currant,
        Flavor::Mango,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Pure => "pure",
            Flavor::Lemon => "lemon",
            Flavor::Cranberry => "cranberry",
            Flavor::Plum => "plum",
            Flavor::Apple => "apple",
            Flavor::Mint => "mint",
            Flavor::Caramel => "caramel",
            Flavor::Pear => "pear",
            Flavor::Cherry => "cherry",
            Flavor::Currant => "currant",
            Flavor::Mango => "mango",
        }
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store-agnostic product record produced by normalization.
///
/// Numeric fields are `None` when the source text could not be parsed; the
/// record itself is always emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalProductRecord {
    pub name: String,
    pub flavor: Flavor,
    /// Container size in liters, rounded to three decimals.
    #[serde(rename = "volume")]
    pub volume_liters: Option<f64>,
    /// Whole-percent ABV.
    #[serde(rename = "alcoholPercentage")]
    pub alcohol_percentage: Option<i32>,
    /// Shelf price in the store's currency, rounded to two decimals.
    pub price: Option<f64>,
    pub store: String,
    #[serde(rename = "imageSrc")]
    pub image_url: Option<String>,
}
