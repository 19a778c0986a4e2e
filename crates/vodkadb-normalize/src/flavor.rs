use vodkadb_core::Flavor;

use crate::text::clean_text;

/// One entry of the flavor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlavorPattern {
    /// Polish stem matched anywhere in the name, so `"cytryn"` covers
    /// `"Cytrynowa"` and `"Cytrynówka"`.
    Stem(&'static str),
    /// English word matched only as a whole word, so `"apple"` does not fire
    /// on `"Pineapple"`. A trailing plural `s` is accepted.
    Word(&'static str),
}

impl FlavorPattern {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            FlavorPattern::Stem(s) | FlavorPattern::Word(s) => s,
        }
    }

    /// `lower` must already be lowercased.
    #[must_use]
    pub fn matches(self, lower: &str) -> bool {
        match self {
            FlavorPattern::Stem(stem) => lower.contains(stem),
            FlavorPattern::Word(word) => lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == word || token.strip_suffix('s') == Some(word)),
        }
    }
}

/// Ordered flavor table. The first entry found in the lowercased name wins,
/// so specific flavors sit above generic ones: `"Czarna Porzeczka"` must
/// resolve to currant before `czarna` claims it as pure.
pub const FLAVOR_PATTERNS: &[(FlavorPattern, Flavor)] = &[
    (FlavorPattern::Stem("cytryn"), Flavor::Lemon),
    (FlavorPattern::Word("lemon"), Flavor::Lemon),
    (FlavorPattern::Stem("żurawin"), Flavor::Cranberry),
    (FlavorPattern::Word("cranberry"), Flavor::Cranberry),
    (FlavorPattern::Word("cranberries"), Flavor::Cranberry),
    (FlavorPattern::Stem("śliwk"), Flavor::Plum),
    (FlavorPattern::Word("plum"), Flavor::Plum),
    (FlavorPattern::Stem("jabł"), Flavor::Apple),
    (FlavorPattern::Word("apple"), Flavor::Apple),
    (FlavorPattern::Stem("mięt"), Flavor::Mint),
    (FlavorPattern::Word("mint"), Flavor::Mint),
    (FlavorPattern::Stem("karmel"), Flavor::Caramel),
    (FlavorPattern::Word("caramel"), Flavor::Caramel),
    (FlavorPattern::Stem("gruszk"), Flavor::Pear),
    (FlavorPattern::Word("pear"), Flavor::Pear),
    (FlavorPattern::Stem("wiśni"), Flavor::Cherry),
    (FlavorPattern::Stem("wiśnia"), Flavor::Cherry),
    (FlavorPattern::Word("cherry"), Flavor::Cherry),
    (FlavorPattern::Word("cherries"), Flavor::Cherry),
    (FlavorPattern::Stem("porzecz"), Flavor::Currant),
    (FlavorPattern::Word("currant"), Flavor::Currant),
    (FlavorPattern::Stem("mango"), Flavor::Mango),
    (FlavorPattern::Stem("czysta"), Flavor::Pure),
    (FlavorPattern::Stem("czarna"), Flavor::Pure),
];

/// Classifies a product name against [`FLAVOR_PATTERNS`].
#[must_use]
pub fn classify_flavor(name: &str) -> Flavor {
    classify_flavor_with(FLAVOR_PATTERNS, name)
}

/// Classifies a product name against a caller-supplied pattern table.
///
/// Matching is case-insensitive but diacritic-sensitive (`"wisnia"` is not
/// `"wiśnia"`). Returns [`Flavor::Pure`] when nothing matches.
#[must_use]
pub fn classify_flavor_with(patterns: &[(FlavorPattern, Flavor)], name: &str) -> Flavor {
    let lower = clean_text(name).to_lowercase();
    patterns
        .iter()
        .find(|(pattern, _)| pattern.matches(&lower))
        .map_or(Flavor::Pure, |&(_, flavor)| flavor)
}
