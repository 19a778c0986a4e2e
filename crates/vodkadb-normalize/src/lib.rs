//! Normalization of scraped vodka listings into [`vodkadb_core::CanonicalProductRecord`].
//!
//! Every function in this crate is pure: raw strings in, typed values out,
//! with unparseable input degrading to `None` instead of an error.

pub mod flavor;
pub mod name;
pub mod normalize;
pub mod parse;
pub mod summary;
pub mod text;

pub use flavor::{classify_flavor, classify_flavor_with, FlavorPattern, FLAVOR_PATTERNS};
pub use name::{canonicalize_name, title_case};
pub use normalize::{normalize_batch, normalize_product, DEFAULT_ABV};
pub use parse::{parse_abv, parse_price, parse_volume, resolve_unit, VolumeUnit};
pub use summary::{parse_summary, ProductSummary};
pub use text::clean_text;
