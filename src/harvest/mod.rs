/// Pattern harvesting: every distinct token a regex captures, sorted.
mod unique;

/// Quoted string literals filtered by a content marker.
mod quoted;

pub use quoted::{harvest_quoted, QUOTED_LITERAL_PATTERN};
pub use unique::{harvest_unique, harvest_unique_filtered, harvest_unique_str};
