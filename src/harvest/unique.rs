use std::collections::BTreeSet;

use regex::Regex;

use crate::errors::Result;
use crate::pattern::SearchTerm;

/// Collects the token of every match of `pattern` in `text`, deduplicated
/// and sorted ascending.
///
/// The token is capture group 1 when the pattern has one, otherwise the
/// whole match. Matches where group 1 did not participate, and empty
/// tokens, are skipped.
pub fn harvest_unique(text: &str, pattern: &Regex) -> Vec<String> {
    harvest_unique_filtered(text, pattern, |_| true)
}

/// Like [`harvest_unique`], but only tokens accepted by `keep` enter the set.
///
/// Deduplication and ordering apply to the kept tokens.
pub fn harvest_unique_filtered<F>(text: &str, pattern: &Regex, keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let group = usize::from(pattern.captures_len() > 1);
    let mut seen = BTreeSet::new();
    let mut total = 0usize;

    for caps in pattern.captures_iter(text) {
        let Some(token) = caps.get(group).filter(|t| !t.is_empty()) else {
            continue;
        };
        total += 1;
        if keep(token.as_str()) {
            seen.insert(token.as_str().to_string());
        }
    }

    tracing::debug!(
        pattern = pattern.as_str(),
        matches = total,
        unique = seen.len(),
        "harvest complete"
    );
    seen.into_iter().collect()
}

/// Compiles `pattern` and runs [`harvest_unique`].
///
/// Fails before any scanning with `InvalidTerm` if the pattern is empty, or
/// with `InvalidPattern` if it is malformed.
pub fn harvest_unique_str(text: &str, pattern: &str) -> Result<Vec<String>> {
    let term = SearchTerm::pattern(pattern)?;
    Ok(harvest_unique(text, term.regex()))
}
