use crate::config::Margins;
use crate::errors::Result;
use crate::pattern::SearchTerm;
use crate::types::{Snippet, TermContexts};

use super::window::clip_window;

/// Finds every non-overlapping occurrence of `term` and returns one clipped
/// snippet per occurrence, in ascending offset order.
///
/// An absent term yields an empty vector.
pub fn find_contexts<'a>(
    text: &'a str,
    term: &SearchTerm,
    margins: Margins,
) -> Vec<Snippet<'a>> {
    term.find_matches(text)
        .into_iter()
        .map(|m| clip_window(text, m, margins))
        .collect()
}

/// Runs [`find_contexts`] for a literal term given as a plain string.
///
/// Fails with `InvalidTerm` when `term` is empty.
pub fn find_literal_contexts<'a>(
    text: &'a str,
    term: &str,
    margins: Margins,
) -> Result<Vec<Snippet<'a>>> {
    let term = SearchTerm::literal(term)?;
    Ok(find_contexts(text, &term, margins))
}

/// Runs [`find_contexts`] for each term, keeping the caller's term order.
pub fn find_term_contexts<'a>(
    text: &'a str,
    terms: &[SearchTerm],
    margins: Margins,
) -> Vec<TermContexts<'a>> {
    terms
        .iter()
        .map(|term| {
            let snippets = find_contexts(text, term, margins);
            tracing::debug!(term = term.as_str(), matches = snippets.len(), "context query");
            TermContexts {
                term: term.as_str().to_string(),
                snippets,
            }
        })
        .collect()
}
