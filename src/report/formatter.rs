use serde::Serialize;

use crate::errors::Result;
use crate::types::{HarvestReport, SourceInfo, TermContexts};

/// Printed when a single-term context query finds nothing.
pub const NOT_FOUND: &str = "Not found";

/// Closes every snippet block.
pub const MATCH_FOOTER: &str = "-----------------------------";

/// Formats context query results as delimited text blocks.
///
/// Each snippet becomes a `--- MATCH FOR '<term>' ---` block. A single-term
/// query with no matches prints `Not found`; in a multi-term query each
/// empty term prints `Not found: '<term>'` instead.
pub fn format_contexts_as_text(results: &[TermContexts]) -> String {
    let mut out = String::new();
    let single = results.len() == 1;

    for result in results {
        if result.is_empty() {
            if single {
                out.push_str(NOT_FOUND);
            } else {
                out.push_str(&format!("{}: '{}'", NOT_FOUND, result.term));
            }
            out.push('\n');
            continue;
        }

        for snippet in &result.snippets {
            out.push_str(&format!("--- MATCH FOR '{}' ---\n", result.term));
            out.push_str(snippet.text);
            out.push('\n');
            out.push_str(MATCH_FOOTER);
            out.push('\n');
        }
    }

    out
}

/// Formats harvested tokens one per line, optionally as a bulleted list.
pub fn format_harvest_as_text(report: &HarvestReport, bullet: bool) -> String {
    if report.tokens.is_empty() {
        return format!("No matches found for '{}'\n", report.query);
    }

    let mut out = format!(
        "Found {} unique matches for '{}':\n",
        report.tokens.len(),
        report.query
    );
    for token in &report.tokens {
        if bullet {
            out.push_str("- ");
        }
        out.push_str(token);
        out.push('\n');
    }
    out
}

pub fn format_info_as_text(info: &SourceInfo) -> String {
    let mut out = String::new();
    out.push_str("Source\n");
    out.push_str(&format!("  Path:   {}\n", info.origin));
    out.push_str(&format!("  Bytes:  {}\n", info.byte_len));
    out.push_str(&format!("  Chars:  {}\n", info.char_count));
    out.push_str(&format!("  Lines:  {}\n", info.line_count));
    out.push_str(&format!("  SHA256: {}\n", info.sha256));
    out
}

/// Pretty-prints any result structure as JSON.
pub fn format_as_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
