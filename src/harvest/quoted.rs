use crate::errors::Result;
use crate::pattern::compile_pattern;

use super::unique::harvest_unique_filtered;

/// Content between a single or double quote and the next quote of either
/// kind on the same line.
pub const QUOTED_LITERAL_PATTERN: &str = r#"["'](.*?)["']"#;

/// Returns the distinct quoted literals in `text` that contain `marker`,
/// sorted ascending.
///
/// An empty marker keeps every literal.
pub fn harvest_quoted(text: &str, marker: &str) -> Result<Vec<String>> {
    let regex = compile_pattern(QUOTED_LITERAL_PATTERN)?;
    Ok(harvest_unique_filtered(text, &regex, |s| s.contains(marker)))
}
