use regex::Regex;

use crate::errors::{Result, ScanError};
use crate::types::Match;

/// Compiles a regular expression, mapping failures to `InvalidPattern`.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ScanError::InvalidPattern {
        message: e.to_string(),
        pattern: pattern.to_string(),
    })
}

/// A search term ready to run against source text.
///
/// Literal terms are escaped before compiling, so characters such as `.`
/// or `(` match themselves. Both kinds share one matcher.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    display: String,
    regex: Regex,
}

impl SearchTerm {
    /// Builds a term that matches `text` exactly and case-sensitively.
    pub fn literal(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(ScanError::InvalidTerm {
                message: "search term must not be empty".to_string(),
            });
        }
        Ok(Self {
            display: text.to_string(),
            regex: compile_pattern(&regex::escape(text))?,
        })
    }

    /// Builds a term from a regular expression.
    pub fn pattern(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(ScanError::InvalidTerm {
                message: "search pattern must not be empty".to_string(),
            });
        }
        Ok(Self {
            display: pattern.to_string(),
            regex: compile_pattern(pattern)?,
        })
    }

    /// The term as originally supplied.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns every non-overlapping match in ascending offset order.
    pub fn find_matches(&self, text: &str) -> Vec<Match> {
        self.regex
            .find_iter(text)
            .map(|m| Match::new(m.start(), m.end()))
            .collect()
    }
}
