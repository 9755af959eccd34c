use std::time::Instant;

use crate::config::{Margins, ScanConfig};
use crate::context::find_term_contexts;
use crate::errors::Result;
use crate::harvest::{harvest_quoted, harvest_unique};
use crate::pattern::SearchTerm;
use crate::source::{load_source_text, SourceText};
use crate::types::*;

/// Owns one loaded artifact and runs queries against it.
///
/// The text is loaded once and only ever borrowed by queries, so queries
/// may run in any order without affecting each other.
pub struct Scanner {
    source: SourceText,
    config: ScanConfig,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

impl Scanner {
    /// Loads `config.source_path` and returns a scanner over it.
    pub fn open(config: ScanConfig) -> Result<Self> {
        let started = Instant::now();
        let source = load_source_text(&config.source_path, &config)?;
        if source.is_empty() {
            tracing::warn!(path = %config.source_path.display(), "source is empty");
        }
        tracing::info!(
            path = %config.source_path.display(),
            bytes = source.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "source loaded"
        );
        Ok(Self { source, config })
    }

    /// Wraps already-loaded text.
    pub fn from_source(source: SourceText, config: ScanConfig) -> Self {
        Self { source, config }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl Scanner {
    /// Finds context snippets for each literal term, using the configured margins.
    pub fn contexts(&self, terms: &[&str]) -> Result<Vec<TermContexts<'_>>> {
        let terms = terms
            .iter()
            .map(|t| SearchTerm::literal(t))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.contexts_for(&terms, self.config.margins))
    }

    /// Finds context snippets for each regular-expression term.
    ///
    /// Every pattern is compiled before any scanning begins.
    pub fn pattern_contexts(&self, patterns: &[&str]) -> Result<Vec<TermContexts<'_>>> {
        let terms = patterns
            .iter()
            .map(|p| SearchTerm::pattern(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.contexts_for(&terms, self.config.margins))
    }

    /// Finds context snippets for prepared terms with explicit margins.
    pub fn contexts_for(&self, terms: &[SearchTerm], margins: Margins) -> Vec<TermContexts<'_>> {
        find_term_contexts(self.source.as_str(), terms, margins)
    }

    /// Harvests the distinct tokens matched by `pattern`, sorted.
    ///
    /// An empty pattern is rejected, as it is for pattern context queries.
    pub fn harvest(&self, pattern: &str) -> Result<HarvestReport> {
        let term = SearchTerm::pattern(pattern)?;
        Ok(HarvestReport {
            query: term.as_str().to_string(),
            tokens: harvest_unique(self.source.as_str(), term.regex()),
        })
    }

    /// Harvests the distinct quoted literals containing `marker`, sorted.
    pub fn quoted(&self, marker: &str) -> Result<HarvestReport> {
        Ok(HarvestReport {
            query: marker.to_string(),
            tokens: harvest_quoted(self.source.as_str(), marker)?,
        })
    }

    pub fn info(&self) -> SourceInfo {
        self.source.info()
    }
}
