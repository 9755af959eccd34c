use serde::{Deserialize, Serialize};

/// A matched span in the source text.
///
/// Both offsets are bytes and always fall on UTF-8 char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub start_byte: usize,
    pub end_byte: usize,
}

impl Match {
    pub fn new(start_byte: usize, end_byte: usize) -> Self {
        Self {
            start_byte,
            end_byte,
        }
    }
}

/// A clipped window of source text around a single match.
///
/// Invariant: `0 <= start_byte <= matched.start_byte <= end_byte <= text length`.
/// The match itself may extend past `end_byte` when it is longer than the
/// right margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet<'a> {
    /// Byte offset where the window begins.
    pub start_byte: usize,
    /// Byte offset where the window ends (exclusive).
    pub end_byte: usize,
    /// The match this window was built around.
    pub matched: Match,
    /// The windowed text, borrowed from the source.
    pub text: &'a str,
}

impl Snippet<'_> {
    /// Byte offset of the match relative to the beginning of the window.
    pub fn match_offset(&self) -> usize {
        self.matched.start_byte - self.start_byte
    }
}

/// All snippets produced for one search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermContexts<'a> {
    /// The term as the caller typed it.
    pub term: String,
    pub snippets: Vec<Snippet<'a>>,
}

impl TermContexts<'_> {
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Sorted, deduplicated tokens produced by a harvest query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestReport {
    /// The pattern (or quoted-literal marker) that produced the tokens.
    pub query: String,
    pub tokens: Vec<String>,
}

/// Summary statistics for a loaded source artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub origin: String,
    pub byte_len: usize,
    pub char_count: usize,
    pub line_count: usize,
    /// Hex-encoded SHA-256 of the raw artifact bytes.
    pub sha256: String,
}

/// Output format for query results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[allow(clippy::should_implement_trait)]
impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Parses a string into an `OutputFormat`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
