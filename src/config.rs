use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Characters of context kept before each match.
pub const DEFAULT_LEFT_MARGIN: usize = 100;

/// Characters of context kept after the start of each match.
pub const DEFAULT_RIGHT_MARGIN: usize = 2000;

/// Largest artifact accepted by the loader (256 MiB).
pub const DEFAULT_MAX_SOURCE_SIZE: u64 = 256 * 1024 * 1024;

/// Harvest pattern for `.ajx` endpoint paths; group 1 is the token.
pub const ENDPOINT_PATTERN: &str = r"([a-zA-Z0-9_/]+\.ajx)";

/// Content filter applied to quoted literals when none is given.
pub const DEFAULT_QUOTED_MARKER: &str = ".ajx";

/// Where the right margin of a context window is counted from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// `after` characters past the first character of the match.
    #[default]
    MatchStart,
    /// `after` characters past the last character of the match, so the
    /// whole match is always inside the window.
    MatchEnd,
}

/// Number of characters to include on each side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Characters before the match start.
    pub before: usize,
    /// Characters after the anchor point.
    pub after: usize,
    pub anchor: Anchor,
}

impl Margins {
    pub fn new(before: usize, after: usize) -> Self {
        Self {
            before,
            after,
            anchor: Anchor::MatchStart,
        }
    }

    pub fn anchored(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(DEFAULT_LEFT_MARGIN, DEFAULT_RIGHT_MARGIN)
    }
}

/// Configuration for a single scan run.
///
/// Built once from command-line flags (or by a library caller) and passed
/// explicitly to the loader and the [`Scanner`](crate::scanner::Scanner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Path of the artifact to scan.
    pub source_path: PathBuf,
    /// Context window used by context queries.
    pub margins: Margins,
    /// Artifacts larger than this many bytes are rejected.
    pub max_source_size: u64,
    /// Replace invalid UTF-8 with U+FFFD instead of failing.
    pub lossy_decoding: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            margins: Margins::default(),
            max_source_size: DEFAULT_MAX_SOURCE_SIZE,
            lossy_decoding: false,
        }
    }
}

impl ScanConfig {
    /// Returns a default configuration pointed at `source_path`.
    pub fn for_path(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            ..Self::default()
        }
    }
}
