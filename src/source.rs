use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::config::ScanConfig;
use crate::errors::{Result, ScanError};
use crate::types::SourceInfo;

/// Compute SHA-256 content hash of raw content.
pub fn content_hash(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    hex::encode(hasher.finalize())
}

/// The artifact being inspected, loaded once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    origin: String,
    text: String,
    /// SHA-256 of the bytes the text was decoded from.
    sha256: String,
}

impl SourceText {
    /// Wraps in-memory text. `origin` is only used for reporting.
    pub fn from_string(origin: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            origin: origin.into(),
            sha256: content_hash(&text),
            text,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn info(&self) -> SourceInfo {
        SourceInfo {
            origin: self.origin.clone(),
            byte_len: self.text.len(),
            char_count: self.text.chars().count(),
            line_count: self.text.lines().count(),
            sha256: self.sha256.clone(),
        }
    }
}

/// Reads and decodes the artifact at `path`.
///
/// Decoding is strict UTF-8 unless `config.lossy_decoding` is set. Missing
/// files, unreadable files, files over `config.max_source_size` and invalid
/// UTF-8 all fail with `InputUnavailable`.
pub fn load_source_text(path: &Path, config: &ScanConfig) -> Result<SourceText> {
    let unavailable = |message: String| ScanError::InputUnavailable {
        message,
        path: path.display().to_string(),
    };

    let metadata =
        fs::metadata(path).map_err(|e| unavailable(format!("failed to stat file: {}", e)))?;
    if !metadata.is_file() {
        return Err(unavailable("not a regular file".to_string()));
    }
    if metadata.len() > config.max_source_size {
        return Err(unavailable(format!(
            "file is {} bytes, larger than the {} byte limit",
            metadata.len(),
            config.max_source_size
        )));
    }

    let bytes = fs::read(path).map_err(|e| unavailable(format!("failed to read file: {}", e)))?;
    let sha256 = content_hash(&bytes);
    let text = if config.lossy_decoding {
        String::from_utf8_lossy(&bytes).into_owned()
    } else {
        String::from_utf8(bytes).map_err(|e| {
            unavailable(format!(
                "invalid UTF-8 at byte {}",
                e.utf8_error().valid_up_to()
            ))
        })?
    };

    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source text");
    Ok(SourceText {
        origin: path.display().to_string(),
        text,
        sha256,
    })
}
