//! Locate known identifiers and endpoint-like strings in a large text
//! artifact, such as a minified client script, and extract the context
//! around each occurrence.

pub mod config;
pub mod context;
pub mod errors;
pub mod harvest;
pub mod pattern;
pub mod report;
pub mod scanner;
pub mod source;
pub mod types;
