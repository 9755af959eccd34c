/// Clipping of context windows to text boundaries.
pub mod window;

/// Finds every occurrence of a term and builds a snippet around it.
pub mod extractor;

pub use extractor::{find_contexts, find_literal_contexts, find_term_contexts};
pub use window::{clip_window, step_back, step_forward};
