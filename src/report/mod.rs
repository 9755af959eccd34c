/// Formats query results as plain text or JSON.
pub mod formatter;

pub use formatter::{
    format_as_json, format_contexts_as_text, format_harvest_as_text, format_info_as_text,
    MATCH_FOOTER, NOT_FOUND,
};
