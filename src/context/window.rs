use crate::config::{Anchor, Margins};
use crate::types::{Match, Snippet};

/// Returns the byte offset `chars` characters before `pos`, stopping at 0.
///
/// `pos` must lie on a char boundary of `text`.
pub fn step_back(text: &str, pos: usize, chars: usize) -> usize {
    if chars == 0 {
        return pos;
    }
    text[..pos]
        .char_indices()
        .rev()
        .nth(chars - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Returns the byte offset `chars` characters after `pos`, stopping at the
/// end of `text`.
///
/// `pos` must lie on a char boundary of `text`.
pub fn step_forward(text: &str, pos: usize, chars: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Builds the snippet for `matched`, clipped to `[0, text.len()]`.
///
/// Margins are counted in characters so a window never splits a multi-byte
/// character. Oversized margins simply clip.
pub fn clip_window<'a>(text: &'a str, matched: Match, margins: Margins) -> Snippet<'a> {
    let start = step_back(text, matched.start_byte, margins.before);
    let anchor = match margins.anchor {
        Anchor::MatchStart => matched.start_byte,
        Anchor::MatchEnd => matched.end_byte,
    };
    let end = step_forward(text, anchor, margins.after);

    Snippet {
        start_byte: start,
        end_byte: end,
        matched,
        text: &text[start..end],
    }
}
