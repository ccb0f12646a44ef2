//! Card text markup.
//!
//! Ability and flavour text mixes plain text with three kinds of markup:
//!
//! - `{...}` an inline symbol; the content is an opaque catalog key
//! - `|` toggles italics (unpaired toggles are legal)
//! - `\r\n` is a hard break; a bare `\n` is ordinary text

use serde::Serialize;

use crate::error::{CardError, Result};

pub const TOKEN_OPEN: char = '{';
pub const TOKEN_CLOSE: char = '}';
pub const ITALIC_TOGGLE: char = '|';
pub const HARD_BREAK: &str = "\r\n";

/// One parsed piece of markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment<'a> {
    PlainRun(&'a str),
    /// Token text including the braces.
    SymbolRef(&'a str),
    ItalicToggle,
    HardBreak,
}

/// Positions of the next delimiters in `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Delimiters {
    pub hard_break: Option<usize>,
    pub token: Option<usize>,
    pub italic: Option<usize>,
}

impl Delimiters {
    pub fn find(text: &str) -> Self {
        Self {
            hard_break: text.find(HARD_BREAK),
            token: text.find(TOKEN_OPEN),
            italic: text.find(ITALIC_TOGGLE),
        }
    }

    /// Length of the plain run at the start of the text.
    pub fn run_length(&self, text_len: usize) -> usize {
        [self.hard_break, self.token, self.italic]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(text_len)
    }
}

/// Length of a symbol token at the start of `text`, braces included.
///
/// Returns `None` when the token is never closed.
pub(crate) fn token_length(text: &str) -> Option<usize> {
    text.find(TOKEN_CLOSE).map(|close| close + TOKEN_CLOSE.len_utf8())
}

/// Parse markup into segments.
pub fn parse_markup(text: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut offset = 0;

    while offset < text.len() {
        let rest = &text[offset..];

        let (segment, len) = if rest.starts_with(TOKEN_OPEN) {
            let len = token_length(rest).ok_or(CardError::MalformedMarkup { offset })?;
            (Segment::SymbolRef(&rest[..len]), len)
        } else if rest.starts_with(ITALIC_TOGGLE) {
            (Segment::ItalicToggle, ITALIC_TOGGLE.len_utf8())
        } else if rest.starts_with(HARD_BREAK) {
            (Segment::HardBreak, HARD_BREAK.len())
        } else {
            let len = Delimiters::find(rest).run_length(rest.len());
            (Segment::PlainRun(&rest[..len]), len)
        };

        segments.push(segment);
        offset += len;
    }

    Ok(segments)
}

/// Symbol tokens referenced by the markup, in order.
pub fn symbol_refs(text: &str) -> Result<Vec<&str>> {
    Ok(parse_markup(text)?
        .into_iter()
        .filter_map(|s| match s {
            Segment::SymbolRef(token) => Some(token),
            _ => None,
        })
        .collect())
}
