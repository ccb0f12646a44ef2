//! Rich text layout.
//!
//! Lays out card markup left to right inside a bounding rectangle and
//! returns positioned draw operations. Plain runs that do not fit are
//! shortened in stages:
//!
//! 1. cut after the last space that still fits, else after the last hyphen
//! 2. otherwise carry the first word to a fresh line
//! 3. if it is still too wide, go back to the previous line when it had at
//!    least `min_remaining_width` left, then drop characters one at a time
//!
//! Layout stops with `overflow` set when the next element would cross the
//! bottom edge or a symbol token is never closed.

use serde::{Deserialize, Serialize};

use crate::parser::markup::{token_length, Delimiters, HARD_BREAK, ITALIC_TOGGLE, TOKEN_OPEN};
use crate::types::CardRecord;

use super::catalog::{SymbolCatalog, CHAOS_SYMBOL_KEY};
use super::fonts::{FontStyle, Fonts, TextMeasurer};
use super::geometry::{Point, Rect, Size};

/// Rules text area of a regular card.
pub const RULES_TEXT_BOX: Rect = Rect::new(15.0, 326.0, 324.0, 149.0);

/// Rules text area of a token, below the larger art window.
pub const TOKEN_RULES_TEXT_BOX: Rect = Rect::new(16.0, 385.0, 324.0, 85.0);

/// Text area for a card's rules text.
pub fn rules_text_box(card: &CardRecord) -> Rect {
    if card.token {
        TOKEN_RULES_TEXT_BOX
    } else {
        RULES_TEXT_BOX
    }
}

/// Placement metrics for an inline symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolMetrics {
    /// Horizontal advance after the symbol.
    pub advance: f32,
    /// Line height used for wrapping and the bottom check.
    pub line_pitch: f32,
    /// Draw offset from the cursor.
    pub offset: Point,
    pub size: Size,
}

/// Layout constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Added to the cursor after every plain run (kerning compensation).
    pub run_advance: f32,
    /// Extra space below a hard break in the regular face.
    pub hard_return_buffer: f32,
    /// Width a line must still have left to be returned to.
    pub min_remaining_width: f32,
    pub mana: SymbolMetrics,
    pub chaos: SymbolMetrics,
    /// Glyph measured for the height of a bare hard break.
    pub reference_glyph: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            run_advance: -4.0,
            hard_return_buffer: 4.0,
            min_remaining_width: 40.0,
            mana: SymbolMetrics {
                advance: 15.0,
                line_pitch: 15.0,
                offset: Point::new(-4.0, -6.0),
                size: Size::new(26.0, 26.0),
            },
            chaos: SymbolMetrics {
                advance: 25.0,
                line_pitch: 15.0,
                offset: Point::new(2.0, -3.0),
                size: Size::new(24.0, 20.0),
            },
            reference_glyph: "A".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Cursor nudge between a symbol and adjacent text.
    fn symbol_correction(&self) -> f32 {
        self.run_advance / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedRun {
    pub text: String,
    pub style: FontStyle,
    pub origin: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedSymbol {
    /// Token as written, braces included.
    pub token: String,
    pub asset_key: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawOp {
    Text(PlacedRun),
    Symbol(PlacedSymbol),
}

/// Draw operations in paint order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LayoutResult {
    pub ops: Vec<DrawOp>,
    /// Layout stopped before the end of the markup.
    pub overflow: bool,
}

impl LayoutResult {
    pub fn runs(&self) -> impl Iterator<Item = &PlacedRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            DrawOp::Symbol(_) => None,
        })
    }

    pub fn symbols(&self) -> impl Iterator<Item = &PlacedSymbol> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Symbol(symbol) => Some(symbol),
            DrawOp::Text(_) => None,
        })
    }

    /// Text of all placed runs, concatenated.
    pub fn text(&self) -> String {
        self.runs().map(|r| r.text.as_str()).collect()
    }
}

/// Lays out markup with a fixed set of fonts, metrics and symbols.
pub struct TextLayout<'a> {
    fonts: &'a Fonts,
    measurer: &'a dyn TextMeasurer,
    catalog: &'a dyn SymbolCatalog,
    config: LayoutConfig,
}

impl<'a> TextLayout<'a> {
    pub fn new(fonts: &'a Fonts, measurer: &'a dyn TextMeasurer, catalog: &'a dyn SymbolCatalog) -> Self {
        Self {
            fonts,
            measurer,
            catalog,
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `markup` starting at the top left of `bounds`.
    pub fn layout(&self, markup: &str, bounds: Rect) -> LayoutResult {
        let mut pass = Pass {
            layout: self,
            bounds,
            cursor: bounds.origin(),
            style: FontStyle::Regular,
            ops: Vec::new(),
        };

        let mut offset = 0;
        let mut overflow = false;

        while offset < markup.len() {
            let rest = &markup[offset..];

            let step = if rest.starts_with(TOKEN_OPEN) {
                pass.symbol(rest)
            } else if rest.starts_with(ITALIC_TOGGLE) {
                pass.style = pass.style.toggled();
                Step::Consumed(ITALIC_TOGGLE.len_utf8())
            } else if rest.starts_with(HARD_BREAK) {
                let height = pass.measure(&self.config.reference_glyph).height;
                pass.line_break(height);
                Step::Consumed(HARD_BREAK.len())
            } else {
                pass.run(rest)
            };

            match step {
                Step::Consumed(len) => offset += len,
                Step::Overflow => {
                    overflow = true;
                    break;
                }
            }
        }

        LayoutResult {
            ops: pass.ops,
            overflow,
        }
    }
}

/// Lay out markup with the default layout constants.
pub fn layout(
    markup: &str,
    bounds: Rect,
    fonts: &Fonts,
    measurer: &dyn TextMeasurer,
    catalog: &dyn SymbolCatalog,
) -> LayoutResult {
    TextLayout::new(fonts, measurer, catalog).layout(markup, bounds)
}

enum Step {
    Consumed(usize),
    Overflow,
}

/// State of one layout call.
struct Pass<'l, 'a> {
    layout: &'l TextLayout<'a>,
    bounds: Rect,
    cursor: Point,
    style: FontStyle,
    ops: Vec<DrawOp>,
}

impl Pass<'_, '_> {
    fn measure(&self, text: &str) -> Size {
        let layout = self.layout;
        layout.measurer.measure(text, layout.fonts.get(self.style))
    }

    fn fits(&self, width: f32) -> bool {
        self.cursor.x + width + self.layout.config.run_advance <= self.bounds.right()
    }

    fn line_break(&mut self, height: f32) {
        self.cursor.x = self.bounds.x;
        self.cursor.y += height;
        if self.style != FontStyle::Italic {
            self.cursor.y += self.layout.config.hard_return_buffer;
        }
    }

    fn symbol(&mut self, rest: &str) -> Step {
        let layout = self.layout;
        let config = &layout.config;

        let Some(len) = token_length(rest) else {
            log::debug!("unterminated symbol token in card text");
            return Step::Overflow;
        };
        let token = &rest[..len];

        let Some(asset_key) = layout.catalog.resolve(token) else {
            log::debug!("no symbol for {}, skipping", token);
            return Step::Consumed(len);
        };

        let metrics = if asset_key == CHAOS_SYMBOL_KEY {
            &config.chaos
        } else {
            &config.mana
        };

        if self.cursor.x + metrics.advance > self.bounds.right() {
            self.cursor.x = self.bounds.x;
            self.cursor.y += metrics.line_pitch;
        }
        if self.cursor.y + metrics.line_pitch > self.bounds.bottom() {
            return Step::Overflow;
        }

        self.ops.push(DrawOp::Symbol(PlacedSymbol {
            token: token.to_string(),
            asset_key,
            rect: Rect::at(self.cursor.offset(metrics.offset), metrics.size),
        }));
        self.cursor.x += metrics.advance;

        let next = &rest[len..];
        if !next.is_empty() && !next.starts_with(TOKEN_OPEN) {
            self.cursor.x += config.symbol_correction();
        }

        Step::Consumed(len)
    }

    fn run(&mut self, rest: &str) -> Step {
        let layout = self.layout;
        let config = &layout.config;
        let delimiters = Delimiters::find(rest);
        let mut len = delimiters.run_length(rest.len());
        let mut size = self.measure(&rest[..len]);

        if !self.fits(size.width) {
            match self
                .fitting_break(&rest[..len], ' ')
                .or_else(|| self.fitting_break(&rest[..len], '-'))
            {
                Some((cut, cut_size)) => {
                    len = cut;
                    size = cut_size;
                }
                None => {
                    if let Some(word) = first_word(&rest[..len]) {
                        len = word;
                        size = self.measure(&rest[..len]);
                    }

                    let previous = self.cursor;
                    self.cursor = Point::new(self.bounds.x, self.cursor.y + size.height);

                    if !self.fits(size.width) {
                        if previous.x + config.min_remaining_width <= self.bounds.right() {
                            self.cursor = previous;
                        }
                        (len, size) = self.shrink(&rest[..len]);
                    }
                }
            }
        }

        if self.cursor.y + size.height > self.bounds.bottom() {
            return Step::Overflow;
        }

        self.ops.push(DrawOp::Text(PlacedRun {
            text: rest[..len].to_string(),
            style: self.style,
            origin: self.cursor,
        }));
        self.cursor.x += size.width + config.run_advance;

        if Some(len) == delimiters.hard_break {
            self.line_break(size.height);
            len += HARD_BREAK.len();
        }
        // Also applies when the token directly follows the hard break.
        if Some(len) == delimiters.token {
            self.cursor.x -= config.symbol_correction();
        }

        Step::Consumed(len)
    }

    /// Longest prefix ending after `ch` that fits on the current line.
    fn fitting_break(&self, text: &str, ch: char) -> Option<(usize, Size)> {
        text.match_indices(ch)
            .rev()
            .map(|(i, _)| i + ch.len_utf8())
            .filter(|&cut| cut < text.len())
            .map(|cut| (cut, self.measure(&text[..cut])))
            .find(|(_, size)| self.fits(size.width))
    }

    /// Drop trailing characters until the text fits.
    fn shrink(&self, text: &str) -> (usize, Size) {
        let mut end = text.len();
        while let Some((i, _)) = text[..end].char_indices().next_back() {
            end = i;
            if end == 0 {
                break;
            }
            let size = self.measure(&text[..end]);
            if self.fits(size.width) {
                return (end, size);
            }
        }

        // Not even one character fits; place one anyway so layout advances.
        let first = text.chars().next().map_or(0, char::len_utf8);
        (first, self.measure(&text[..first]))
    }
}

/// Length of the first word, through its space or hyphen.
fn first_word(text: &str) -> Option<usize> {
    [text.find(' '), text.find('-')]
        .into_iter()
        .flatten()
        .min()
        .map(|i| i + 1)
}
