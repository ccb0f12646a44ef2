//! Colour identity classification.
//!
//! A card's identity is derived once, at ingestion, from the raw casting cost
//! and an optional colour override. The scans run against the raw strings
//! rather than parsed tokens, so any uppercase colour letter anywhere in the
//! cost counts.
//!
//! # Example
//!
//! ```
//! use cardface::identity::classify;
//! use cardface::types::Color;
//!
//! let identity = classify("{B/G}", None);
//! assert!(identity.multicolor);
//! assert!(identity.hybrid);
//! assert!(identity.colors.contains(Color::Green));
//! ```

mod rules;

use serde::Serialize;

use crate::types::ColorSet;

pub use rules::{ColorRule, COLOR_LETTER_RULES, HYBRID_PATTERNS, PHYREXIAN_PATTERNS};

/// Derived colour information for a card.
///
/// `multicolor` and `colorless` are stored rather than recomputed because
/// frame resolution reads them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ColorIdentity {
    pub colors: ColorSet,
    pub colorless: bool,
    pub multicolor: bool,
    pub hybrid: bool,
    pub phyrexian: bool,
}

impl ColorIdentity {
    /// Short colour text: the WUBRG letters, or `C` when colourless.
    pub fn color_text(&self) -> String {
        if self.colorless {
            "C".to_string()
        } else {
            self.colors.to_string()
        }
    }
}

/// Classify a casting cost (and optional colour override).
pub fn classify(cost: &str, color_override: Option<&str>) -> ColorIdentity {
    let mut colors = rules::scan_colors(cost);

    let hybrid = rules::any_pattern(cost, &HYBRID_PATTERNS);
    let phyrexian = rules::any_pattern(cost, &PHYREXIAN_PATTERNS);

    if let Some(extra) = color_override {
        colors |= rules::scan_colors(extra);
    }

    ColorIdentity {
        colors,
        colorless: colors.is_empty(),
        multicolor: colors.count() >= 2,
        hybrid,
        phyrexian,
    }
}
