//! Rule tables for colour classification.

use crate::types::{Color, ColorSet};

/// An uppercase letter whose presence anywhere in a cost sets a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRule {
    pub letter: char,
    pub color: Color,
}

/// Letter scan, applied in this order.
pub const COLOR_LETTER_RULES: [ColorRule; 5] = [
    ColorRule { letter: 'B', color: Color::Black },
    ColorRule { letter: 'U', color: Color::Blue },
    ColorRule { letter: 'G', color: Color::Green },
    ColorRule { letter: 'R', color: Color::Red },
    ColorRule { letter: 'W', color: Color::White },
];

/// Every ordered two-colour hybrid token.
pub const HYBRID_PATTERNS: [&str; 20] = [
    "{B/G}", "{B/R}", "{B/U}", "{B/W}",
    "{G/B}", "{G/R}", "{G/U}", "{G/W}",
    "{R/B}", "{R/G}", "{R/U}", "{R/W}",
    "{U/B}", "{U/G}", "{U/R}", "{U/W}",
    "{W/G}", "{W/R}", "{W/B}", "{W/U}",
];

/// Every phyrexian token.
pub const PHYREXIAN_PATTERNS: [&str; 5] = ["{B/P}", "{G/P}", "{R/P}", "{U/P}", "{W/P}"];

/// Collect colours whose letter occurs anywhere in `text`.
pub(crate) fn scan_colors(text: &str) -> ColorSet {
    COLOR_LETTER_RULES
        .iter()
        .filter(|rule| text.contains(rule.letter))
        .fold(ColorSet::EMPTY, |set, rule| set.with(rule.color))
}

/// Case-insensitive check for any of `patterns` in `text`.
pub(crate) fn any_pattern(text: &str, patterns: &[&str]) -> bool {
    if text.is_empty() {
        return false;
    }
    let folded = text.to_ascii_uppercase();
    patterns.iter().any(|p| folded.contains(p))
}
