//! Mana cost tokenizer.
//!
//! Splits `{...}` tokens out of a cost string and classifies each code
//! against the fixed symbol catalog.

use crate::error::{CardError, Result};
use crate::types::{Color, ManaSymbol, SymbolKind};

/// Named codes that are recognized but carry no colour.
pub const NAMED_CODES: [&str; 8] = ["X", "Y", "Z", "C", "S", "T", "Q", "CHAOS"];

/// Largest generic value in the symbol catalog.
pub const MAX_GENERIC: u32 = 20;

/// Split a cost into symbols.
///
/// Characters outside braces are skipped. A `{` with no closing `}` fails
/// with [`CardError::MalformedMarkup`].
pub fn tokenize(cost: &str) -> Result<Vec<ManaSymbol>> {
    let mut symbols = Vec::new();
    let mut rest = cost;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        if open > 0 && !rest[..open].trim().is_empty() {
            log::debug!("skipping stray cost text {:?}", &rest[..open]);
        }

        let after = &rest[open + 1..];
        let close = after.find('}').ok_or(CardError::MalformedMarkup {
            offset: offset + open,
        })?;

        symbols.push(classify_code(&after[..close]));

        let consumed = open + 1 + close + 1;
        rest = &rest[consumed..];
        offset += consumed;
    }

    if !rest.trim().is_empty() {
        log::debug!("skipping stray cost text {:?}", rest);
    }

    Ok(symbols)
}

/// Classify a code (the text between braces).
pub fn classify_code(code: &str) -> ManaSymbol {
    let (kind, recognized) = match code_kind(code) {
        Some(kind) => (kind, true),
        None => (SymbolKind::Other, false),
    };

    ManaSymbol {
        kind,
        code: code.to_string(),
        recognized,
    }
}

fn code_kind(code: &str) -> Option<SymbolKind> {
    if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
        return code
            .parse::<u32>()
            .ok()
            .filter(|n| *n <= MAX_GENERIC && code == n.to_string())
            .map(SymbolKind::Generic);
    }

    if NAMED_CODES.contains(&code) {
        return Some(SymbolKind::Other);
    }

    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None, None) => Color::from_letter(c).map(SymbolKind::Colored),
        (Some(a), Some('/'), Some('P'), None) => Color::from_letter(a).map(SymbolKind::Phyrexian),
        (Some(a), Some('/'), Some(b), None) => match (Color::from_letter(a), Color::from_letter(b)) {
            (Some(a), Some(b)) if a != b => Some(SymbolKind::Hybrid(a, b)),
            _ => None,
        },
        _ => None,
    }
}

/// Re-emit symbols as a cost string.
pub fn serialize(symbols: &[ManaSymbol]) -> String {
    symbols.iter().map(ManaSymbol::token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_cost() {
        let symbols = tokenize("{2}{B}{B}").unwrap();
        let kinds: Vec<_> = symbols.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SymbolKind::Generic(2),
                SymbolKind::Colored(Color::Black),
                SymbolKind::Colored(Color::Black),
            ]
        );
        assert!(symbols.iter().all(|s| s.recognized));
    }

    #[test]
    fn test_tokenize_hybrid_and_phyrexian() {
        let symbols = tokenize("{B/G}{W/P}").unwrap();
        assert_eq!(symbols[0].kind, SymbolKind::Hybrid(Color::Black, Color::Green));
        assert_eq!(symbols[1].kind, SymbolKind::Phyrexian(Color::White));
    }

    #[test]
    fn test_tokenize_named_and_unknown() {
        let symbols = tokenize("{X}{CHAOS}{FOO}").unwrap();
        assert_eq!(symbols[0].kind, SymbolKind::Other);
        assert!(symbols[0].recognized);
        assert!(symbols[1].recognized);
        assert_eq!(symbols[2].kind, SymbolKind::Other);
        assert!(!symbols[2].recognized);
    }

    #[test]
    fn test_classification_is_exact_match() {
        assert!(!classify_code("b").recognized);
        assert!(!classify_code("B/B").recognized);
        assert!(!classify_code("02").recognized);
        assert!(!classify_code("").recognized);
    }

    #[test]
    fn test_tokenize_unterminated() {
        let err = tokenize("{1}{G").unwrap_err();
        assert!(matches!(err, CardError::MalformedMarkup { offset: 3 }));
    }

    #[test]
    fn test_tokenize_skips_stray_text() {
        let symbols = tokenize(" {1} {U} ").unwrap();
        assert_eq!(symbols.len(), 2);
    }

    #[test]
    fn test_round_trip_recognized_costs() {
        for cost in ["", "{0}", "{2}{B}{B}", "{X}{R}{R}", "{3}{B/G}{B/G}", "{1}{U/P}", "{20}", "{CHAOS}"] {
            let symbols = tokenize(cost).unwrap();
            assert!(symbols.iter().all(|s| s.recognized), "{}", cost);
            assert_eq!(serialize(&symbols), cost);
        }
    }
}
