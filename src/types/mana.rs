//! Mana symbols and casting costs.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::parser::cost::tokenize;

use super::Color;

/// What a mana symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SymbolKind {
    /// `{3}`
    Generic(u32),
    /// `{G}`
    Colored(Color),
    /// `{B/G}`
    Hybrid(Color, Color),
    /// `{W/P}`
    Phyrexian(Color),
    /// Everything else: `{X}`, `{T}`, `{CHAOS}`, unknown codes.
    Other,
}

/// One `{...}` unit of a cost or of card text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ManaSymbol {
    pub kind: SymbolKind,
    /// Code between the braces, e.g. `B/G`.
    pub code: String,
    /// Whether the code is in the fixed symbol catalog.
    pub recognized: bool,
}

impl ManaSymbol {
    /// Token text including braces.
    pub fn token(&self) -> String {
        format!("{{{}}}", self.code)
    }

    /// Contribution to converted mana cost.
    pub fn mana_value(&self) -> u32 {
        match self.kind {
            SymbolKind::Generic(n) => n,
            SymbolKind::Colored(_) | SymbolKind::Hybrid(..) | SymbolKind::Phyrexian(_) => 1,
            SymbolKind::Other => 0,
        }
    }
}

impl fmt::Display for ManaSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.code)
    }
}

/// A parsed casting cost.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CastingCost {
    raw: String,
    symbols: Vec<ManaSymbol>,
}

impl CastingCost {
    /// Parse a raw cost string such as `{2}{B}{B}`.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let symbols = tokenize(&raw)?;
        Ok(Self { raw, symbols })
    }

    /// A cost that failed to tokenize, kept as raw text with no symbols.
    pub fn raw_only(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            symbols: Vec::new(),
        }
    }

    /// The cost exactly as written on the card.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn symbols(&self) -> &[ManaSymbol] {
        &self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Converted mana cost.
    pub fn converted(&self) -> u32 {
        self.symbols.iter().map(ManaSymbol::mana_value).sum()
    }
}

impl fmt::Display for CastingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_mana_cost() {
        let cost = CastingCost::parse("{2}{B}{B}").unwrap();
        assert_eq!(cost.converted(), 4);

        let cost = CastingCost::parse("{X}{R/G}{W/P}").unwrap();
        assert_eq!(cost.converted(), 2);
    }

    #[test]
    fn test_empty_cost() {
        let cost = CastingCost::parse("").unwrap();
        assert!(cost.is_empty());
        assert_eq!(cost.converted(), 0);
    }

    #[test]
    fn test_unterminated_cost_fails() {
        assert!(CastingCost::parse("{2}{B").is_err());
    }

    #[test]
    fn test_symbol_token_text() {
        let cost = CastingCost::parse("{B/G}").unwrap();
        assert_eq!(cost.symbols()[0].token(), "{B/G}");
        assert_eq!(cost.symbols()[0].to_string(), "{B/G}");
    }
}
