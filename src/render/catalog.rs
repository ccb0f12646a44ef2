//! Symbol token to asset key mapping.

use std::collections::HashMap;

use crate::parser::cost::classify_code;
use crate::types::SymbolKind;

/// Asset key of the planar chaos symbol. It is drawn with its own metrics.
pub const CHAOS_SYMBOL_KEY: &str = "CHAOS_UNLOCK_SYMBOL";

/// Resolves a `{...}` token (braces included) to a drawable asset key.
pub trait SymbolCatalog {
    fn resolve(&self, token: &str) -> Option<String>;
}

/// The fixed catalog of mana and game symbols.
///
/// | token     | key            |
/// |-----------|----------------|
/// | `{3}`     | `MANA_3`       |
/// | `{G}`     | `MANA_G`       |
/// | `{B/G}`   | `MANA_BG`      |
/// | `{W/P}`   | `MANA_WP`      |
/// | `{X}`     | `MANA_X`       |
/// | `{T}`     | `SYMBOL_TAP`   |
/// | `{Q}`     | `SYMBOL_UNTAP` |
/// | `{CHAOS}` | `CHAOS_UNLOCK_SYMBOL` |
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl SymbolCatalog for BuiltinCatalog {
    fn resolve(&self, token: &str) -> Option<String> {
        let code = token.strip_prefix('{')?.strip_suffix('}')?;
        let symbol = classify_code(code);
        if !symbol.recognized {
            return None;
        }

        let key = match symbol.kind {
            SymbolKind::Generic(n) => format!("MANA_{}", n),
            SymbolKind::Colored(c) => format!("MANA_{}", c.letter()),
            SymbolKind::Hybrid(a, b) => format!("MANA_{}{}", a.letter(), b.letter()),
            SymbolKind::Phyrexian(c) => format!("MANA_{}P", c.letter()),
            SymbolKind::Other => match code {
                "T" => "SYMBOL_TAP".to_string(),
                "Q" => "SYMBOL_UNTAP".to_string(),
                "CHAOS" => CHAOS_SYMBOL_KEY.to_string(),
                other => format!("MANA_{}", other),
            },
        };
        Some(key)
    }
}

/// Explicit token table, e.g. for custom symbols.
impl SymbolCatalog for HashMap<String, String> {
    fn resolve(&self, token: &str) -> Option<String> {
        self.get(token).cloned()
    }
}
