//! Localized UI strings.
//!
//! String lookup is a collaborator: the engine only needs
//! [`LocalizationStore`]. [`StringTable`] is a simple in-memory
//! implementation that can be loaded from YAML.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CardError, Result};

/// Language used when a string is missing for the requested language.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Looks up localized strings by language code and key.
pub trait LocalizationStore {
    fn lookup(&self, lang: &str, key: &str) -> Option<String>;
}

/// Strings per language, with a default locale fallback.
///
/// YAML layout:
///
/// ```yaml
/// default: en-US
/// strings:
///   en-US:
///     CARD_TYPE_CREATURE: Creature
///   de-DE:
///     CARD_TYPE_CREATURE: Kreatur
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StringTable {
    #[serde(default = "default_language")]
    default: String,
    #[serde(default)]
    strings: HashMap<String, HashMap<String, String>>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl StringTable {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            strings: HashMap::new(),
        }
    }

    pub fn insert(&mut self, lang: impl Into<String>, key: impl Into<String>, value: impl Into<String>) {
        self.strings
            .entry(lang.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn default_language(&self) -> &str {
        &self.default
    }

    /// Replace the fallback language read from the table.
    pub fn set_default_language(&mut self, lang: impl Into<String>) {
        self.default = lang.into();
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| CardError::Parse {
            message: format!("Invalid string table: {}", e),
            help: Some("Expected `default:` and a `strings:` mapping per language".to_string()),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read string table: {}", e),
        })?;
        Self::parse(&content)
    }
}

impl LocalizationStore for StringTable {
    fn lookup(&self, lang: &str, key: &str) -> Option<String> {
        self.strings
            .get(lang)
            .and_then(|table| table.get(key))
            .or_else(|| self.strings.get(&self.default).and_then(|t| t.get(key)))
            .cloned()
    }
}

/// Readable stand-in for a missing key: `CARD_SUBTYPE_ELF_WARRIOR` -> `Elf Warrior`.
pub fn humanize_key(key: &str, prefix: &str) -> String {
    key.strip_prefix(prefix)
        .unwrap_or(key)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
