//! Card subtypes with per-language ordering.

use std::collections::BTreeMap;

use serde::Serialize;

/// A subtype such as `FOREST` or `ELF`.
///
/// Names are stored uppercased. Each language may order subtypes
/// differently on the type line; languages without an explicit order
/// fall back to the declaration index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubType {
    pub name: String,
    index: usize,
    order: BTreeMap<String, i32>,
}

impl SubType {
    pub fn new(name: impl AsRef<str>, index: usize) -> Self {
        Self {
            name: name.as_ref().trim().to_uppercase(),
            index,
            order: BTreeMap::new(),
        }
    }

    /// Set the sort position for a language.
    pub fn with_order(mut self, lang: impl Into<String>, order: i32) -> Self {
        self.order.insert(lang.into(), order);
        self
    }

    pub fn set_order(&mut self, lang: impl Into<String>, order: i32) {
        self.order.insert(lang.into(), order);
    }

    /// Declaration index on the card.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sort key for the given language.
    pub fn order_for(&self, lang: &str) -> i32 {
        self.order
            .get(lang)
            .copied()
            .unwrap_or(self.index as i32)
    }

    /// Localization key for this subtype.
    pub fn localization_key(&self) -> String {
        format!("CARD_SUBTYPE_{}", self.name.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_uppercased() {
        assert_eq!(SubType::new("Forest", 0).name, "FOREST");
    }

    #[test]
    fn test_order_falls_back_to_index() {
        let sub = SubType::new("Elf", 1).with_order("de-DE", 0);
        assert_eq!(sub.order_for("de-DE"), 0);
        assert_eq!(sub.order_for("en-US"), 1);
    }

    #[test]
    fn test_order_serializes_sorted_by_language() {
        let sub = SubType::new("Elf", 0)
            .with_order("fr-FR", 2)
            .with_order("de-DE", 1)
            .with_order("it-IT", 0);
        let json = serde_json::to_string(&sub).unwrap();
        assert_eq!(
            json,
            r#"{"name":"ELF","index":0,"order":{"de-DE":1,"fr-FR":2,"it-IT":0}}"#
        );
    }

    #[test]
    fn test_localization_key_replaces_spaces() {
        assert_eq!(
            SubType::new("Urza's Tower", 0).localization_key(),
            "CARD_SUBTYPE_URZA'S_TOWER"
        );
    }
}
