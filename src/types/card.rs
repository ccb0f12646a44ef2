//! Ingested card records.
//!
//! A `CardRecord` is built once from card XML (see `parser::card`) and is
//! read-only afterwards. Its colour identity is classified at that point and
//! never recomputed.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::identity::ColorIdentity;
use crate::localization::{humanize_key, LocalizationStore, DEFAULT_LANGUAGE};

use super::{CardType, CastingCost, SubType, SuperTypeFlags, TypeFlags};

/// Card rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Rarity {
    #[default]
    None,
    Token,
    Land,
    Common,
    Uncommon,
    Rare,
    Mythic,
    Special,
}

impl Rarity {
    /// Parse a one-letter rarity metaname.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "T" => Some(Rarity::Token),
            "L" => Some(Rarity::Land),
            "C" => Some(Rarity::Common),
            "U" => Some(Rarity::Uncommon),
            "R" => Some(Rarity::Rare),
            "M" => Some(Rarity::Mythic),
            "S" => Some(Rarity::Special),
            _ => None,
        }
    }
}

/// Play status of a card in a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LegalityStatus {
    Legal,
    Restricted,
    Banned,
}

impl LegalityStatus {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "legal" => Some(LegalityStatus::Legal),
            "restricted" => Some(LegalityStatus::Restricted),
            "banned" => Some(LegalityStatus::Banned),
            _ => None,
        }
    }
}

/// One `<LEGALITY>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legality {
    pub format: String,
    pub status: LegalityStatus,
}

/// One ability on a card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Ability {
    /// Reminder text per language.
    pub text: HashMap<String, String>,
    /// Abilities with a non-negative resource id draw their text elsewhere.
    pub resource_id: i32,
    /// Joined to the previous ability with ", " instead of a hard break.
    pub comma_space: bool,
}

impl Ability {
    /// Whether the ability contributes to the card's rules text.
    pub fn is_displayed(&self) -> bool {
        !self.text.is_empty() && self.resource_id < 0
    }
}

/// A card as read from its XML definition.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CardRecord {
    /// File name without extension, as found on disk.
    pub actual_filename: String,
    /// FILENAME tag.
    pub filename: String,
    pub card_name: Option<String>,
    /// Wad the card was loaded from; empty for loose files.
    pub wad: String,
    pub names: HashMap<String, String>,
    pub flavour: HashMap<String, String>,
    pub image_name: Option<String>,
    pub cost: Option<CastingCost>,
    pub color_override: Option<String>,
    pub identity: ColorIdentity,
    pub types: TypeFlags,
    pub supertypes: SuperTypeFlags,
    pub subtypes: Vec<SubType>,
    pub abilities: Vec<Ability>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub artist: Option<String>,
    pub expansion: Option<String>,
    pub rarity: Rarity,
    pub multiverse_id: i32,
    pub token: bool,
    /// Uppercased FRAME_TYPE.
    pub frame_type: String,
    pub registered_tokens: BTreeSet<String>,
    pub reverse_face: Option<String>,
    pub legalities: Vec<Legality>,
    /// Tags not otherwise understood, uppercased name to values.
    pub custom_tags: BTreeMap<String, Vec<String>>,
}

impl CardRecord {
    /// Raw casting cost, empty when the card has none.
    pub fn cost_text(&self) -> &str {
        self.cost.as_ref().map(CastingCost::raw).unwrap_or("")
    }

    pub fn converted_mana_cost(&self) -> u32 {
        self.cost.as_ref().map(CastingCost::converted).unwrap_or(0)
    }

    /// Localized name, falling back to en-US, then empty.
    pub fn localized_name(&self, lang: &str) -> &str {
        self.localized_name_or(lang, DEFAULT_LANGUAGE)
    }

    /// Localized name, falling back to `fallback`, then empty.
    pub fn localized_name_or(&self, lang: &str, fallback: &str) -> &str {
        localized(&self.names, lang, fallback).unwrap_or("")
    }

    /// Localized flavour text, falling back to en-US.
    pub fn localized_flavour(&self, lang: &str) -> Option<&str> {
        self.localized_flavour_or(lang, DEFAULT_LANGUAGE)
    }

    pub fn localized_flavour_or(&self, lang: &str, fallback: &str) -> Option<&str> {
        localized(&self.flavour, lang, fallback)
    }

    /// Rules text for a language as markup, falling back to en-US.
    pub fn abilities_text(&self, lang: &str) -> String {
        self.abilities_text_or(lang, DEFAULT_LANGUAGE)
    }

    /// Rules text for a language as markup.
    ///
    /// Displayed abilities are joined with a hard break, or with ", " when the
    /// following ability is marked comma-space. Abilities missing `lang` use
    /// their `fallback` text.
    pub fn abilities_text_or(&self, lang: &str, fallback: &str) -> String {
        let mut text = String::new();

        for ability in self.abilities.iter().filter(|a| a.is_displayed()) {
            if !text.is_empty() {
                text.push_str(if ability.comma_space { ", " } else { "\r\n" });
            }
            if let Some(line) = localized(&ability.text, lang, fallback) {
                text.push_str(line.trim());
            }
        }

        text
    }

    /// Status in `format`. Formats missing from a card's legality list are
    /// banned; `None` when the card carries no legality data.
    pub fn format_legality(&self, format: &str) -> Option<LegalityStatus> {
        if self.legalities.is_empty() {
            return None;
        }
        let status = self
            .legalities
            .iter()
            .find(|l| l.format == format)
            .map_or(LegalityStatus::Banned, |l| l.status);
        Some(status)
    }

    /// "P / T", or empty when the card has no power.
    pub fn power_toughness(&self) -> String {
        match &self.power {
            Some(power) => format!(
                "{} / {}",
                power,
                self.toughness.as_deref().unwrap_or_default()
            ),
            None => String::new(),
        }
    }

    /// Type line for a language, e.g. "Legendary Creature — Elf Warrior".
    pub fn type_line(&self, lang: &str, strings: &dyn LocalizationStore) -> String {
        let lookup = |key: String, prefix: &str| {
            strings.lookup(lang, &key).unwrap_or_else(|| {
                log::debug!("no localized string for {} ({})", key, lang);
                humanize_key(&key, prefix)
            })
        };

        let mut parts: Vec<String> = Vec::new();

        for supertype in self.supertypes.iter() {
            parts.push(lookup(format!("CARD_SUPERTYPE_{}", supertype.name()), "CARD_SUPERTYPE_"));
        }

        // Tribal leads the card types.
        if self.types.contains(CardType::Tribal) {
            parts.push(lookup(format!("CARD_TYPE_{}", CardType::Tribal.name()), "CARD_TYPE_"));
        }
        for ty in self.types.iter().filter(|t| *t != CardType::Tribal) {
            parts.push(lookup(format!("CARD_TYPE_{}", ty.name()), "CARD_TYPE_"));
        }

        if !self.subtypes.is_empty() {
            parts.push("—".to_string());
            let mut subtypes: Vec<&SubType> = self.subtypes.iter().collect();
            subtypes.sort_by_key(|s| s.order_for(lang));
            for sub in subtypes {
                parts.push(lookup(sub.localization_key(), "CARD_SUBTYPE_"));
            }
        }

        parts.join(" ")
    }
}

fn localized<'a>(map: &'a HashMap<String, String>, lang: &str, fallback: &str) -> Option<&'a str> {
    map.get(lang)
        .or_else(|| map.get(fallback))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::StringTable;
    use crate::types::SuperType;

    fn ability(text: &str, comma_space: bool) -> Ability {
        Ability {
            text: [("en-US".to_string(), text.to_string())].into_iter().collect(),
            resource_id: -1,
            comma_space,
        }
    }

    #[test]
    fn test_abilities_text_joins() {
        let card = CardRecord {
            abilities: vec![
                ability("Flying", false),
                ability("vigilance", true),
                ability("  {T}: Add {W}. ", false),
                Ability { resource_id: 3, ..ability("hidden", false) },
            ],
            ..Default::default()
        };
        assert_eq!(card.abilities_text("de-DE"), "Flying, vigilance\r\n{T}: Add {W}.");
    }

    #[test]
    fn test_localized_name_fallback() {
        let card = CardRecord {
            names: [
                ("en-US".to_string(), "Llanowar Elves".to_string()),
                ("de-DE".to_string(), "Elfen von Llanowar".to_string()),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        };
        assert_eq!(card.localized_name("de-DE"), "Elfen von Llanowar");
        assert_eq!(card.localized_name("ja-JP"), "Llanowar Elves");
        assert_eq!(card.localized_name_or("ja-JP", "de-DE"), "Elfen von Llanowar");
        assert_eq!(card.localized_name_or("ja-JP", "fr-FR"), "");
    }

    #[test]
    fn test_abilities_text_uses_given_fallback() {
        let card = CardRecord {
            abilities: vec![Ability {
                text: [
                    ("en-US".to_string(), "Flying".to_string()),
                    ("de-DE".to_string(), "Fliegend".to_string()),
                ]
                .into_iter()
                .collect(),
                resource_id: -1,
                comma_space: false,
            }],
            flavour: [("de-DE".to_string(), "Hoch oben.".to_string())].into_iter().collect(),
            ..Default::default()
        };

        assert_eq!(card.abilities_text("it-IT"), "Flying");
        assert_eq!(card.abilities_text_or("it-IT", "de-DE"), "Fliegend");
        assert_eq!(card.localized_flavour("it-IT"), None);
        assert_eq!(card.localized_flavour_or("it-IT", "de-DE"), Some("Hoch oben."));
    }

    #[test]
    fn test_format_legality() {
        let card = CardRecord {
            legalities: vec![
                Legality {
                    format: "Standard".to_string(),
                    status: LegalityStatus::Legal,
                },
                Legality {
                    format: "Vintage".to_string(),
                    status: LegalityStatus::Restricted,
                },
            ],
            ..Default::default()
        };

        assert_eq!(card.format_legality("Vintage"), Some(LegalityStatus::Restricted));
        assert_eq!(card.format_legality("Modern"), Some(LegalityStatus::Banned));
        assert_eq!(CardRecord::default().format_legality("Standard"), None);
        assert_eq!(LegalityStatus::from_name(" BANNED "), Some(LegalityStatus::Banned));
        assert_eq!(LegalityStatus::from_name("Maybe"), None);
    }

    #[test]
    fn test_power_toughness() {
        let card = CardRecord {
            power: Some("2".into()),
            toughness: Some("3".into()),
            ..Default::default()
        };
        assert_eq!(card.power_toughness(), "2 / 3");
        assert_eq!(CardRecord::default().power_toughness(), "");
    }

    #[test]
    fn test_type_line_order() {
        let mut strings = StringTable::new("en-US");
        strings.insert("de-DE", "CARD_TYPE_CREATURE", "Kreatur");
        strings.insert("de-DE", "CARD_SUBTYPE_ELF", "Elf");
        strings.insert("de-DE", "CARD_SUBTYPE_WARRIOR", "Krieger");

        let card = CardRecord {
            types: [CardType::Creature, CardType::Tribal].into_iter().collect(),
            supertypes: SuperType::Legendary.into(),
            subtypes: vec![
                SubType::new("Elf", 0).with_order("de-DE", 1),
                SubType::new("Warrior", 1).with_order("de-DE", 0),
            ],
            ..Default::default()
        };

        assert_eq!(
            card.type_line("en-US", &strings),
            "Legendary Tribal Creature — Elf Warrior"
        );
        assert_eq!(
            card.type_line("de-DE", &strings),
            "Legendary Tribal Kreatur — Krieger Elf"
        );
    }
}
