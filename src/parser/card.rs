//! `CARD_V2` XML ingestion.
//!
//! Tag and attribute names are matched case-insensitively. Unknown values are
//! downgraded to warnings and the field keeps its default; only a missing
//! FILENAME or TITLE rejects the record.

use std::collections::HashMap;

use roxmltree::{Document, Node};

use crate::error::{CardError, Result};
use crate::identity::classify;
use crate::types::{
    Ability, CardRecord, CardType, CastingCost, Legality, LegalityStatus, Rarity, SubType, SuperType,
};
use crate::validation::{Diagnostic, ValidationResult};

/// Root element of a card definition.
pub const ROOT_TAG: &str = "CARD_V2";

/// Engine tags with nothing to show in the builder.
pub const IGNORED_TAGS: [&str; 12] = [
    "HELP",
    "SFX",
    "AI_AVAILABILITY",
    "AI_BASE_SCORE",
    "AI_COUNTER_SCORE",
    "AI_CUSTOM_SCORE",
    "AI_DONT_DUPLICATE",
    "AI_MODIFIERS",
    "ANIMATEDARTFILENAME",
    "SEALED_HEURISTICS",
    "SEALED_SYNERGY_BONUS",
    "SEALED_SYNERGY_TAG",
];

/// Tags that belong inside abilities, not directly under the card.
pub const MISUSED_TAGS: [&str; 4] = ["AI_SIMPLIFIED_TARGETING", "AUTO_SKIP", "AVAILABILITY", "MAY"];

/// A card plus the warnings raised while reading it.
#[derive(Debug, Clone)]
pub struct ParsedCard {
    pub card: CardRecord,
    pub diagnostics: ValidationResult,
}

/// Parse one card definition.
///
/// `actual_filename` is the file stem on disk and `wad` the containing wad
/// (empty for loose files); both are only used for reporting.
pub fn parse_card(actual_filename: &str, xml: &str, wad: &str) -> Result<ParsedCard> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    if !root.tag_name().name().eq_ignore_ascii_case(ROOT_TAG) {
        return Err(CardError::Parse {
            message: format!(
                "{}: expected <{}> root, found <{}>",
                actual_filename,
                ROOT_TAG,
                root.tag_name().name()
            ),
            help: None,
        });
    }

    let mut reader = CardReader::new(actual_filename, wad);
    for node in root.children().filter(Node::is_element) {
        reader.read_tag(node);
    }
    reader.finish()
}

struct CardReader {
    card: CardRecord,
    diagnostics: ValidationResult,
    cost: Option<String>,
}

impl CardReader {
    fn new(actual_filename: &str, wad: &str) -> Self {
        Self {
            card: CardRecord {
                actual_filename: actual_filename.to_string(),
                wad: wad.to_string(),
                ..Default::default()
            },
            diagnostics: ValidationResult::new(),
            cost: None,
        }
    }

    fn warn(&mut self, code: &str, message: String) {
        log::warn!("{}", message);
        self.diagnostics
            .push(Diagnostic::warning(format!("cardface::ingest::{}", code), message));
    }

    fn location(&self) -> String {
        if self.card.wad.is_empty() {
            self.card.actual_filename.clone()
        } else {
            format!("{} in {}", self.card.actual_filename, self.card.wad)
        }
    }

    fn read_tag(&mut self, node: Node<'_, '_>) {
        let tag = node.tag_name().name().to_ascii_uppercase();

        match tag.as_str() {
            "FILENAME" => self.card.filename = attr(node, "text").unwrap_or_default().to_string(),
            "CARDNAME" => self.card.card_name = attr(node, "text").map(str::to_string),
            "TITLE" => self.card.names = localized_text(node),
            "FLAVOURTEXT" => self.card.flavour = localized_text(node),
            "ARTID" => self.card.image_name = attr(node, "value").map(str::to_string),
            "CASTING_COST" => self.cost = Some(attr(node, "cost").unwrap_or_default().to_string()),
            "COLOUR" => self.card.color_override = attr(node, "value").map(str::to_string),
            "FRAME_TYPE" => {
                self.card.frame_type = attr(node, "type").unwrap_or_default().to_uppercase()
            }
            "SUPERTYPE" => self.read_supertype(node),
            "TYPE" => self.read_type(node),
            "SUB_TYPE" => self.read_subtype(node),
            "TOKEN_REGISTRATION" => {
                if let Some(ty) = attr(node, "type") {
                    self.card.registered_tokens.insert(ty.trim().to_string());
                }
            }
            "POWER" => self.card.power = attr(node, "value").map(str::to_string),
            "TOUGHNESS" => self.card.toughness = attr(node, "value").map(str::to_string),
            "TOKEN" => self.card.token = true,
            "MULTIVERSEID" => self.read_multiverse_id(node),
            "EXPANSION" => self.card.expansion = attr(node, "value").map(str::to_string),
            "ARTIST" => self.card.artist = attr(node, "name").map(str::to_string),
            "RARITY" => self.read_rarity(node),
            "REVERSE_FACE" => self.card.reverse_face = attr(node, "value").map(str::to_string),
            "LEGALITY" => self.read_legality(node),
            t if t.contains("_ABILITY") => self.read_ability(node, t),
            t if IGNORED_TAGS.contains(&t) => {}
            t if MISUSED_TAGS.contains(&t) => {
                let message = format!(
                    "Card ({}) is using the {} tag incorrectly and will likely not work in game",
                    self.location(),
                    node.tag_name().name()
                );
                self.warn("misused-tag", message);
            }
            _ => {
                let value = inner_text(node);
                if !value.is_empty() {
                    self.card.custom_tags.entry(tag.clone()).or_default().push(value);
                }
            }
        }
    }

    fn read_supertype(&mut self, node: Node<'_, '_>) {
        let name = attr(node, "metaname").unwrap_or_default();
        match SuperType::from_name(name) {
            Some(ty) => self.card.supertypes.insert(ty),
            None => {
                let message = format!("Card ({}) has an unknown supertype: {}", self.location(), name);
                self.warn("unknown-supertype", message);
            }
        }
    }

    fn read_type(&mut self, node: Node<'_, '_>) {
        let name = attr(node, "metaname").unwrap_or_default();
        match CardType::from_name(name) {
            Some(ty) => self.card.types.insert(ty),
            None => {
                let message = format!("Card ({}) has an unknown type: {}", self.location(), name);
                self.warn("unknown-type", message);
            }
        }
    }

    fn read_subtype(&mut self, node: Node<'_, '_>) {
        let name = attr(node, "metaname").unwrap_or_default().trim();
        if name.is_empty() {
            return;
        }

        let mut subtype = SubType::new(name, self.card.subtypes.len());
        for a in node.attributes() {
            let Some(lang) = strip_prefix_ignore_case(a.name(), "order_") else {
                continue;
            };
            match a.value().trim().parse::<i32>() {
                Ok(order) => subtype.set_order(lang, order),
                Err(_) => {
                    let message = format!(
                        "Card ({}) has an unreadable {} order for subtype {}: {}",
                        self.location(),
                        lang,
                        name,
                        a.value()
                    );
                    self.warn("subtype-order", message);
                }
            }
        }
        self.card.subtypes.push(subtype);
    }

    fn read_multiverse_id(&mut self, node: Node<'_, '_>) {
        let value = attr(node, "value").unwrap_or_default();
        match value.trim().parse::<i32>() {
            Ok(id) => self.card.multiverse_id = id,
            Err(_) => {
                let message = format!(
                    "Card ({}) has a multiverse id that is problematic: {}",
                    self.location(),
                    value
                );
                self.warn("multiverse-id", message);
            }
        }
    }

    fn read_rarity(&mut self, node: Node<'_, '_>) {
        let code = attr(node, "metaname").unwrap_or_default();
        if code.is_empty() {
            return;
        }
        self.card.rarity = Rarity::from_code(code).unwrap_or_else(|| {
            log::debug!("unknown rarity {:?} on {}", code, self.card.actual_filename);
            Rarity::None
        });
    }

    /// Entries are `<... value="format" status="Legal|Restricted|Banned" />`;
    /// entries with an unknown status are dropped.
    fn read_legality(&mut self, node: Node<'_, '_>) {
        for entry in node.children().filter(Node::is_element) {
            let format = attr(entry, "value").unwrap_or_default().trim();
            let status = attr(entry, "status").unwrap_or_default();
            match LegalityStatus::from_name(status) {
                Some(status) if !format.is_empty() => self.card.legalities.push(Legality {
                    format: format.to_string(),
                    status,
                }),
                _ => {
                    let message = format!(
                        "Unable to load legality of {} ({:?} is {:?})",
                        self.location(),
                        format,
                        status
                    );
                    self.warn("legality", message);
                }
            }
        }
    }

    fn read_ability(&mut self, node: Node<'_, '_>, tag: &str) {
        let resource_id = match attr(node, "resource_id") {
            None => -1,
            Some(value) => match value.trim().parse::<i32>() {
                Ok(id) => id,
                Err(_) => {
                    let message = format!(
                        "Unable to read resource id {:?} of {} in {}",
                        value,
                        tag,
                        self.location()
                    );
                    self.warn("ability-resource-id", message);
                    -1
                }
            },
        };

        let comma_space = attr(node, "commaspace")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        self.card.abilities.push(Ability {
            text: localized_text(node),
            resource_id,
            comma_space,
        });
    }

    fn finish(mut self) -> Result<ParsedCard> {
        // Planeswalkers are never also enchantments.
        if self.card.types.contains(CardType::Planeswalker) {
            self.card.types.remove(CardType::Enchantment);
        }

        if self.card.filename.is_empty() {
            return Err(CardError::MissingRequiredField {
                card: self.card.actual_filename,
                field: "FILENAME",
                help: Some("Add <FILENAME text=\"...\" /> to the card".to_string()),
            });
        }
        if self.card.names.is_empty() {
            return Err(CardError::MissingRequiredField {
                card: self.card.actual_filename,
                field: "TITLE",
                help: Some("Add a <TITLE> with at least one LOCALISED_TEXT entry".to_string()),
            });
        }

        if let Some(raw) = self.cost.take() {
            let cost = match CastingCost::parse(raw.as_str()) {
                Ok(cost) => cost,
                Err(e) => {
                    let message = format!("Card ({}) has a malformed casting cost {:?}: {}", self.location(), raw, e);
                    self.warn("casting-cost", message);
                    CastingCost::raw_only(raw)
                }
            };
            self.card.cost = Some(cost);
        }

        self.card.identity = classify(self.card.cost_text(), self.card.color_override.as_deref());

        Ok(ParsedCard {
            card: self.card,
            diagnostics: self.diagnostics,
        })
    }
}

/// Attribute value by case-insensitive name.
fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name().eq_ignore_ascii_case(name))
        .map(|a| a.value())
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

/// `LOCALISED_TEXT LanguageCode="..."` children, language to text.
fn localized_text(node: Node<'_, '_>) -> HashMap<String, String> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case("LOCALISED_TEXT"))
        .filter_map(|n| {
            let lang = attr(n, "LanguageCode")?;
            Some((lang.to_string(), inner_text(n)))
        })
        .collect()
}

fn inner_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}
