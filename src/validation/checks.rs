//! Validation checks over loaded cards.
//!
//! Each check takes the card list and returns a `ValidationResult`.

use std::collections::{BTreeSet, HashMap};

use crate::frame::resolve_card;
use crate::parser::markup::symbol_refs;
use crate::parser::cost::tokenize;
use crate::render::SymbolCatalog;
use crate::types::{CardRecord, CardType};

use super::warning::{Diagnostic, ValidationResult};

fn describe(card: &CardRecord) -> String {
    if card.wad.is_empty() {
        format!("'{}'", card.filename)
    } else {
        format!("'{}' ({})", card.filename, card.wad)
    }
}

/// Two cards claiming the same FILENAME.
pub fn check_duplicate_filenames(cards: &[CardRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, &CardRecord> = HashMap::new();

    for card in cards {
        if let Some(first) = seen.get(card.filename.as_str()) {
            result.push(
                Diagnostic::error(
                    "cardface::validate::duplicate-filename",
                    format!(
                        "Card {} is defined by both {} and {}",
                        describe(card),
                        first.actual_filename,
                        card.actual_filename
                    ),
                )
                .with_help("Give every card a unique FILENAME"),
            );
        } else {
            seen.insert(&card.filename, card);
        }
    }

    result
}

/// Cards whose frame key resolves to nothing.
pub fn check_frame_keys(cards: &[CardRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for card in cards {
        if resolve_card(card).frame.is_empty() {
            result.push(
                Diagnostic::warning(
                    "cardface::validate::empty-frame",
                    format!("Card {} resolves to an empty frame key", describe(card)),
                )
                .with_help("Basic lands need a Forest, Island, Mountain, Plains or Swamp subtype"),
            );
        }
    }

    result
}

/// Casting costs that do not tokenize, or use symbols outside the catalog.
pub fn check_cost_symbols(cards: &[CardRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for card in cards {
        let cost = card.cost_text();
        match tokenize(cost) {
            Err(e) => result.push(Diagnostic::error(
                "cardface::validate::malformed-cost",
                format!("Card {} has a malformed casting cost {:?}: {}", describe(card), cost, e),
            )),
            Ok(symbols) => {
                for symbol in symbols.iter().filter(|s| !s.recognized) {
                    result.push(Diagnostic::warning(
                        "cardface::validate::unknown-cost-symbol",
                        format!("Card {} uses unknown cost symbol {}", describe(card), symbol),
                    ));
                }
            }
        }
    }

    result
}

/// Unterminated tokens and unknown symbols in ability and flavour text.
pub fn check_text_markup(cards: &[CardRecord], catalog: &dyn SymbolCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for card in cards {
        let languages: BTreeSet<&str> = card
            .abilities
            .iter()
            .flat_map(|a| a.text.keys().map(String::as_str))
            .collect();

        let mut texts: Vec<(String, String)> = languages
            .into_iter()
            .map(|lang| (format!("{} rules text", lang), card.abilities_text(lang)))
            .collect();
        let mut flavour: Vec<(&String, &String)> = card.flavour.iter().collect();
        flavour.sort();
        texts.extend(
            flavour
                .into_iter()
                .map(|(lang, text)| (format!("{} flavour text", lang), text.clone())),
        );

        for (what, text) in &texts {
            match symbol_refs(text) {
                Err(e) => result.push(
                    Diagnostic::error(
                        "cardface::validate::unterminated-token",
                        format!("Card {} {}: {}", describe(card), what, e),
                    )
                    .with_help("Text after the unterminated token is not drawn"),
                ),
                Ok(tokens) => {
                    let unknown: BTreeSet<&str> = tokens
                        .into_iter()
                        .filter(|t| catalog.resolve(t).is_none())
                        .collect();
                    for token in unknown {
                        result.push(Diagnostic::warning(
                            "cardface::validate::unknown-symbol",
                            format!("Card {} {} uses unknown symbol {}", describe(card), what, token),
                        ));
                    }
                }
            }
        }
    }

    result
}

/// Creatures without power or toughness.
pub fn check_creature_stats(cards: &[CardRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for card in cards {
        if card.types.contains(CardType::Creature) && (card.power.is_none() || card.toughness.is_none()) {
            result.push(
                Diagnostic::warning(
                    "cardface::validate::missing-power-toughness",
                    format!("Creature {} has no power/toughness", describe(card)),
                )
                .with_help("Add <POWER value=\"..\" /> and <TOUGHNESS value=\"..\" />"),
            );
        }
    }

    result
}
