//! Loading a card set from disk, classifying and resolving frames.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use cardface::discovery::{discover_paths, LoadReport};
use cardface::localization::StringTable;
use cardface::render::{rules_text_box, BuiltinCatalog, RULES_TEXT_BOX, TOKEN_RULES_TEXT_BOX};
use cardface::types::{CardRecord, ColorSet, Rarity};
use cardface::{resolve_card, validate_cards};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture_cards() -> LoadReport {
    discover_paths(&[fixtures_dir().join("cards")]).load()
}

fn card<'a>(report: &'a LoadReport, filename: &str) -> &'a CardRecord {
    report
        .cards
        .iter()
        .find(|c| c.filename == filename)
        .unwrap_or_else(|| panic!("no card {}", filename))
}

#[test]
fn loads_every_card_and_rejects_the_nameless_one() {
    let report = load_fixture_cards();

    let names: Vec<&str> = report.cards.iter().map(|c| c.filename.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "FOREST_249735",
            "LLANOWAR_ELVES_221892",
            "ROT_GOLEM",
            "TOKEN_SOLDIER_1_1_W",
        ]
    );

    assert_eq!(report.rejected.len(), 1);
    assert!(report.rejected[0].path.ends_with("TOKENS/NAMELESS.xml"));
    assert_eq!(report.diagnostics.codes(), vec!["cardface::ingest::rejected"]);
}

#[test]
fn cards_keep_their_wad() {
    let report = load_fixture_cards();
    assert_eq!(card(&report, "ROT_GOLEM").wad, "CORE");
    assert_eq!(card(&report, "TOKEN_SOLDIER_1_1_W").wad, "TOKENS");
}

#[test]
fn frames_and_boxes() {
    let report = load_fixture_cards();

    let resolved: Vec<(String, String, Option<String>)> = report
        .cards
        .iter()
        .map(|c| {
            let keys = resolve_card(c);
            (c.filename.clone(), keys.frame, keys.box_key)
        })
        .collect();

    assert_eq!(
        resolved,
        vec![
            ("FOREST_249735".into(), "G_BASIC_LAND".into(), None),
            ("LLANOWAR_ELVES_221892".into(), "G".into(), Some("PTBOX_G".into())),
            ("ROT_GOLEM".into(), "BG_ARTIFACT_HYBRID".into(), Some("PTBOX_GOLD".into())),
            ("TOKEN_SOLDIER_1_1_W".into(), "W_TOKEN2".into(), Some("PTBOX_W".into())),
        ]
    );
}

#[test]
fn identity_is_classified_at_load() {
    let report = load_fixture_cards();

    let golem = card(&report, "ROT_GOLEM");
    assert_eq!(golem.identity.colors, ColorSet::BLACK | ColorSet::GREEN);
    assert!(golem.identity.multicolor);
    assert!(golem.identity.hybrid);
    assert_eq!(golem.converted_mana_cost(), 4);

    let forest = card(&report, "FOREST_249735");
    assert!(forest.identity.colorless);
    assert_eq!(forest.converted_mana_cost(), 0);
    assert_eq!(forest.rarity, Rarity::Land);

    let soldier = card(&report, "TOKEN_SOLDIER_1_1_W");
    assert_eq!(soldier.identity.colors, ColorSet::WHITE);
    assert!(soldier.token);
}

#[test]
fn localized_text_helpers() {
    let report = load_fixture_cards();
    let strings = StringTable::load(&fixtures_dir().join("strings.yaml")).unwrap();

    let elves = card(&report, "LLANOWAR_ELVES_221892");
    assert_eq!(elves.localized_name("de-DE"), "Elfen von Llanowar");
    assert_eq!(elves.localized_name("fr-FR"), "Llanowar Elves");
    assert_eq!(elves.abilities_text("en-US"), "{T}: Add {G}.");
    assert_eq!(elves.power_toughness(), "1 / 1");
    assert_eq!(elves.type_line("en-US", &strings), "Creature — Elf Druid");
    assert_eq!(elves.type_line("de-DE", &strings), "Kreatur — Druide Elf");

    let golem = card(&report, "ROT_GOLEM");
    assert_eq!(golem.abilities_text("en-US"), "Deathtouch, trample");

    // Abilities with a resource id are drawn by the game, not as text.
    let forest = card(&report, "FOREST_249735");
    assert_eq!(forest.abilities_text("en-US"), "");
    assert_eq!(forest.type_line("en-US", &strings), "Basic Land — Forest");
}

#[test]
fn token_cards_use_the_token_text_box() {
    let report = load_fixture_cards();
    assert_eq!(rules_text_box(card(&report, "TOKEN_SOLDIER_1_1_W")), TOKEN_RULES_TEXT_BOX);
    assert_eq!(rules_text_box(card(&report, "ROT_GOLEM")), RULES_TEXT_BOX);
}

#[test]
fn fixture_set_validates_cleanly() {
    let report = load_fixture_cards();
    let result = validate_cards(&report.cards, &BuiltinCatalog);
    assert!(result.is_ok(), "{:#?}", result);
}
