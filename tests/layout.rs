//! Rules text layout through the public API.

use pretty_assertions::assert_eq;

use cardface::cli::layout::describe;
use cardface::discovery::Manifest;
use cardface::render::{
    BuiltinCatalog, DrawOp, FontSpec, Fonts, LayoutResult, MonospaceMeasurer, Rect, TextLayout,
};

/// 20px faces with a half-em advance: every character is 10 wide, 20 high.
fn fonts() -> Fonts {
    Fonts {
        regular: FontSpec::new("Test", 20.0),
        italic: FontSpec::new("Test Italic", 20.0),
    }
}

fn measurer() -> MonospaceMeasurer {
    MonospaceMeasurer {
        advance: 0.5,
        line_height: 1.0,
    }
}

fn lay_out(markup: &str, bounds: Rect) -> LayoutResult {
    let fonts = fonts();
    let measurer = measurer();
    TextLayout::new(&fonts, &measurer, &BuiltinCatalog).layout(markup, bounds)
}

#[test]
fn mana_ability() {
    let result = lay_out("{T}: Add {G}.", Rect::new(0.0, 0.0, 200.0, 100.0));

    assert!(!result.overflow);
    insta::assert_snapshot!(describe(&result).trim_end(), @r#"
symbol    -4.0   -6.0  {T} SYMBOL_TAP
text      13.0    0.0  regular ": Add "
symbol    67.0   -6.0  {G} MANA_G
text      84.0    0.0  regular "."
"#);
}

#[test]
fn keyword_list_wraps() {
    let result = lay_out("Deathtouch, trample", Rect::new(0.0, 0.0, 100.0, 100.0));

    assert!(!result.overflow);
    assert_eq!(result.text(), "Deathtouch, trample");
    insta::assert_snapshot!(describe(&result).trim_end(), @r#"
text       0.0    0.0  regular "Deathtouch"
text       0.0   20.0  regular ", "
text      16.0   20.0  regular "trample"
"#);
}

#[test]
fn unterminated_token_stops_layout() {
    let result = lay_out("Pay {2 now", Rect::new(0.0, 0.0, 200.0, 100.0));

    assert!(result.overflow);
    assert_eq!(result.text(), "Pay ");
    assert_eq!(result.symbols().count(), 0);
}

#[test]
fn text_past_the_bottom_overflows() {
    let result = lay_out(
        "Flying\r\nWhenever this creature attacks, draw a card.",
        Rect::new(0.0, 0.0, 200.0, 30.0),
    );

    assert!(result.overflow);
    assert_eq!(result.text(), "Flying");
}

#[test]
fn layout_is_deterministic() {
    let markup = "|Flavour| then {CHAOS}: {2}{W/U}, sacrifice a self-replicating thing.";
    let bounds = Rect::new(15.0, 326.0, 120.0, 149.0);

    let first = lay_out(markup, bounds);
    let second = lay_out(markup, bounds);
    assert_eq!(first, second);
    assert!(first
        .ops
        .iter()
        .any(|op| matches!(op, DrawOp::Symbol(s) if s.asset_key == "CHAOS_UNLOCK_SYMBOL")));
}

#[test]
fn manifest_layout_constants_apply() {
    let manifest = Manifest::parse("layout:\n  run_advance: 0\n").unwrap();
    let fonts = fonts();
    let measurer = measurer();

    let result = TextLayout::new(&fonts, &measurer, &BuiltinCatalog)
        .with_config(manifest.layout)
        .layout("{G}{G}", Rect::new(0.0, 0.0, 200.0, 100.0));

    let xs: Vec<f32> = result.symbols().map(|s| s.rect.x).collect();
    assert_eq!(xs, vec![-4.0, 11.0]);
}

#[test]
fn layout_result_serializes_draw_ops() {
    let result = lay_out("{G}", Rect::new(0.0, 0.0, 200.0, 100.0));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["overflow"], false);
    assert_eq!(json["ops"][0]["kind"], "symbol");
    assert_eq!(json["ops"][0]["asset_key"], "MANA_G");
}
