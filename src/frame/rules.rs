//! Ordered rule tables for frame resolution.
//!
//! Base rules run top to bottom and the first one that returns a frame wins.
//! Suffix rules all run, in order, each contributing an optional suffix.

use crate::types::{CardType, Color, ColorSet, SuperType};

use super::{BaseFrame, FrameInput};

/// Basic land subtypes and their frames, checked per subtype in this order.
pub const BASIC_LAND_FRAMES: [(&str, &str); 5] = [
    ("FOREST", "G_BASIC_LAND"),
    ("ISLAND", "U_BASIC_LAND"),
    ("MOUNTAIN", "R_BASIC_LAND"),
    ("PLAINS", "W_BASIC_LAND"),
    ("SWAMP", "B_BASIC_LAND"),
];

/// Exact two-colour combinations and their frame codes.
pub const TWO_COLOR_FRAMES: [(ColorSet, &str); 10] = [
    (ColorSet::BLACK.union(ColorSet::GREEN), "BG"),
    (ColorSet::BLACK.union(ColorSet::RED), "BR"),
    (ColorSet::RED.union(ColorSet::GREEN), "RG"),
    (ColorSet::BLUE.union(ColorSet::BLACK), "UB"),
    (ColorSet::BLUE.union(ColorSet::GREEN), "UG"),
    (ColorSet::BLUE.union(ColorSet::RED), "UR"),
    (ColorSet::WHITE.union(ColorSet::BLACK), "WB"),
    (ColorSet::WHITE.union(ColorSet::GREEN), "WG"),
    (ColorSet::WHITE.union(ColorSet::RED), "WR"),
    (ColorSet::WHITE.union(ColorSet::BLUE), "WU"),
];

/// Frame for any other multicolour combination.
pub const WILDCARD_FRAME: &str = "Z";
pub const GOLD_BOX: &str = "PTBOX_GOLD";

/// Single colours in test order: black, blue, green, red, white.
pub const MONO_FRAMES: [(Color, &str, &str); 5] = [
    (Color::Black, "B", "PTBOX_B"),
    (Color::Blue, "U", "PTBOX_U"),
    (Color::Green, "G", "PTBOX_G"),
    (Color::Red, "R", "PTBOX_R"),
    (Color::White, "W", "PTBOX_W"),
];

pub type BaseRule = fn(&FrameInput<'_>) -> Option<BaseFrame>;
pub type SuffixRule = fn(&FrameInput<'_>, &BaseFrame) -> Option<String>;

/// Base colour rules, first match wins.
pub const BASE_RULES: [(&str, BaseRule); 3] = [
    ("multicolor", multicolor_base),
    ("colorless", colorless_base),
    ("monocolor", monocolor_base),
];

/// Suffix rules, applied in order.
pub const SUFFIX_RULES: [(&str, SuffixRule); 4] = [
    ("artifact", artifact_suffix),
    ("token", token_suffix),
    ("hybrid", hybrid_suffix),
    ("extra-frame-type", extra_frame_suffix),
];

/// Frame for a basic land, if the card is one.
///
/// `Some("")` means the card is a basic land but none of its subtypes
/// name a basic land type.
pub fn basic_land_frame(input: &FrameInput<'_>) -> Option<&'static str> {
    if !(input.supertypes.contains(SuperType::Basic) && input.types.contains(CardType::Land)) {
        return None;
    }

    let frame = input
        .subtypes
        .iter()
        .find_map(|sub| {
            BASIC_LAND_FRAMES
                .iter()
                .find(|(name, _)| sub.name == *name)
                .map(|(_, frame)| *frame)
        })
        .unwrap_or("");

    Some(frame)
}

pub fn multicolor_base(input: &FrameInput<'_>) -> Option<BaseFrame> {
    if !input.identity.multicolor {
        return None;
    }

    let colors = input.identity.colors;
    let (code, wildcard) = TWO_COLOR_FRAMES
        .iter()
        .find(|(set, _)| *set == colors)
        .map(|(_, code)| (*code, false))
        .unwrap_or((WILDCARD_FRAME, true));

    Some(BaseFrame {
        code,
        box_key: Some(GOLD_BOX),
        multicolor: true,
        wildcard,
    })
}

pub fn colorless_base(input: &FrameInput<'_>) -> Option<BaseFrame> {
    if !input.identity.colorless {
        return None;
    }

    let (code, box_key) = if input.types.contains(CardType::Land) {
        if input.types.contains(CardType::Artifact) {
            ("C", Some("PTBOX_A"))
        } else {
            ("C_LAND", None)
        }
    } else {
        ("C", Some("PTBOX_C"))
    };

    Some(BaseFrame {
        code,
        box_key,
        multicolor: false,
        wildcard: false,
    })
}

pub fn monocolor_base(input: &FrameInput<'_>) -> Option<BaseFrame> {
    MONO_FRAMES
        .iter()
        .find(|(color, _, _)| input.identity.colors.contains(*color))
        .map(|&(_, code, box_key)| BaseFrame {
            code,
            box_key: Some(box_key),
            multicolor: false,
            wildcard: false,
        })
}

pub fn artifact_suffix(input: &FrameInput<'_>, _base: &BaseFrame) -> Option<String> {
    input
        .types
        .contains(CardType::Artifact)
        .then(|| "_ARTIFACT".to_string())
}

pub fn token_suffix(input: &FrameInput<'_>, _base: &BaseFrame) -> Option<String> {
    input.is_token.then(|| "_TOKEN2".to_string())
}

pub fn hybrid_suffix(input: &FrameInput<'_>, base: &BaseFrame) -> Option<String> {
    (base.multicolor && !input.is_token && input.identity.hybrid && !base.wildcard)
        .then(|| "_HYBRID".to_string())
}

pub fn extra_frame_suffix(input: &FrameInput<'_>, _base: &BaseFrame) -> Option<String> {
    let extra = input.extra_frame_type.trim();
    (!extra.is_empty()).then(|| format!("_{}", extra.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{classify, ColorIdentity};
    use crate::types::{SubType, SuperTypeFlags, TypeFlags};

    fn input<'a>(identity: &'a ColorIdentity, types: TypeFlags, subtypes: &'a [SubType]) -> FrameInput<'a> {
        FrameInput {
            identity,
            types,
            supertypes: SuperTypeFlags::NONE,
            subtypes,
            extra_frame_type: "",
            is_token: false,
        }
    }

    #[test]
    fn test_two_color_table_is_exhaustive() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                let set = ColorSet::from_color(*a).with(*b);
                assert!(TWO_COLOR_FRAMES.iter().any(|(s, _)| *s == set));
            }
        }
    }

    #[test]
    fn test_multicolor_rule_wildcard() {
        let id = classify("{W}{U}{B}", None);
        let base = multicolor_base(&input(&id, TypeFlags::NONE, &[])).unwrap();
        assert_eq!(base.code, "Z");
        assert!(base.wildcard);
        assert_eq!(base.box_key, Some("PTBOX_GOLD"));
    }

    #[test]
    fn test_multicolor_rule_skips_single_color() {
        let id = classify("{G}", None);
        assert!(multicolor_base(&input(&id, TypeFlags::NONE, &[])).is_none());
    }

    #[test]
    fn test_colorless_rule_variants() {
        let id = classify("", None);

        let land = colorless_base(&input(&id, CardType::Land.into(), &[])).unwrap();
        assert_eq!((land.code, land.box_key), ("C_LAND", None));

        let artifact_land = colorless_base(&input(
            &id,
            TypeFlags::from(CardType::Land) | TypeFlags::from(CardType::Artifact),
            &[],
        ))
        .unwrap();
        assert_eq!((artifact_land.code, artifact_land.box_key), ("C", Some("PTBOX_A")));

        let artifact = colorless_base(&input(&id, CardType::Artifact.into(), &[])).unwrap();
        assert_eq!((artifact.code, artifact.box_key), ("C", Some("PTBOX_C")));
    }

    #[test]
    fn test_monocolor_rule_precedence() {
        // Without the multicolor rule a two-colour card falls to the first colour tested.
        let id = classify("{W}{B}", None);
        let base = monocolor_base(&input(&id, TypeFlags::NONE, &[])).unwrap();
        assert_eq!(base.code, "B");
    }

    #[test]
    fn test_hybrid_suffix_needs_non_wildcard_multicolor() {
        let id = classify("{B/G}", None);
        let i = input(&id, TypeFlags::NONE, &[]);
        let base = multicolor_base(&i).unwrap();
        assert_eq!(hybrid_suffix(&i, &base).as_deref(), Some("_HYBRID"));

        let wild = BaseFrame { wildcard: true, ..base };
        assert_eq!(hybrid_suffix(&i, &wild), None);

        let token = FrameInput { is_token: true, ..input(&id, TypeFlags::NONE, &[]) };
        assert_eq!(hybrid_suffix(&token, &base), None);
    }

    #[test]
    fn test_extra_frame_suffix_uppercases() {
        let id = classify("{R}", None);
        let i = FrameInput { extra_frame_type: "planeswalker", ..input(&id, TypeFlags::NONE, &[]) };
        let base = monocolor_base(&i).unwrap();
        assert_eq!(extra_frame_suffix(&i, &base).as_deref(), Some("_PLANESWALKER"));
    }

    #[test]
    fn test_basic_land_rule_first_matching_subtype() {
        let id = classify("", None);
        let subtypes = vec![SubType::new("Swamp", 0), SubType::new("Forest", 1)];
        let i = FrameInput {
            supertypes: SuperType::Basic.into(),
            ..input(&id, CardType::Land.into(), &subtypes)
        };
        assert_eq!(basic_land_frame(&i), Some("B_BASIC_LAND"));
    }
}
