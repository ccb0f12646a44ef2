//! Frame and power/toughness box resolution.
//!
//! Maps a classified identity plus type information to the asset keys used
//! to draw a card: the frame (e.g. `BG_ARTIFACT_HYBRID`) and, for most
//! frames, a power/toughness box (e.g. `PTBOX_GOLD`).
//!
//! Resolution is pure: the same input always gives the same keys. The
//! precedence lives in [`rules`] as ordered tables.

pub mod rules;

use serde::Serialize;

use crate::identity::ColorIdentity;
use crate::types::{CardRecord, SubType, SuperTypeFlags, TypeFlags};

/// Everything frame resolution looks at.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub identity: &'a ColorIdentity,
    pub types: TypeFlags,
    pub supertypes: SuperTypeFlags,
    pub subtypes: &'a [SubType],
    pub extra_frame_type: &'a str,
    pub is_token: bool,
}

impl<'a> FrameInput<'a> {
    pub fn from_card(card: &'a CardRecord) -> Self {
        Self {
            identity: &card.identity,
            types: card.types,
            supertypes: card.supertypes,
            subtypes: &card.subtypes,
            extra_frame_type: &card.frame_type,
            is_token: card.token,
        }
    }
}

/// Result of a base colour rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFrame {
    pub code: &'static str,
    pub box_key: Option<&'static str>,
    /// Chosen by the multicolour rule.
    pub multicolor: bool,
    /// The multicolour rule fell back to the wildcard frame.
    pub wildcard: bool,
}

/// Resolved frame and box keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FrameAndBox {
    pub frame: String,
    #[serde(rename = "box")]
    pub box_key: Option<String>,
}

/// Resolve the frame and box keys for a card.
pub fn resolve(input: &FrameInput<'_>) -> FrameAndBox {
    if let Some(frame) = rules::basic_land_frame(input) {
        if frame.is_empty() {
            log::debug!("basic land without a basic land subtype; frame key left empty");
        }
        return FrameAndBox {
            frame: frame.to_string(),
            box_key: None,
        };
    }

    let Some(base) = rules::BASE_RULES.iter().find_map(|(_, rule)| rule(input)) else {
        return FrameAndBox::default();
    };

    let mut frame = base.code.to_string();
    for (_, rule) in rules::SUFFIX_RULES.iter() {
        if let Some(suffix) = rule(input, &base) {
            frame.push_str(&suffix);
        }
    }

    FrameAndBox {
        frame,
        box_key: base.box_key.map(str::to_string),
    }
}

/// Resolve the keys for an ingested card.
pub fn resolve_card(card: &CardRecord) -> FrameAndBox {
    resolve(&FrameInput::from_card(card))
}
