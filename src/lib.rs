//! cardface - Card identity and text layout
//!
//! Reads Duels of the Planeswalkers `CARD_V2` XML, derives each card's colour
//! identity from its casting cost, resolves the frame and power/toughness box
//! it is drawn with, and lays out its rules text with inline mana symbols.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod frame;
pub mod identity;
pub mod localization;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, load_cards, DiscoveryResult, LoadReport, Manifest, ScanResult};
pub use error::{CardError, Result};
pub use frame::{resolve, resolve_card, FrameAndBox, FrameInput};
pub use identity::{classify, ColorIdentity};
pub use localization::{LocalizationStore, StringTable};
pub use parser::{parse_card, parse_markup, tokenize, ParsedCard};
pub use render::{
    layout, BuiltinCatalog, CostImageCache, FsImageStore, ImageStore, LayoutResult, Rect,
    SymbolCatalog, TextLayout, TextMeasurer,
};
pub use types::{CardRecord, CastingCost, Color, ColorSet, ManaSymbol};
pub use validation::{validate_cards, Diagnostic, Severity, ValidationResult};
