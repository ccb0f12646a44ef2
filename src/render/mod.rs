//! Card text layout and image assets.
//!
//! Nothing here rasterizes text. Layout produces positioned draw operations
//! that a front end paints; images come from an [`ImageStore`].

mod catalog;
mod cost_image;
mod fonts;
mod geometry;
mod layout;
mod store;

pub use catalog::{BuiltinCatalog, SymbolCatalog, CHAOS_SYMBOL_KEY};
pub use cost_image::{build_strip, CostImageCache, CostImageConfig, EMPTY_COST_KEY};
pub use fonts::{FontSpec, FontStyle, Fonts, MonospaceMeasurer, TextMeasurer};
pub use geometry::{Point, Rect, Size};
pub use layout::{
    layout, rules_text_box, DrawOp, LayoutConfig, LayoutResult, PlacedRun, PlacedSymbol,
    SymbolMetrics, TextLayout, RULES_TEXT_BOX, TOKEN_RULES_TEXT_BOX,
};
pub use store::{FsImageStore, ImageCategory, ImageStore};
