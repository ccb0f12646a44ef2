//! Core domain types for cardface.
//!
//! - `Color` / `ColorSet` - the five colours and sets of them
//! - `TypeFlags` / `SuperTypeFlags` - card type bit sets
//! - `ManaSymbol` / `CastingCost` - parsed casting costs
//! - `CardRecord` - an ingested card

mod card;
mod card_type;
mod color;
mod mana;
mod subtype;

pub use card::{Ability, CardRecord, Legality, LegalityStatus, Rarity};
pub use card_type::{CardType, SuperType, SuperTypeFlags, TypeFlags};
pub use color::{Color, ColorSet};
pub use mana::{CastingCost, ManaSymbol, SymbolKind};
pub use subtype::SubType;
