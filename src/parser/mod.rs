//! Parsers for card data.
//!
//! - [`cost`] tokenizes casting costs into mana symbols
//! - [`markup`] splits ability and flavour text into segments
//! - [`card`] reads `CARD_V2` XML into a [`CardRecord`](crate::types::CardRecord)
//!
//! # Usage
//!
//! ```ignore
//! use cardface::parser::parse_card;
//!
//! let xml = std::fs::read_to_string("cards/LLANOWAR_ELVES_123.xml")?;
//! let parsed = parse_card("LLANOWAR_ELVES_123", &xml, "")?;
//!
//! println!("{}", parsed.card.localized_name("en-US"));
//! ```

pub mod card;
pub mod cost;
pub mod markup;

pub use card::{parse_card, ParsedCard};
pub use cost::{classify_code, serialize, tokenize};
pub use markup::{parse_markup, symbol_refs, Segment};
