//! Classify command implementation.
//!
//! Tokenizes a casting cost and prints its colour identity.

use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::identity::{classify, ColorIdentity};
use crate::output::{print_json, Printer};
use crate::parser::tokenize;
use crate::types::ManaSymbol;

/// Tokenize a casting cost and classify its colours
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Casting cost, e.g. "{2}{B/G}"
    #[arg(default_value = "")]
    pub cost: String,

    /// Colour override letters, as in a card's COLOUR tag
    #[arg(long)]
    pub colour: Option<String>,

    /// Print JSON to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct Classification {
    pub cost: String,
    /// `None` when the cost does not tokenize.
    pub symbols: Option<Vec<ManaSymbol>>,
    pub converted_mana_cost: u32,
    pub identity: ColorIdentity,
}

/// Tokenize and classify without printing.
pub fn classify_cost(cost: &str, colour: Option<&str>) -> Classification {
    let symbols = match tokenize(cost) {
        Ok(symbols) => Some(symbols),
        Err(e) => {
            log::warn!("cost {:?} does not tokenize: {}", cost, e);
            None
        }
    };
    let converted_mana_cost = symbols
        .iter()
        .flatten()
        .map(ManaSymbol::mana_value)
        .sum();

    Classification {
        cost: cost.to_string(),
        symbols,
        converted_mana_cost,
        identity: classify(cost, colour),
    }
}

pub fn run(args: ClassifyArgs, printer: &Printer) -> Result<()> {
    let result = classify_cost(&args.cost, args.colour.as_deref());

    if args.json {
        return print_json(&result);
    }

    match &result.symbols {
        Some(symbols) => {
            let unknown: Vec<String> = symbols
                .iter()
                .filter(|s| !s.recognized)
                .map(ToString::to_string)
                .collect();
            if !unknown.is_empty() {
                printer.warning("Unknown", &unknown.join(" "));
            }
        }
        None => printer.warning("Malformed", &format!("{:?} scanned as raw text", result.cost)),
    }

    let id = &result.identity;
    let mut flags = Vec::new();
    if id.multicolor {
        flags.push("multicolor");
    }
    if id.colorless {
        flags.push("colorless");
    }
    if id.hybrid {
        flags.push("hybrid");
    }
    if id.phyrexian {
        flags.push("phyrexian");
    }

    println!("colors: {}", id.color_text());
    println!("flags: {}", if flags.is_empty() { "-".to_string() } else { flags.join(", ") });
    println!("converted mana cost: {}", result.converted_mana_cost);

    Ok(())
}
