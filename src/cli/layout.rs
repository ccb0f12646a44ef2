//! Layout command implementation.
//!
//! Lays out rules text, given directly or taken from a card, and prints the
//! resulting draw operations.

use std::path::PathBuf;

use clap::Args;

use crate::error::{CardError, Result};
use crate::output::{print_json, Printer};
use crate::render::{rules_text_box, BuiltinCatalog, DrawOp, LayoutResult, Rect, TextLayout, RULES_TEXT_BOX};

use super::{project_manifest, read_card};

/// Lay out rules text markup inside a text box
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Markup to lay out, e.g. "{T}: Add {G}."
    #[arg(required_unless_present = "card", conflicts_with = "card")]
    pub markup: Option<String>,

    /// Lay out the abilities text of a card file instead
    #[arg(long)]
    pub card: Option<PathBuf>,

    /// Language of the card text (default: manifest language)
    #[arg(long)]
    pub lang: Option<String>,

    /// Text box as x,y,width,height (default: the card's rules text box)
    #[arg(long, value_parser = parse_rect)]
    pub bounds: Option<Rect>,

    /// Project directory holding cardface.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Print JSON to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LayoutArgs, printer: &Printer) -> Result<()> {
    let manifest = project_manifest(&args.project)?;
    let lang = args
        .lang
        .clone()
        .unwrap_or_else(|| manifest.effective_language().to_string());

    let (markup, default_bounds) = match (&args.markup, &args.card) {
        (Some(markup), _) => (markup.clone(), RULES_TEXT_BOX),
        (None, Some(path)) => {
            let card = read_card(path, printer)?;
            let fallback = manifest.effective_fallback_language();
            (card.abilities_text_or(&lang, fallback), rules_text_box(&card))
        }
        (None, None) => {
            return Err(CardError::Build {
                message: "Nothing to lay out".to_string(),
                help: Some("Pass markup or --card <FILE>".to_string()),
            })
        }
    };
    let bounds = args.bounds.unwrap_or(default_bounds);

    let catalog = BuiltinCatalog;
    let result = TextLayout::new(&manifest.fonts, &manifest.metrics, &catalog)
        .with_config(manifest.layout.clone())
        .layout(&markup, bounds);

    if result.overflow {
        printer.warning("Overflow", "text does not fit the box; the rest is not drawn");
    }

    if args.json {
        return print_json(&result);
    }

    print!("{}", describe(&result));
    Ok(())
}

/// One line per draw operation.
pub fn describe(result: &LayoutResult) -> String {
    let mut out = String::new();
    for op in &result.ops {
        let line = match op {
            DrawOp::Text(run) => format!(
                "text    {:>6.1} {:>6.1}  {:<7} {:?}\n",
                run.origin.x,
                run.origin.y,
                format!("{:?}", run.style).to_lowercase(),
                run.text
            ),
            DrawOp::Symbol(symbol) => format!(
                "symbol  {:>6.1} {:>6.1}  {} {}\n",
                symbol.rect.x, symbol.rect.y, symbol.token, symbol.asset_key
            ),
        };
        out.push_str(&line);
    }
    if result.overflow {
        out.push_str("overflow\n");
    }
    out
}

/// Parse `x,y,width,height`.
pub fn parse_rect(s: &str) -> std::result::Result<Rect, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("invalid number in {:?}: {}", s, e))?;

    match parts.as_slice() {
        [x, y, w, h] if *w >= 0.0 && *h >= 0.0 => Ok(Rect::new(*x, *y, *w, *h)),
        [_, _, _, _] => Err("width and height must not be negative".to_string()),
        _ => Err(format!("expected x,y,width,height, got {:?}", s)),
    }
}
