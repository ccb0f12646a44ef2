//! Frame command implementation.
//!
//! Loads card XML and prints the frame and box keys each card resolves to.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::{discover, discover_paths};
use crate::error::Result;
use crate::frame::{resolve_card, FrameAndBox};
use crate::output::{plural, print_json, Printer};
use crate::validation::print_diagnostics;

/// Resolve frame and power/toughness box keys for cards
#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Card files or directories (default: the current project)
    pub files: Vec<PathBuf>,

    /// Print JSON to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ResolvedFrame {
    pub filename: String,
    pub colors: String,
    #[serde(flatten)]
    pub keys: FrameAndBox,
}

pub fn run(args: FrameArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)
    };

    let report = discovery.load();
    if !report.diagnostics.is_empty() {
        print_diagnostics(&report.diagnostics, printer);
    }
    printer.status("Resolved", &plural(report.cards.len(), "card", "cards"));

    let resolved: Vec<ResolvedFrame> = report
        .cards
        .iter()
        .map(|card| ResolvedFrame {
            filename: card.filename.clone(),
            colors: card.identity.color_text(),
            keys: resolve_card(card),
        })
        .collect();

    if args.json {
        return print_json(&resolved);
    }

    let width = resolved.iter().map(|r| r.filename.len()).max().unwrap_or(0);
    for r in &resolved {
        let frame = if r.keys.frame.is_empty() {
            printer.dim("(empty)")
        } else {
            printer.cyan(&r.keys.frame)
        };
        let box_key = r.keys.box_key.as_deref().unwrap_or("-");
        println!("{:<width$}  {:<5}  {}  {}", r.filename, r.colors, frame, box_key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_frame_runs_on_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("FOREST.xml");
        fs::write(
            &path,
            r#"<CARD_V2>
  <FILENAME text="FOREST" />
  <TITLE><LOCALISED_TEXT LanguageCode="en-US">Forest</LOCALISED_TEXT></TITLE>
  <SUPERTYPE metaname="Basic" />
  <TYPE metaname="Land" />
  <SUB_TYPE metaname="Forest" />
</CARD_V2>"#,
        )
        .unwrap();

        let args = FrameArgs {
            files: vec![path],
            json: true,
        };
        run(args, &Printer::plain()).unwrap();
    }
}
