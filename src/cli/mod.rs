pub mod classify;
pub mod completions;
pub mod cost_image;
pub mod frame;
pub mod init;
pub mod layout;
pub mod validate;

use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::{CardError, Result};
use crate::output::Printer;
use crate::parser::parse_card;
use crate::types::CardRecord;
use crate::validation::print_diagnostics;

/// cardface - Card identity and text layout for DotP card XML
#[derive(Parser, Debug)]
#[command(name = "cardface")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenize a casting cost and classify its colours
    Classify(classify::ClassifyArgs),

    /// Resolve frame and power/toughness box keys for cards
    Frame(frame::FrameArgs),

    /// Lay out rules text markup inside a text box
    Layout(layout::LayoutArgs),

    /// Composite a casting cost into a PNG strip
    CostImage(cost_image::CostImageArgs),

    /// Validate card XML without rendering
    Validate(validate::ValidateArgs),

    /// Initialize a cardface project (generates cardface.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read and parse one card file, printing any ingestion warnings.
pub(crate) fn read_card(path: &Path, printer: &Printer) -> Result<CardRecord> {
    let xml = fs::read_to_string(path).map_err(|e| CardError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let parsed = parse_card(&stem, &xml, "")?;
    if !parsed.diagnostics.is_empty() {
        print_diagnostics(&parsed.diagnostics, printer);
    }
    Ok(parsed.card)
}

/// The manifest of the project at `root`, or defaults when there is none.
pub(crate) fn project_manifest(root: &Path) -> Result<Manifest> {
    let path = root.join(MANIFEST_FILENAME);
    if path.exists() {
        Manifest::load(&path)
    } else {
        Ok(Manifest::default())
    }
}
