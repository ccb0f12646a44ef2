//! Card loader: parses discovered files into card records.
//!
//! A file that fails to read or parse is rejected on its own; loading carries
//! on with the rest and the failure is reported as an error diagnostic.

use std::fs;
use std::path::PathBuf;

use crate::error::{CardError, Result};
use crate::parser::parse_card;
use crate::types::CardRecord;
use crate::validation::{Diagnostic, ValidationResult};

use super::scanner::{CardFile, ScanResult};

/// A card file that could not be loaded.
#[derive(Debug)]
pub struct RejectedCard {
    pub path: PathBuf,
    pub error: CardError,
}

/// Everything loaded from a scan.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub cards: Vec<CardRecord>,
    /// Ingestion warnings, plus one error per rejected file.
    pub diagnostics: ValidationResult,
    pub rejected: Vec<RejectedCard>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.diagnostics.is_empty()
    }
}

/// Load every scanned card file.
pub fn load_cards(scan: &ScanResult) -> LoadReport {
    let mut report = LoadReport::default();

    for file in &scan.cards {
        match load_card(file) {
            Ok(parsed) => {
                report.diagnostics.merge(parsed.diagnostics);
                report.cards.push(parsed.card);
            }
            Err(error) => {
                log::warn!("rejected {}: {}", file.path.display(), error);
                report.diagnostics.push(
                    Diagnostic::error(
                        "cardface::ingest::rejected",
                        format!("{}: {}", file.path.display(), error),
                    )
                    .with_help("The card is skipped; other cards still load"),
                );
                report.rejected.push(RejectedCard {
                    path: file.path.clone(),
                    error,
                });
            }
        }
    }

    report
}

fn load_card(file: &CardFile) -> Result<crate::parser::ParsedCard> {
    let content = fs::read_to_string(&file.path).map_err(|e| CardError::Io {
        path: file.path.clone(),
        message: e.to_string(),
    })?;

    parse_card(&file.actual_filename(), &content, &file.wad)
}
