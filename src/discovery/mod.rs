//! Card discovery and loading for cardface projects.
//!
//! Finds card XML under a project directory, either everywhere below the
//! root or under the sources named in a `cardface.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use cardface::discovery::discover;
//!
//! let result = discover("./deck")?;
//! println!("Found {} cards", result.scan.total());
//!
//! let report = result.load();
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::localization::StringTable;

pub use loader::{load_cards, LoadReport, RejectedCard};
pub use manifest::Manifest;
pub use scanner::{is_card_file, scan_directory, scan_sources, CardFile, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "cardface.yaml";

#[derive(Debug)]
pub struct DiscoveryResult {
    pub root: PathBuf,

    /// The loaded manifest, or defaults when there is none.
    pub manifest: Manifest,

    pub has_manifest: bool,

    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse every discovered card.
    pub fn load(&self) -> LoadReport {
        load_cards(&self.scan)
    }

    /// The manifest's string table, or an empty one.
    ///
    /// A `fallback_language` in the manifest replaces the table's `default:`.
    pub fn strings(&self) -> Result<StringTable> {
        let mut table = match &self.manifest.strings {
            Some(path) => StringTable::load(&self.root.join(path))?,
            None => StringTable::default(),
        };
        if let Some(fallback) = &self.manifest.fallback_language {
            table.set_default_language(fallback.clone());
        }
        Ok(table)
    }
}

/// Discover cards in a project directory.
///
/// Uses the sources of `cardface.yaml` when the root has one, otherwise scans
/// the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);
    log::debug!("discovered {} card files under {}", scan.total(), root.display());

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover cards from explicit files and directories, without a manifest.
pub fn discover_paths(paths: &[PathBuf]) -> DiscoveryResult {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() && is_card_file(path) {
            scan.cards.push(CardFile {
                path: path.clone(),
                wad: String::new(),
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    }
}
