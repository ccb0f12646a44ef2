//! File system scanner for card XML.
//!
//! Recursively scans source directories for `*.xml` files. A card in a
//! subdirectory of a source takes that subdirectory's name as its wad.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// A discovered card file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFile {
    pub path: PathBuf,
    /// Name of the directory the card was grouped in, or empty.
    pub wad: String,
}

impl CardFile {
    /// File name without the `.xml` extension.
    pub fn actual_filename(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub cards: Vec<CardFile>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn merge(&mut self, other: ScanResult) {
        self.cards.extend(other.cards);
    }
}

/// Scan a directory for card XML, in file name order.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        log::debug!("source {} does not exist", root.display());
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() || !is_card_file(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if manifest.is_excluded(relative) || manifest.is_excluded(path) {
            log::debug!("excluded {}", path.display());
            continue;
        }

        result.cards.push(CardFile {
            path: path.to_path_buf(),
            wad: wad_name(relative),
        });
    }

    result
}

/// Scan multiple source paths relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

/// Whether a path has an `.xml` extension (any case).
pub fn is_card_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xml"))
}

fn wad_name(relative: &Path) -> String {
    relative
        .parent()
        .and_then(|p| p.components().next())
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_default()
}
