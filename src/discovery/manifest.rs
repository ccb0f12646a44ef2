//! Project manifest (cardface.yaml) parsing.
//!
//! The manifest names where card XML lives, which language to render, where
//! image assets are and every layout constant. Every field has a default, so
//! an empty file and a missing file behave the same.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::localization::DEFAULT_LANGUAGE;
use crate::render::{CostImageConfig, Fonts, LayoutConfig, MonospaceMeasurer};

/// Project manifest loaded from cardface.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories scanned for card XML. Defaults to the project root.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Language code used for names, abilities and type lines.
    pub language: Option<String>,

    /// Language used when a string is missing in `language`. Overrides the
    /// string table's own `default:` when set.
    pub fallback_language: Option<String>,

    /// Image store root (`mana/`, `textures/`, `frames/`, `cards/`).
    pub assets: PathBuf,

    /// YAML string table for type-line words.
    pub strings: Option<PathBuf>,

    pub fonts: Fonts,
    pub metrics: MonospaceMeasurer,
    pub layout: LayoutConfig,
    pub cost_image: CostImageConfig,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            excludes: vec![],
            language: None,
            fallback_language: None,
            assets: PathBuf::from("assets"),
            strings: None,
            fonts: Fonts::default(),
            metrics: MonospaceMeasurer::default(),
            layout: LayoutConfig::default(),
            cost_image: CostImageConfig::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a cardface.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CardError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| CardError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check cardface.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    pub fn effective_language(&self) -> &str {
        self.language
            .as_deref()
            .unwrap_or_else(|| self.effective_fallback_language())
    }

    pub fn effective_fallback_language(&self) -> &str {
        self.fallback_language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Asset root, resolved against the project root when relative.
    pub fn assets_dir(&self, root: &Path) -> PathBuf {
        if self.assets.is_absolute() {
            self.assets.clone()
        } else {
            root.join(&self.assets)
        }
    }
}

/// Glob-ish matching: `**/dir/*` anywhere, `*.ext` suffixes, `dir/*`
/// contents, otherwise a substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        if let Some(dir) = rest.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.ends_with(rest);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}
