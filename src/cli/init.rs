//! Init command implementation.
//!
//! Generates a `cardface.yaml` manifest from discovered card XML.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, PathBuf};

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{CardError, Result};
use crate::localization::DEFAULT_LANGUAGE;
use crate::output::{display_path, plural, Printer};

/// Initialize a cardface project by generating a cardface.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Language to render
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Overwrite existing cardface.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(CardError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;
    let scan = &discovery.scan;

    // Top-level directories holding cards; a loose card means the root itself.
    let mut source_dirs = BTreeSet::new();
    let mut loose = false;
    for file in &scan.cards {
        let relative = file.path.strip_prefix(&discovery.root).unwrap_or(&file.path);
        let mut components = relative.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(dir)), Some(_)) => {
                source_dirs.insert(format!("{}/", dir.to_string_lossy()));
            }
            _ => loose = true,
        }
    }

    let mut yaml = String::new();

    if !loose && !source_dirs.is_empty() {
        yaml.push_str("sources:\n");
        for dir in &source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str(&format!("language: {}\n", args.language));
    yaml.push_str("assets: assets\n");

    fs::write(&manifest_path, &yaml).map_err(|e| CardError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() && !loose {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "card", "cards")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Manifest;
    use tempfile::tempdir;

    fn args(path: PathBuf, force: bool) -> InitArgs {
        InitArgs {
            path,
            language: DEFAULT_LANGUAGE.to_string(),
            force,
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("FOREST.xml"), "<CARD_V2 />").unwrap();

        run(args(dir.path().to_path_buf(), false), &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join("cardface.yaml")).unwrap();
        assert!(content.contains("language: en-US"));
        assert!(!content.contains("sources:"));

        let manifest = Manifest::parse(&content).unwrap();
        assert_eq!(manifest.effective_sources(), vec!["."]);
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cardface.yaml"), "language: de-DE").unwrap();

        assert!(run(args(dir.path().to_path_buf(), false), &Printer::plain()).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cardface.yaml"), "language: de-DE").unwrap();

        run(args(dir.path().to_path_buf(), true), &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join("cardface.yaml")).unwrap();
        assert!(content.contains("language: en-US"));
    }

    #[test]
    fn test_init_discovers_source_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("core/LANDS")).unwrap();
        fs::create_dir_all(dir.path().join("promo")).unwrap();
        fs::write(dir.path().join("core/LANDS/FOREST.xml"), "<CARD_V2 />").unwrap();
        fs::write(dir.path().join("promo/SHOCK.xml"), "<CARD_V2 />").unwrap();

        run(args(dir.path().to_path_buf(), false), &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join("cardface.yaml")).unwrap();
        let manifest = Manifest::parse(&content).unwrap();
        assert_eq!(manifest.sources, vec!["core/", "promo/"]);
    }
}
