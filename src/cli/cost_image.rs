//! Cost-image command implementation.
//!
//! Composites the mana icons of a casting cost into a PNG strip.

use std::path::PathBuf;

use clap::Args;

use crate::error::{CardError, Result};
use crate::output::{display_path, Printer};
use crate::parser::tokenize;
use crate::render::{BuiltinCatalog, CostImageCache, FsImageStore, ImageCategory, ImageStore, SymbolCatalog};

use super::project_manifest;

/// Composite a casting cost into a PNG strip
#[derive(Args, Debug)]
pub struct CostImageArgs {
    /// Casting cost, e.g. "{2}{W}{U}"
    pub cost: String,

    /// Output file
    #[arg(long, short, default_value = "cost.png")]
    pub output: PathBuf,

    /// Image store root (default: manifest assets directory)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Project directory holding cardface.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

pub fn run(args: CostImageArgs, printer: &Printer) -> Result<()> {
    let manifest = project_manifest(&args.project)?;
    let assets = args
        .assets
        .clone()
        .unwrap_or_else(|| manifest.assets_dir(&args.project));

    if !assets.is_dir() {
        printer.warning("Missing", &format!("asset directory {}", display_path(&assets)));
    }

    let store = FsImageStore::new(assets);
    report_missing_icons(&args.cost, &store, printer);

    let cache = CostImageCache::new(manifest.cost_image);
    let strip = cache.fetch_or_build(&args.cost, &BuiltinCatalog, &store)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CardError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    strip.save(&args.output).map_err(|e| CardError::Io {
        path: args.output.clone(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    printer.success(
        "Wrote",
        &format!(
            "{} ({}x{})",
            display_path(&args.output),
            strip.width(),
            strip.height()
        ),
    );
    Ok(())
}

/// Warn about cost symbols that will leave an empty slot.
fn report_missing_icons(cost: &str, store: &dyn ImageStore, printer: &Printer) {
    let Ok(symbols) = tokenize(cost) else {
        return;
    };
    for symbol in symbols {
        let token = symbol.token();
        match BuiltinCatalog.resolve(&token) {
            Some(key) => {
                if let Err(e) = store.fetch(&key, ImageCategory::Mana) {
                    printer.warning("Missing", &e.to_string());
                }
            }
            None => printer.warning("Unknown", &format!("no symbol for {}", token)),
        }
    }
}
