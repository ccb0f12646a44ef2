//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{CardError, Result};
use crate::output::{display_path, plural, print_json, Printer};
use crate::render::BuiltinCatalog;
use crate::validation::{print_diagnostics, validate_cards, ValidationResult};

/// Validate card XML without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Card files or directories (default: the current project)
    pub files: Vec<PathBuf>,

    /// Print diagnostics as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)
    };

    printer.status(
        "Loading",
        &format!(
            "{} from {}",
            plural(discovery.scan.total(), "card", "cards"),
            display_path(&discovery.root)
        ),
    );

    let report = discovery.load();
    let mut result = ValidationResult::new();
    result.merge(report.diagnostics);
    result.merge(validate_cards(&report.cards, &BuiltinCatalog));

    if args.json {
        print_json(&result)?;
    } else {
        print_diagnostics(&result, printer);
    }

    if result.has_errors() || (args.strict && result.has_warnings()) {
        return Err(CardError::Build {
            message: format!(
                "Validation failed with {}",
                plural(result.error_count(), "error", "errors")
            ),
            help: args
                .strict
                .then(|| format!("{} treated as errors (--strict)", plural(result.warning_count(), "warning", "warnings"))),
        });
    }

    Ok(())
}
