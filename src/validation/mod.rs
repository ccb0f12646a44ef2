//! Validation of loaded cards.
//!
//! Runs a suite of checks over a card set and reports errors and warnings.
//! Ingestion warnings use the same [`Diagnostic`] type, so `cardface
//! validate` prints both together.

mod checks;
mod warning;

pub use checks::{
    check_cost_symbols, check_creature_stats, check_duplicate_filenames, check_frame_keys,
    check_text_markup,
};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::render::SymbolCatalog;
use crate::types::CardRecord;

/// Run all validation checks against the cards.
pub fn validate_cards(cards: &[CardRecord], catalog: &dyn SymbolCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_duplicate_filenames(cards));
    result.merge(checks::check_frame_keys(cards));
    result.merge(checks::check_cost_symbols(cards));
    result.merge(checks::check_text_markup(cards, catalog));
    result.merge(checks::check_creature_stats(cards));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("with {}", plural(warnings, "warning", "warnings")));
    } else {
        printer.success("Passed", "no problems found");
    }
}
