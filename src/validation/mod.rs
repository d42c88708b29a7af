//! Validation for wrestler definitions.
//!
//! Runs a suite of checks against a wrestler and reports errors and
//! warnings. Used by `ringside validate` and before `ringside render`.

mod checks;
mod diagnostic;

pub use checks::{CUSTOM_SKIN_TONE, EMPTY_NAME, SHADOW_LIGHTER, STAT_BUDGET, STAT_RANGE};
pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::Wrestler;

/// Run all validation checks against a wrestler.
pub fn validate_wrestler(wrestler: &Wrestler) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_name(wrestler));
    result.merge(checks::check_stat_range(wrestler));
    result.merge(checks::check_stat_budget(wrestler));
    result.merge(checks::check_shadow_lightness(wrestler));
    result.merge(checks::check_custom_skin_tone(wrestler));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        let subject = if d.subject.trim().is_empty() {
            "<unnamed>"
        } else {
            d.subject.as_str()
        };
        eprintln!("{}[{}]: {}: {}", label, d.code, printer.bold(subject), d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}
