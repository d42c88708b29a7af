use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, expand_paths, load_manifest};
use crate::error::{RingsideError, Result};
use crate::output::{plural, Printer};
use crate::types::{Wrestler, STAT_HIGH_LEVEL};
use crate::validation::{print_diagnostics, validate_wrestler};

/// Validate wrestler files without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Wrestler files or directories (defaults to the manifest's sources)
    pub paths: Vec<PathBuf>,

    /// Project directory holding ringside.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

/// Totals across every checked file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidateSummary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
    /// Stats at or above the slow-growth level. Informational only.
    pub slow_growth: usize,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let summary = check(&args, printer)?;

    printer.status(
        "Checked",
        &format!(
            "{}: {}, {}",
            plural(summary.files, "wrestler", "wrestlers"),
            plural(summary.errors, "error", "errors"),
            plural(summary.warnings, "warning", "warnings")
        ),
    );

    if summary.errors > 0 {
        return Err(RingsideError::Validation {
            message: format!("{} found", plural(summary.errors, "error", "errors")),
            help: None,
        });
    }
    Ok(())
}

/// Check every wrestler file, reporting as it goes. Files that fail to
/// load count as one error each and do not stop the run.
pub fn check(args: &ValidateArgs, printer: &Printer) -> Result<ValidateSummary> {
    let files = if args.paths.is_empty() {
        discover(&args.project)?.files
    } else {
        let (manifest, _) = load_manifest(&args.project)?;
        expand_paths(&args.paths, &manifest)
    };

    let mut summary = ValidateSummary {
        files: files.len(),
        ..Default::default()
    };

    for file in &files {
        match Wrestler::load(file) {
            Ok(wrestler) => {
                let result = validate_wrestler(&wrestler);
                print_diagnostics(&result, printer);
                summary.errors += result.error_count();
                summary.warnings += result.warning_count();

                for (kind, value) in wrestler.stats.high_level() {
                    printer.info(
                        "Slow growth",
                        &format!(
                            "{}: {} {} trains slowly from {} up",
                            wrestler.name, kind, value, STAT_HIGH_LEVEL
                        ),
                    );
                    summary.slow_growth += 1;
                }
            }
            Err(e) => {
                printer.error("Invalid", &e.to_string());
                summary.errors += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(project: &std::path::Path) -> ValidateArgs {
        ValidateArgs {
            paths: vec![],
            project: project.to_path_buf(),
        }
    }

    #[test]
    fn test_validate_clean_roster() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.wrestler.yaml"), "name: Ace").unwrap();
        fs::write(dir.path().join("b.wrestler.json"), r#"{"name": "Blaze"}"#).unwrap();

        let summary = check(&args(dir.path()), &Printer::new(true)).unwrap();
        assert_eq!(
            summary,
            ValidateSummary {
                files: 2,
                errors: 0,
                warnings: 0,
                slow_growth: 0,
            }
        );
        assert!(run(args(dir.path()), &Printer::new(true)).is_ok());
    }

    #[test]
    fn test_validate_counts_problems() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("a.wrestler.yaml"),
            "name: ''\nappearance:\n  skin_color: \"#108010\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("broken.wrestler.yaml"), "name: [").unwrap();

        let summary = check(&args(dir.path()), &Printer::new(true)).unwrap();
        assert_eq!(summary.files, 2);
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.warnings, 1);
        assert!(run(args(dir.path()), &Printer::new(true)).is_err());
    }

    #[test]
    fn test_validate_reports_slow_growth() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("crusher.wrestler.yaml"),
            "name: The Crusher\nstrength: 85\ncharisma: 75\nagility: 50\n",
        )
        .unwrap();

        let summary = check(&args(dir.path()), &Printer::new(true)).unwrap();
        assert_eq!(summary.slow_growth, 2);
        assert_eq!(summary.errors, 0);
        assert!(run(args(dir.path()), &Printer::new(true)).is_ok());
    }
}
