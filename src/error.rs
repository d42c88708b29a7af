use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Everything that can stop ringside from getting a wrestler onto the canvas.
#[derive(Error, Diagnostic, Debug)]
pub enum RingsideError {
    #[error("Cannot access {}: {message}", path.display())]
    #[diagnostic(code(ringside::io))]
    Io { path: PathBuf, message: String },

    /// A colour, enum value or manifest that does not parse.
    #[error("{message}")]
    #[diagnostic(code(ringside::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Wrestler file {} is malformed: {message}", path.display())]
    #[diagnostic(
        code(ringside::wrestler),
        help("Check the appearance fields against `ringside presets`")
    )]
    Wrestler { path: PathBuf, message: String },

    #[error("No wrestler files found in {}", path.display())]
    #[diagnostic(
        code(ringside::roster),
        help("Name files `*.wrestler.yaml` or pass them explicitly")
    )]
    EmptyRoster { path: PathBuf },

    #[error("Not ring-ready: {message}")]
    #[diagnostic(code(ringside::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Cannot encode {what}: {message}")]
    #[diagnostic(code(ringside::encode))]
    Encode { what: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, RingsideError>;
