//! Error types for the command-line renderer.

use std::path::PathBuf;

/// Errors that can occur while loading options or rendering a request.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON options file could not be parsed.
    #[error("invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML options or configuration file could not be parsed.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The options file extension is neither `.json` nor `.toml`.
    #[error("unsupported options file {}: expected .json or .toml", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The request could not be built or rendered.
    #[error(transparent)]
    Fop(#[from] amadeus_fop::FopError),
}
