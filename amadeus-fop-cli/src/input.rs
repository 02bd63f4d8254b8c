//! Option file loading and rendering.

use std::path::Path;

use amadeus_fop::encoding::{encode, to_xml};
use amadeus_fop::{CreateFormOfPayment, FopCreateFopOptions};

use crate::config::CliConfig;
use crate::error::CliError;

/// Loads request options from a `.json` or `.toml` file.
///
/// # Errors
///
/// Returns [`CliError::UnsupportedFormat`] for other extensions, and an I/O
/// or parse error when the file cannot be read or decoded.
pub fn load_options(path: &Path) -> Result<FopCreateFopOptions, CliError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        Some("toml") => {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        }
        _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Renders the request document for the given options.
///
/// Options are validated first unless validation is disabled in the
/// configuration.
///
/// # Errors
///
/// Returns [`CliError::Fop`] when validation or serialization fails.
pub fn render(options: &FopCreateFopOptions, config: &CliConfig) -> Result<String, CliError> {
    let xml = config.xml_options();
    let document = if config.validate {
        encode(options, xml)?
    } else {
        tracing::warn!("Rendering without option validation");
        to_xml(&CreateFormOfPayment::new(options), xml)?
    };
    Ok(document)
}
