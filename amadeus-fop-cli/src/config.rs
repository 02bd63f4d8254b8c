//! Renderer configuration.
//!
//! Loads configuration from a TOML file with support for environment variable
//! expansion in string values. Variables use `$VAR` or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! indent = 4
//! compact = false
//! validate = true
//! output = "$OUT_DIR/request.xml"
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` - Path to configuration file (default: `fop.toml`)
//! - `FOP_INDENT` - Override the indentation width

use std::path::{Path, PathBuf};

use amadeus_fop::XmlOptions;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Top-level renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Spaces per indentation level (default: `2`).
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Render on a single line, ignoring `indent`.
    #[serde(default)]
    pub compact: bool,

    /// Validate options before rendering (default: `true`).
    #[serde(default = "default_validate")]
    pub validate: bool,

    /// File to write the document to; stdout when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

const fn default_indent() -> usize {
    2
}

const fn default_validate() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            compact: false,
            validate: default_validate(),
            output: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a specific file path.
    ///
    /// A missing file yields the defaults. String values with `$VAR` /
    /// `${VAR}` references are expanded from the process environment, and
    /// `FOP_INDENT` overrides the file value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let content = if path.exists() {
            std::fs::read_to_string(path)?
        } else {
            String::new()
        };

        let expanded = expand_env_vars(&content);
        let mut config: Self = toml::from_str(&expanded)?;

        if let Ok(indent) = std::env::var("FOP_INDENT") {
            if let Ok(width) = indent.parse() {
                config.indent = width;
            }
        }

        Ok(config)
    }

    /// Output settings for the XML serializer.
    #[must_use]
    pub const fn xml_options(&self) -> XmlOptions {
        if self.compact {
            XmlOptions::COMPACT
        } else {
            XmlOptions::indented(self.indent)
        }
    }
}

/// Expands `$VAR` and `${VAR}` patterns in a string from environment variables.
///
/// Unresolved variables are left as-is.
fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let braced = chars.next_if_eq(&'{').is_some();
        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if braced {
                if c == '}' {
                    chars.next();
                    break;
                }
            } else if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            name.push(c);
            chars.next();
        }

        match std::env::var(&name) {
            Ok(value) if !name.is_empty() => result.push_str(&value),
            _ if braced => {
                result.push_str("${");
                result.push_str(&name);
                if !name.is_empty() {
                    result.push('}');
                }
            }
            _ => {
                result.push('$');
                result.push_str(&name);
            }
        }
    }

    result
}
