//! Command-line rendering of Form of Payment requests.
//!
//! Reads request options from a JSON or TOML file and renders the
//! `FOP_CreateFormOfPayment` XML document.
//!
//! # Modules
//!
//! - [`config`] - Renderer configuration with environment variable expansion
//! - [`input`] - Option file loading and rendering
//! - [`error`] - CLI error types

pub mod config;
pub mod error;
pub mod input;

pub use config::CliConfig;
pub use error::CliError;
pub use input::{load_options, render};
