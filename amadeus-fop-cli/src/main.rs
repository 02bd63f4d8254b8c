//! Renders `FOP_CreateFormOfPayment` request documents from option files.
//!
//! # Usage
//!
//! ```bash
//! # Render to stdout with default config (fop.toml in current directory)
//! cargo run -p amadeus-fop-cli -- request.json
//!
//! # Render compact XML to a file
//! cargo run -p amadeus-fop-cli -- request.toml --compact --output request.xml
//!
//! # Configure logging level
//! RUST_LOG=debug cargo run -p amadeus-fop-cli -- request.json
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` - Path to TOML configuration file (default: `fop.toml`)
//! - `FOP_INDENT` - Override the indentation width
//! - `RUST_LOG` - Log level filter (default: `info`)

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use amadeus_fop_cli::{CliConfig, CliError, load_options, render};

#[derive(Debug, Parser)]
#[command(name = "amadeus-fop", version)]
#[command(about = "Render Amadeus FOP_CreateFormOfPayment requests from option files")]
struct Args {
    /// Options file, `.json` or `.toml`
    input: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long, env = "CONFIG", default_value = "fop.toml")]
    config: PathBuf,

    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render on a single line
    #[arg(long)]
    compact: bool,

    /// Render without validating the options
    #[arg(long)]
    skip_validation: bool,
}

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the document can be piped from stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!("Rendering failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut config = CliConfig::load_from(&args.config)?;
    config.compact |= args.compact;
    config.validate &= !args.skip_validation;
    tracing::debug!(
        config = %args.config.display(),
        indent = config.indent,
        compact = config.compact,
        validate = config.validate,
        "Loaded configuration"
    );

    let options = load_options(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        groups = options.fop_group.len(),
        "Loaded options"
    );

    let xml = render(&options, &config)?;

    match args.output.as_ref().or(config.output.as_ref()) {
        Some(path) => {
            std::fs::write(path, &xml)?;
            tracing::info!(output = %path.display(), bytes = xml.len(), "Wrote request");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
