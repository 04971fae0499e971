//! Command line interface for attaching machine-translated arXiv PDFs to library items.
//!
//! This crate drives the `arxlate` library against a file-backed library directory. It supports:
//! - Writing a default configuration
//! - Adding items to the library
//! - Checking which items carry an arXiv DOI
//! - Translating selected items, or every eligible item in one batch
//!
//! # Usage
//!
//! ```bash
//! # Write the default configuration
//! arxlate init
//!
//! # Add an item
//! arxlate add ABCD1234 --title "Some paper" --doi 10.48550/arXiv.2410.07087
//!
//! # Show the identifiers found on an item
//! arxlate check ABCD1234
//!
//! # Translate specific items
//! arxlate translate ABCD1234 EFGH5678
//!
//! # Translate every item with an arXiv DOI
//! arxlate batch
//! ```
//!
//! Logging verbosity is raised with repeated `-v` flags or set with `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use arxlate::{
  error::ArxlateError, identifier, item::Item, library::LocalLibrary, prelude::*,
  translator::Translator, Config,
};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Attach machine-translated arXiv PDFs to library items")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default platform-specific
  /// config directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Path to the library directory. Overrides `library_path` from the configuration.
  #[arg(long, short, global = true)]
  library: Option<PathBuf>,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

impl Cli {
  /// Configuration file this invocation reads and writes.
  fn config_path(&self) -> PathBuf { self.config.clone().unwrap_or_else(Config::default_path) }

  /// Loads the configuration, applying command line overrides.
  fn load_config(&self) -> Result<Config> {
    let config = Config::load_or_default(self.config_path())?;
    Ok(match &self.library {
      Some(library) => config.with_library_path(library),
      None => config,
    })
  }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the arxlate CLI application
///
/// # Errors
///
/// Returns [`ArxlatedError`] when the configuration or library cannot be loaded, an item key
/// does not exist, or a prompt fails. Per-item translation failures are reported, not returned.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);
  trace!("Using configuration file {:?}", cli.config_path());

  match cli.command.clone() {
    Commands::Init(init_args) => init(&cli, init_args),
    Commands::Add(add_args) => add(&cli, add_args).await,
    Commands::Check(check_args) => check(&cli, check_args).await,
    Commands::Translate(translate_args) => translate(&cli, translate_args).await,
    Commands::Batch(batch_args) => batch(&cli, batch_args).await,
  }
}
