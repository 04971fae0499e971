use super::*;

pub mod add;
pub mod batch;
pub mod check;
pub mod init;
pub mod translate;

pub use add::{add, AddArgs};
pub use batch::{batch, BatchArgs};
pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use translate::{translate, TranslateArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a default configuration file
  Init(InitArgs),

  /// Add an item to the library, replacing any item with the same key
  Add(AddArgs),

  /// Show the DOI and arXiv identifier found on items
  Check(CheckArgs),

  /// Translate the given items and attach the PDFs
  Translate(TranslateArgs),

  /// Translate every item with an arXiv DOI, or only those among the given keys
  Batch(BatchArgs),
}

/// Opens the library named by the configuration.
async fn open_library(config: &Config) -> Result<LocalLibrary> {
  debug!("Opening library at {:?}", config.library_path);
  Ok(LocalLibrary::open(&config.library_path).await?)
}
