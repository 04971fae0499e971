//! Error types for the arxlate library.
//!
//! Every stage of the translation pipeline reports failure through [`ArxlateError`]:
//! - Identifier extraction ([`ArxlateError::NoDoi`], [`ArxlateError::NoArxivId`])
//! - Retrieval of the translated PDF ([`ArxlateError::Download`], [`ArxlateError::Network`])
//! - Import into the library ([`ArxlateError::Attachment`], [`ArxlateError::Path`])
//!
//! # Examples
//!
//! ```
//! use arxlate::{error::ArxlateError, identifier::Identifier, item::Item};
//!
//! let item = Item::new("ABCD1234", "A paper without identifiers");
//! match Identifier::from_item(&item) {
//!   Err(ArxlateError::NoDoi) => println!("nothing to translate"),
//!   Err(e) => println!("other error: {e}"),
//!   Ok(id) => println!("arXiv {}", id.arxiv_id),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`arxlate`](crate) crate.
pub type Result<T> = core::result::Result<T, ArxlateError>;

/// Errors that can occur while translating and attaching papers.
#[derive(Error, Debug)]
pub enum ArxlateError {
  /// No DOI could be found in the item's DOI field, URL field, or notes.
  #[error("No DOI found for this item")]
  NoDoi,

  /// A DOI was found but it does not encode an arXiv identifier.
  ///
  /// The string parameter holds the DOI that was inspected.
  #[error("DOI \"{0}\" does not contain an arXiv identifier")]
  NoArxivId(String),

  /// The translation service answered, but not with a usable PDF.
  ///
  /// This covers non-success HTTP statuses and empty response bodies.
  #[error("Download failed: {0}")]
  Download(String),

  /// The request to the translation service could not be completed.
  ///
  /// Transport failures (DNS, TLS, connection resets, truncated bodies) land here. They are
  /// download failures from the pipeline's point of view.
  #[error("Download failed: {0}")]
  Network(#[from] reqwest::Error),

  /// The attachment store rejected an import or an update.
  #[error("Attachment error: {0}")]
  Attachment(String),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The library index could not be read or written.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// No item with the given key exists in the library.
  #[error("No item with key \"{0}\" in the library")]
  ItemNotFound(String),

  /// The configuration is invalid.
  #[error("{0}")]
  Config(String),
}

impl ArxlateError {
  /// Whether this error came from retrieving the translated PDF.
  pub fn is_download(&self) -> bool { matches!(self, Self::Download(_) | Self::Network(_)) }

  /// Whether this error came from writing or importing the attachment.
  pub fn is_attachment(&self) -> bool { matches!(self, Self::Attachment(_) | Self::Path(_)) }
}
