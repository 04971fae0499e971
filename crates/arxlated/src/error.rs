//! Errors surfaced by the command line interface.

use thiserror::Error;

use super::*;

/// Error type alias used for the `arxlated` crate.
pub type Result<T> = core::result::Result<T, ArxlatedError>;

/// Failures of a CLI invocation.
#[derive(Error, Debug)]
pub enum ArxlatedError {
  /// An error from the `arxlate` library.
  #[error(transparent)]
  Arxlate(#[from] ArxlateError),

  /// An interactive prompt failed.
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// Writing to the terminal failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
