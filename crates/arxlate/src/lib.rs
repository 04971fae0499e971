//! Translated arXiv PDF retrieval for reference libraries.
//!
//! `arxlate` takes bibliographic items whose DOI points at an arXiv preprint, downloads a
//! machine-translated PDF of that preprint from a translation service, and attaches it to the
//! item in a reference library. It provides:
//!
//! - DOI and arXiv identifier extraction from item metadata
//! - Retrieval of translated PDFs over HTTP
//! - Attachment import through a pluggable store with guaranteed transient-file cleanup
//! - Sequential batch processing with per-item progress reporting
//!
//! # Getting Started
//!
//! ```no_run
//! use arxlate::{
//!   library::LocalLibrary,
//!   prelude::*,
//!   progress::SilentReporter,
//!   translator::Translator,
//!   Config,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::load_or_default(Config::default_path())?;
//!   let library = LocalLibrary::open(&config.library_path).await?;
//!   let items = library.items().await?;
//!
//!   let mut translator = Translator::new(config, library)?;
//!   let report = translator.batch_translate(&items, &mut SilentReporter).await;
//!   println!("{} attached, {} failed", report.succeeded(), report.failed());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`identifier`]: DOI and arXiv identifier extraction
//! - [`fetcher`]: HTTP retrieval of translated PDFs
//! - [`attachment`]: Writing a PDF buffer into an [`AttachmentStore`](store::AttachmentStore)
//! - [`translator`]: Single-item and batch orchestration
//! - [`store`] and [`progress`]: The collaborator traits the pipeline is written against
//! - [`library`]: A file-backed library implementing the store traits
//! - [`configuration`]: Service endpoint, naming, and path settings

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod attachment;
pub mod configuration;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod identifier;
pub mod item;
pub mod library;
pub mod progress;
pub mod store;
pub mod translator;

pub use crate::configuration::Config;
use crate::{error::*, item::*, progress::*, store::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use arxlate::prelude::*;
///
/// async fn count_items<R: ItemRepository>(repo: &R) -> Result<usize, ArxlateError> {
///   Ok(repo.items().await?.len())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    error::ArxlateError,
    progress::ProgressReporter,
    store::{AttachmentStore, ItemRepository},
  };
}
