//! Retrieval of translated PDFs.
//!
//! The translation service exposes one resource per arXiv preprint, addressed by substituting
//! the identifier into an endpoint template such as `https://hjfy.top/arxiv/{arxiv_id}`. The
//! response body is the translated PDF.
//!
//! # Examples
//!
//! ```no_run
//! use arxlate::fetcher::Fetcher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::new("https://hjfy.top/arxiv/{arxiv_id}")?;
//! let pdf = fetcher.download_translated_pdf("2410.07087").await?;
//! println!("Downloaded {} bytes", pdf.len());
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Url};

use super::*;
use crate::configuration::ARXIV_ID_PLACEHOLDER;

/// User agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the translation service.
#[derive(Debug, Clone)]
pub struct Fetcher {
  /// Shared connection pool
  client:            Client,
  /// Endpoint with an `{arxiv_id}` placeholder
  endpoint_template: String,
}

impl Fetcher {
  /// Creates a fetcher for the given endpoint template.
  ///
  /// # Errors
  ///
  /// Returns [`ArxlateError::Config`] if the template has no `{arxiv_id}` placeholder, and
  /// [`ArxlateError::Network`] if the HTTP client cannot be built.
  pub fn new(endpoint_template: impl Into<String>) -> Result<Self> {
    let endpoint_template = endpoint_template.into();
    if !endpoint_template.contains(ARXIV_ID_PLACEHOLDER) {
      return Err(ArxlateError::Config(format!(
        "endpoint template \"{endpoint_template}\" has no {ARXIV_ID_PLACEHOLDER} placeholder"
      )));
    }
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(Self { client, endpoint_template })
  }

  /// Builds the request URL for an arXiv identifier.
  pub fn endpoint(&self, arxiv_id: &str) -> Result<Url> {
    let url = self.endpoint_template.replace(ARXIV_ID_PLACEHOLDER, arxiv_id);
    Url::parse(&url).map_err(|e| ArxlateError::Config(format!("invalid endpoint {url}: {e}")))
  }

  /// Downloads the translated PDF of an arXiv preprint.
  ///
  /// The body is read chunk by chunk until exhausted and the chunks are joined in arrival order.
  /// There is no size limit, timeout, or retry.
  ///
  /// # Errors
  ///
  /// - [`ArxlateError::Download`] if the status is not a success or the body is empty
  /// - [`ArxlateError::Network`] if the request or the body transfer fails
  pub async fn download_translated_pdf(&self, arxiv_id: &str) -> Result<Vec<u8>> {
    let url = self.endpoint(arxiv_id)?;
    debug!("Requesting translated PDF from {url}");

    let mut response = self.client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
      trace!("{url} response: {response:?}");
      return Err(ArxlateError::Download(format!("{url} returned HTTP {status}")));
    }

    let mut chunks = Vec::new();
    let mut total = 0;
    while let Some(chunk) = response.chunk().await? {
      total += chunk.len();
      chunks.push(chunk);
    }
    if total == 0 {
      return Err(ArxlateError::Download(format!("{url} returned an empty body")));
    }

    let mut buffer = Vec::with_capacity(total);
    for chunk in chunks {
      buffer.extend_from_slice(&chunk);
    }
    debug!("Downloaded {total} bytes for arXiv {arxiv_id}");
    Ok(buffer)
  }
}
