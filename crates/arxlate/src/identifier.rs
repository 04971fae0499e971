//! DOI and arXiv identifier extraction.
//!
//! Items reach the library through many import paths, so the DOI is not always in the DOI
//! field. [`extract_doi`] looks in three places, in order:
//!
//! 1. The dedicated DOI field
//! 2. The URL field, taking everything after `doi.org/`
//! 3. The free-text notes field, matching a `DOI: 10.xxxx/...` line
//!
//! arXiv registers DOIs under the `10.48550` prefix (`10.48550/arXiv.2410.07087`), and
//! [`extract_arxiv_id`] pulls the `digits.digits` identifier back out of such a DOI.
//!
//! # Examples
//!
//! ```
//! use arxlate::{identifier, item::Item};
//!
//! let item = Item::new("K1", "Some paper").with_doi("10.48550/arXiv.2410.07087");
//! let doi = identifier::extract_doi(&item).unwrap();
//! assert_eq!(identifier::extract_arxiv_id(&doi).as_deref(), Some("2410.07087"));
//! ```

use super::*;

lazy_static! {
  /// `DOI: 10.xxxx/...` anywhere in free text.
  static ref NOTES_DOI: Regex = Regex::new(r"(?i)DOI:\s*(10\.\d+/\S+)").unwrap();
  /// DOIs minted by arXiv itself.
  static ref ARXIV_DOI: Regex = Regex::new(r"(?i)10\.48550/arxiv\.(\d+\.\d+)").unwrap();
  // NOTE: matches anywhere in the DOI, so a non-arXiv DOI that happens to contain
  // `arxiv.<digits>.<digits>` is accepted as well.
  static ref ARXIV_LOOSE: Regex = Regex::new(r"(?i)arxiv\.(\d+\.\d+)").unwrap();
}

/// Marker preceding the DOI in resolver URLs.
const DOI_URL_MARKER: &str = "doi.org/";

/// A DOI together with the arXiv identifier it encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
  /// The DOI as found on the item
  pub doi:      String,
  /// Normalized arXiv identifier, e.g. `2410.07087`
  pub arxiv_id: String,
}

impl Identifier {
  /// Extracts both identifiers from an item.
  ///
  /// # Errors
  ///
  /// - [`ArxlateError::NoDoi`] when no DOI can be found on the item
  /// - [`ArxlateError::NoArxivId`] when the DOI does not encode an arXiv identifier
  pub fn from_item(item: &Item) -> Result<Self> {
    let doi = extract_doi(item).ok_or(ArxlateError::NoDoi)?;
    let arxiv_id = extract_arxiv_id(&doi).ok_or_else(|| ArxlateError::NoArxivId(doi.clone()))?;
    trace!("Item {} has DOI {doi} and arXiv id {arxiv_id}", item.key);
    Ok(Self { doi, arxiv_id })
  }
}

/// Finds the DOI of an item.
///
/// Returns the first non-empty candidate from the DOI field, the URL field, and the notes
/// field, trimmed of surrounding whitespace. Absence is not an error.
pub fn extract_doi(item: &Item) -> Option<String> {
  let from_field = || item.doi.as_deref().map(str::trim).filter(|doi| !doi.is_empty());

  let from_url = || {
    item
      .url
      .as_deref()
      .and_then(|url| url.split_once(DOI_URL_MARKER))
      .map(|(_, doi)| doi.trim())
      .filter(|doi| !doi.is_empty())
  };

  let from_extra = || {
    item
      .extra
      .as_deref()
      .and_then(|extra| NOTES_DOI.captures(extra))
      .and_then(|cap| cap.get(1))
      .map(|m| m.as_str().trim())
      .filter(|doi| !doi.is_empty())
  };

  from_field().or_else(from_url).or_else(from_extra).map(str::to_owned)
}

/// Extracts the `digits.digits` arXiv identifier encoded in a DOI.
///
/// The arXiv DOI form `10.48550/arXiv.<id>` is tried first, then a bare `arXiv.<id>` anywhere in
/// the string. Both are case-insensitive.
pub fn extract_arxiv_id(doi: &str) -> Option<String> {
  ARXIV_DOI
    .captures(doi)
    .or_else(|| ARXIV_LOOSE.captures(doi))
    .and_then(|cap| cap.get(1))
    .map(|m| m.as_str().to_owned())
}

/// Whether the item carries a DOI that encodes an arXiv identifier.
pub fn has_arxiv_id(item: &Item) -> bool {
  extract_doi(item).and_then(|doi| extract_arxiv_id(&doi)).is_some()
}
