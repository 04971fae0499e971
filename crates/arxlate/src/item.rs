//! Library items and their attachments.
//!
//! An [`Item`] is owned by whatever [`ItemRepository`](crate::store::ItemRepository) produced
//! it; the pipeline only reads its fields. An [`Attachment`] is created by an
//! [`AttachmentStore`](crate::store::AttachmentStore) when a file is imported.

use super::*;

/// A bibliographic item as seen by the translation pipeline.
///
/// Only the fields the pipeline reads are modelled. Empty strings and `None` are treated the
/// same way by the identifier extractor.
///
/// # Examples
///
/// ```
/// use arxlate::item::Item;
///
/// let item = Item::new("ABCD1234", "Attention Is All You Need")
///   .with_url("https://doi.org/10.48550/arXiv.1706.03762");
/// assert_eq!(item.key, "ABCD1234");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  /// Library-unique key of the item
  pub key:   String,
  /// Display title
  #[serde(default)]
  pub title: String,
  /// Dedicated DOI field
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub doi:   Option<String>,
  /// URL field, frequently a `https://doi.org/...` link
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url:   Option<String>,
  /// Free-text notes field that may carry a `DOI: ...` line
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub extra: Option<String>,
}

impl Item {
  /// Creates an item with only a key and title set.
  pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
    Self { key: key.into(), title: title.into(), ..Default::default() }
  }

  /// Sets the DOI field.
  pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
    self.doi = Some(doi.into());
    self
  }

  /// Sets the URL field.
  pub fn with_url(mut self, url: impl Into<String>) -> Self {
    self.url = Some(url.into());
    self
  }

  /// Sets the free-text notes field.
  pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
    self.extra = Some(extra.into());
    self
  }
}

impl Display for Item {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.title.is_empty() {
      write!(f, "[{}]", self.key)
    } else {
      write!(f, "{}", self.title)
    }
  }
}

/// A file attached to a parent [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
  /// Library-unique key of the attachment
  pub key:        String,
  /// Key of the item this attachment belongs to
  pub parent_key: String,
  /// Display title shown in the library
  pub title:      String,
  /// File name of the stored file
  pub file_name:  String,
  /// Location of the stored file
  pub path:       PathBuf,
  /// When the attachment was imported
  pub date_added: DateTime<Utc>,
}
