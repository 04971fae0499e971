//! Collaborator traits for the reference library.
//!
//! The pipeline never talks to a concrete library. It reads items through an
//! [`ItemRepository`] and creates attachments through an [`AttachmentStore`], so any reference
//! manager that can list items and import files can host it.
//! [`LocalLibrary`](crate::library::LocalLibrary) implements both on a plain directory.

use super::*;

/// Read access to the items of a library.
#[async_trait]
pub trait ItemRepository: Send + Sync {
  /// Lists every regular item in the library.
  async fn items(&self) -> Result<Vec<Item>>;

  /// Looks up a single item by key.
  async fn item(&self, key: &str) -> Result<Option<Item>>;

  /// Resolves a selection of keys, preserving their order.
  ///
  /// # Errors
  ///
  /// Returns [`ArxlateError::ItemNotFound`] for the first key that does not exist.
  async fn items_by_keys(&self, keys: &[String]) -> Result<Vec<Item>> {
    let mut items = Vec::with_capacity(keys.len());
    for key in keys {
      let item = self.item(key).await?.ok_or_else(|| ArxlateError::ItemNotFound(key.clone()))?;
      items.push(item);
    }
    Ok(items)
  }
}

/// Write access for attaching files to items.
#[async_trait]
pub trait AttachmentStore: Send {
  /// Imports a file as a child attachment of `parent`.
  ///
  /// The store takes its own copy of the file; `source` may be removed once this returns.
  async fn import_attachment(
    &mut self,
    parent: &Item,
    source: &Path,
    file_name: &str,
  ) -> Result<Attachment>;

  /// Persists changes made to an attachment's fields.
  async fn save_attachment(&mut self, attachment: &Attachment) -> Result<()>;
}
