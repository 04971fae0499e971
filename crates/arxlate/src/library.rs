//! A reference library kept in a plain directory.
//!
//! The layout follows the usual reference-manager convention of one storage folder per
//! attachment:
//!
//! ```text
//! <root>/
//! ├── library.json          items and attachment records
//! └── storage/
//!     └── <attachment key>/
//!         └── <file name>.pdf
//! ```
//!
//! Attachment keys are derived from the parent key (`ABCD1234-1`, `ABCD1234-2`, ...).

use super::*;

/// On-disk contents of `library.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LibraryIndex {
  /// Regular items
  #[serde(default)]
  items:       Vec<Item>,
  /// Attachments of those items
  #[serde(default)]
  attachments: Vec<Attachment>,
}

/// File-backed library implementing [`ItemRepository`] and [`AttachmentStore`].
///
/// # Examples
///
/// ```no_run
/// use arxlate::{item::Item, library::LocalLibrary, prelude::*};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut library = LocalLibrary::open("my-library").await?;
/// let item = Item::new("ABCD1234", "Some paper").with_doi("10.48550/arXiv.2410.07087");
/// library.add_item(item).await?;
/// assert_eq!(library.items().await?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LocalLibrary {
  /// Library directory
  root:  PathBuf,
  /// In-memory copy of `library.json`
  index: LibraryIndex,
}

impl LocalLibrary {
  /// Name of the index file inside the library directory.
  pub const INDEX_FILE: &'static str = "library.json";
  /// Name of the attachment storage directory inside the library directory.
  pub const STORAGE_DIR: &'static str = "storage";

  /// Opens the library at `root`, creating an empty one if the directory has no index.
  pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
    let root = root.as_ref().to_path_buf();
    tokio::fs::create_dir_all(&root).await?;

    let index_path = root.join(Self::INDEX_FILE);
    let index = if index_path.exists() {
      let content = tokio::fs::read(&index_path).await?;
      serde_json::from_slice(&content)?
    } else {
      debug!("No library index at {index_path:?}, starting empty");
      LibraryIndex::default()
    };

    Ok(Self { root, index })
  }

  /// Library directory.
  pub fn root(&self) -> &Path { &self.root }

  /// Path of `library.json`.
  pub fn index_path(&self) -> PathBuf { self.root.join(Self::INDEX_FILE) }

  /// Directory holding attachment files.
  pub fn storage_path(&self) -> PathBuf { self.root.join(Self::STORAGE_DIR) }

  /// All attachments in the library.
  pub fn attachments(&self) -> &[Attachment] { &self.index.attachments }

  /// Attachments belonging to one item.
  pub fn attachments_for<'a>(&'a self, parent_key: &'a str) -> impl Iterator<Item = &'a Attachment> {
    self.index.attachments.iter().filter(move |a| a.parent_key == parent_key)
  }

  /// Adds an item, replacing any existing item with the same key.
  pub async fn add_item(&mut self, item: Item) -> Result<()> {
    let mut index = self.index.clone();
    match index.items.iter_mut().find(|existing| existing.key == item.key) {
      Some(existing) => *existing = item,
      None => index.items.push(item),
    }
    self.commit(index).await
  }

  /// Writes `index` to `library.json` and adopts it once the write has succeeded.
  async fn commit(&mut self, index: LibraryIndex) -> Result<()> {
    let content = serde_json::to_vec_pretty(&index)?;
    tokio::fs::write(self.index_path(), content).await?;
    trace!("Persisted library index to {:?}", self.index_path());
    self.index = index;
    Ok(())
  }

  /// Copies `source` to `dest` and commits `index` recording it.
  async fn store_file(&mut self, source: &Path, dest: &Path, index: LibraryIndex) -> Result<()> {
    if let Some(dir) = dest.parent() {
      tokio::fs::create_dir_all(dir).await?;
    }
    tokio::fs::copy(source, dest).await?;
    self.commit(index).await
  }

  /// First free attachment key for `parent_key`.
  fn next_attachment_key(&self, parent_key: &str) -> String {
    let mut n = self.attachments_for(parent_key).count() + 1;
    loop {
      let key = format!("{parent_key}-{n}");
      if !self.index.attachments.iter().any(|a| a.key == key) {
        return key;
      }
      n += 1;
    }
  }
}

#[async_trait]
impl ItemRepository for LocalLibrary {
  async fn items(&self) -> Result<Vec<Item>> { Ok(self.index.items.clone()) }

  async fn item(&self, key: &str) -> Result<Option<Item>> {
    Ok(self.index.items.iter().find(|item| item.key == key).cloned())
  }
}

/// Wraps a store-side failure as an attachment error.
fn attachment_error(context: &str, err: impl Display) -> ArxlateError {
  ArxlateError::Attachment(format!("{context}: {err}"))
}

#[async_trait]
impl AttachmentStore for LocalLibrary {
  async fn import_attachment(
    &mut self,
    parent: &Item,
    source: &Path,
    file_name: &str,
  ) -> Result<Attachment> {
    if !self.index.items.iter().any(|item| item.key == parent.key) {
      return Err(ArxlateError::Attachment(format!("parent item {} not in library", parent.key)));
    }

    let key = self.next_attachment_key(&parent.key);
    let dir = self.storage_path().join(&key);
    let path = dir.join(file_name);
    let attachment = Attachment {
      key,
      parent_key: parent.key.clone(),
      title: file_name.to_owned(),
      file_name: file_name.to_owned(),
      path: path.clone(),
      date_added: Utc::now(),
    };

    let mut index = self.index.clone();
    index.attachments.push(attachment.clone());

    if let Err(e) = self.store_file(source, &path, index).await {
      if let Err(cleanup) = tokio::fs::remove_dir_all(&dir).await {
        if cleanup.kind() != std::io::ErrorKind::NotFound {
          warn!("Failed to remove storage directory {dir:?}: {cleanup}");
        }
      }
      return Err(attachment_error(&format!("import of {file_name} failed"), e));
    }

    debug!("Imported {source:?} as {path:?}");
    Ok(attachment)
  }

  async fn save_attachment(&mut self, attachment: &Attachment) -> Result<()> {
    let mut index = self.index.clone();
    let Some(existing) = index.attachments.iter_mut().find(|a| a.key == attachment.key) else {
      return Err(ArxlateError::Attachment(format!("unknown attachment {}", attachment.key)));
    };
    *existing = attachment.clone();
    self
      .commit(index)
      .await
      .map_err(|e| attachment_error(&format!("saving attachment {} failed", attachment.key), e))
  }
}
