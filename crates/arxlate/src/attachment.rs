//! Writing a downloaded PDF into an attachment store.
//!
//! Attachment stores import files from disk, so the in-memory PDF is first written to a
//! transient file. The file is owned by a [`TransientFile`] guard that deletes it when dropped,
//! which covers the success path, every `?` early return, and unwinding alike.

use super::*;

/// Naming and location settings for [`save_pdf_as_attachment`].
#[derive(Debug, Clone)]
pub struct AttachmentOptions {
  /// Directory holding transient files
  pub transient_dir:    PathBuf,
  /// Service tag embedded in the file name
  pub service_tag:      String,
  /// Prefix of the attachment title
  pub attachment_label: String,
}

impl From<&Config> for AttachmentOptions {
  fn from(config: &Config) -> Self {
    Self {
      transient_dir:    config.transient_dir.clone(),
      service_tag:      config.service_tag.clone(),
      attachment_label: config.attachment_label.clone(),
    }
  }
}

/// A file on disk that is removed when the guard is dropped.
///
/// Removal failures are logged and otherwise ignored, so cleanup never masks the outcome of the
/// operation that created the file.
#[derive(Debug)]
pub struct TransientFile {
  /// Location of the file
  path: PathBuf,
}

impl TransientFile {
  /// Registers `path` for removal. Nothing is written yet.
  pub fn new(path: PathBuf) -> Self { Self { path } }

  /// Writes `contents` to the file, replacing anything already there.
  pub async fn write(&self, contents: &[u8]) -> Result<()> {
    tokio::fs::write(&self.path, contents).await?;
    Ok(())
  }

  /// Location of the file.
  pub fn path(&self) -> &Path { &self.path }
}

impl Drop for TransientFile {
  fn drop(&mut self) {
    match std::fs::remove_file(&self.path) {
      Ok(()) => trace!("Removed transient file {:?}", self.path),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
      Err(e) => warn!("Failed to remove transient file {:?}: {e}", self.path),
    }
  }
}

/// Stores a translated PDF as a child attachment of `item`.
///
/// The file is named `<title>_<service tag>_arxiv_<arxiv id>.pdf`, imported through `store`,
/// titled `"<label>: <item title>"`, and the title change is saved. The transient copy is gone
/// by the time this returns, whether or not the import succeeded.
///
/// # Errors
///
/// Returns [`ArxlateError::Path`] if the transient file cannot be written, or whatever the
/// store reports for a failed import or save.
pub async fn save_pdf_as_attachment<S: AttachmentStore + ?Sized>(
  store: &mut S,
  item: &Item,
  pdf: Vec<u8>,
  arxiv_id: &str,
  options: &AttachmentOptions,
) -> Result<Attachment> {
  let file_name = format::translated_filename(&item.title, &options.service_tag, arxiv_id);
  tokio::fs::create_dir_all(&options.transient_dir).await?;

  let transient = TransientFile::new(options.transient_dir.join(&file_name));
  transient.write(&pdf).await?;
  drop(pdf);
  debug!("Wrote transient file {:?}", transient.path());

  let mut attachment = store.import_attachment(item, transient.path(), &file_name).await?;
  attachment.title = format!("{}: {}", options.attachment_label, item.title);
  store.save_attachment(&attachment).await?;

  info!("Attached {file_name} to {}", item.key);
  Ok(attachment)
}
