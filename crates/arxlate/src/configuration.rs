//! Configuration for the translation pipeline.
//!
//! A [`Config`] is stored as TOML, by default at `<config dir>/arxlate/config.toml`. Every field
//! has a default, so a partial file (or no file at all) is valid.
//!
//! ```toml
//! endpoint_template = "https://hjfy.top/arxiv/{arxiv_id}"
//! service_tag = "hjfy"
//! attachment_label = "Translated PDF"
//! close_delay_ms = 5000
//! library_path = "/home/me/.local/share/arxlate"
//! transient_dir = "/tmp/arxlate"
//! ```

use super::*;

/// Placeholder substituted with the arXiv identifier in [`Config::endpoint_template`].
pub const ARXIV_ID_PLACEHOLDER: &str = "{arxiv_id}";

/// Settings for retrieving and naming translated PDFs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// URL of the translation service with an `{arxiv_id}` placeholder
  pub endpoint_template: String,
  /// Short service name embedded in attachment file names
  pub service_tag:       String,
  /// Prefix of the attachment title, followed by the item's title
  pub attachment_label:  String,
  /// How long the progress summary stays up after a batch, in milliseconds
  pub close_delay_ms:    u64,
  /// Directory of the file-backed library
  pub library_path:      PathBuf,
  /// Directory for transient files handed to the attachment store
  pub transient_dir:     PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      endpoint_template: format!("https://hjfy.top/arxiv/{ARXIV_ID_PLACEHOLDER}"),
      service_tag:       "hjfy".to_string(),
      attachment_label:  "Translated PDF".to_string(),
      close_delay_ms:    5000,
      library_path:      Self::default_library_path(),
      transient_dir:     Self::default_transient_dir(),
    }
  }
}

impl Config {
  /// Returns the default location of the configuration file.
  ///
  /// - On Unix: `~/.config/arxlate/config.toml`
  /// - On macOS: `~/Library/Application Support/arxlate/config.toml`
  /// - On Windows: `%APPDATA%\arxlate\config.toml`
  /// - Fallback: `./arxlate/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("arxlate").join("config.toml")
  }

  /// Returns the default directory of the file-backed library.
  pub fn default_library_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("arxlate")
  }

  /// Returns the default directory for transient files.
  pub fn default_transient_dir() -> PathBuf { std::env::temp_dir().join("arxlate") }

  /// Reads a configuration from a TOML file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {path:?}");
    let content = std::fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
  }

  /// Reads a configuration, falling back to [`Config::default`] when the file does not exist.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {path:?}, using defaults");
      Ok(Self::default())
    }
  }

  /// Writes this configuration as TOML, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }

  /// Checks that the endpoint template can produce a URL.
  pub fn validate(&self) -> Result<()> {
    if !self.endpoint_template.contains(ARXIV_ID_PLACEHOLDER) {
      return Err(ArxlateError::Config(format!(
        "endpoint_template \"{}\" has no {ARXIV_ID_PLACEHOLDER} placeholder",
        self.endpoint_template
      )));
    }
    if self.service_tag.trim().is_empty() {
      return Err(ArxlateError::Config("service_tag must not be empty".to_string()));
    }
    Ok(())
  }

  /// Delay before the progress summary is dismissed.
  pub fn close_delay(&self) -> Duration { Duration::from_millis(self.close_delay_ms) }

  /// Sets the endpoint template.
  pub fn with_endpoint_template(mut self, template: impl Into<String>) -> Self {
    self.endpoint_template = template.into();
    self
  }

  /// Sets the service tag.
  pub fn with_service_tag(mut self, tag: impl Into<String>) -> Self {
    self.service_tag = tag.into();
    self
  }

  /// Sets the attachment label.
  pub fn with_attachment_label(mut self, label: impl Into<String>) -> Self {
    self.attachment_label = label.into();
    self
  }

  /// Sets the library directory.
  pub fn with_library_path(mut self, path: &Path) -> Self {
    self.library_path = path.to_path_buf();
    self
  }

  /// Sets the transient file directory.
  pub fn with_transient_dir(mut self, path: &Path) -> Self {
    self.transient_dir = path.to_path_buf();
    self
  }

  /// Sets the delay before the progress summary is dismissed.
  pub fn with_close_delay(mut self, delay: Duration) -> Self {
    self.close_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
    self
  }
}
