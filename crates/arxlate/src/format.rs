//! File name formatting.

use super::*;

lazy_static! {
  /// Anything that is not an ASCII word character, whitespace, `.` or `-`.
  static ref UNSAFE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_\s.\-]").unwrap();
}

/// Default maximum length of a formatted title, in characters.
pub const DEFAULT_TITLE_LENGTH: usize = 50;

/// Reduces a title to characters that are safe in a file name.
///
/// Characters other than ASCII word characters, whitespace, `.` and `-` are removed and the
/// result is truncated to `max_length` characters ([`DEFAULT_TITLE_LENGTH`] when `None`).
///
/// ```
/// use arxlate::format::format_title;
///
/// assert_eq!(format_title("Attention: Is All (You) Need?", None), "Attention Is All You Need");
/// assert_eq!(format_title("abcdef", Some(3)), "abc");
/// ```
pub fn format_title(title: &str, max_length: Option<usize>) -> String {
  let max_length = max_length.unwrap_or(DEFAULT_TITLE_LENGTH);
  UNSAFE_CHARS.replace_all(title, "").chars().take(max_length).collect()
}

/// Builds the file name of a translated PDF.
///
/// The result has the form `<title>_<service tag>_arxiv_<arxiv id>.pdf`.
pub fn translated_filename(title: &str, service_tag: &str, arxiv_id: &str) -> String {
  format!("{}_{service_tag}_arxiv_{arxiv_id}.pdf", format_title(title, None))
}
