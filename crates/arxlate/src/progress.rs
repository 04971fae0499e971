//! Progress reporting for batch translations.
//!
//! A batch shows one line per item. Lines start as [`LineStatus::Pending`] and end as either
//! [`LineStatus::Done`] or [`LineStatus::Failed`]. Once every item has been processed the
//! reporter is asked to close itself after a delay.

use super::*;

/// Handle to a line created with [`ProgressReporter::add_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub usize);

/// State of a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
  /// Work on the item has not finished
  Pending,
  /// The item was translated and attached
  Done,
  /// The item failed; the line text carries the reason
  Failed,
}

impl Display for LineStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      LineStatus::Pending => write!(f, "pending"),
      LineStatus::Done => write!(f, "done"),
      LineStatus::Failed => write!(f, "failed"),
    }
  }
}

/// A visible progress surface, such as a progress window or a terminal.
pub trait ProgressReporter {
  /// Adds a pending line and returns its handle.
  fn add_line(&mut self, text: &str) -> LineId;

  /// Replaces the text, status and completion percentage of a line.
  fn update_line(&mut self, line: LineId, text: &str, status: LineStatus, percent: u8);

  /// Shows a standalone warning.
  fn warn(&mut self, message: &str);

  /// Shows the surface and dismisses it after `delay`.
  fn close_after(&mut self, delay: Duration);
}

/// A reporter that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
  fn add_line(&mut self, text: &str) -> LineId {
    trace!("progress: {text}");
    LineId(0)
  }

  fn update_line(&mut self, _line: LineId, text: &str, status: LineStatus, percent: u8) {
    trace!("progress [{status} {percent}%]: {text}");
  }

  fn warn(&mut self, message: &str) { warn!("{message}") }

  fn close_after(&mut self, _delay: Duration) {}
}
