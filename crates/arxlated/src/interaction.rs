//! Terminal output and the console progress surface.

use std::time::Duration;

use arxlate::progress::{LineId, LineStatus, ProgressReporter};

use super::*;

pub static INFO_PREFIX: &str = "ℹ ";
pub static WORKING_PREFIX: &str = "» ";
pub static SUCCESS_PREFIX: &str = "✓ ";
pub static ERROR_PREFIX: &str = "✗ ";
pub static WARNING_PREFIX: &str = "! ";
pub static ITEM_PREFIX: &str = "├─";
pub static LAST_ITEM_PREFIX: &str = "└─";

/// Prints an informational line.
pub fn info(message: &str) { println!("{} {message}", style(INFO_PREFIX).blue()) }

/// Prints a success line.
pub fn success(message: &str) { println!("{} {message}", style(SUCCESS_PREFIX).green()) }

/// Prints a warning line.
pub fn warning(message: &str) {
  println!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow())
}

/// Progress surface that prints one line per item to stdout.
///
/// Lines are printed as they are added and again when they settle. The summary is printed when
/// the batch closes the surface; a terminal has nothing to dismiss, so the delay is only logged.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
  /// Latest status of every line
  lines: Vec<LineStatus>,
}

impl ConsoleReporter {
  /// Creates an empty reporter.
  pub fn new() -> Self { Self::default() }
}

impl ProgressReporter for ConsoleReporter {
  fn add_line(&mut self, text: &str) -> LineId {
    self.lines.push(LineStatus::Pending);
    println!("{} {text}", style(WORKING_PREFIX).cyan());
    LineId(self.lines.len() - 1)
  }

  fn update_line(&mut self, line: LineId, text: &str, status: LineStatus, percent: u8) {
    if let Some(slot) = self.lines.get_mut(line.0) {
      *slot = status;
    }
    match status {
      LineStatus::Pending => println!("{} {text} ({percent}%)", style(WORKING_PREFIX).cyan()),
      LineStatus::Done => println!("{} {text}", style(SUCCESS_PREFIX).green()),
      LineStatus::Failed => println!("{} {}", style(ERROR_PREFIX).red(), style(text).red()),
    }
  }

  fn warn(&mut self, message: &str) { warning(message) }

  fn close_after(&mut self, delay: Duration) {
    let done = self.lines.iter().filter(|s| **s == LineStatus::Done).count();
    let failed = self.lines.iter().filter(|s| **s == LineStatus::Failed).count();
    println!("{} {} attached", style(ITEM_PREFIX).dim(), style(done).green());
    println!("{} {} failed", style(LAST_ITEM_PREFIX).dim(), style(failed).red());
    debug!("Progress surface closed after {delay:?}");
  }
}
