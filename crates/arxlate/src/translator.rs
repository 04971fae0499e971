//! Single-item and batch orchestration.
//!
//! A [`Translator`] runs the pipeline for one item at a time:
//!
//! 1. Extract the DOI and arXiv identifier ([`Identifier::from_item`])
//! 2. Download the translated PDF ([`Fetcher::download_translated_pdf`])
//! 3. Attach it to the item ([`save_pdf_as_attachment`])
//!
//! Batches run items strictly in order. A failing item is reported on its progress line and the
//! batch moves on.

use super::*;
use crate::{
  attachment::{save_pdf_as_attachment, AttachmentOptions},
  fetcher::Fetcher,
  identifier::{has_arxiv_id, Identifier},
};

/// Message shown when a batch selection contains nothing to translate.
pub const NO_ELIGIBLE_ITEMS: &str = "No selected items have an arXiv DOI";

/// Outcome of translating one item within a batch.
#[derive(Debug)]
pub struct ItemOutcome {
  /// Key of the processed item
  pub key:    String,
  /// The created attachment, or the reason the item failed
  pub result: Result<Attachment>,
}

/// Per-item outcomes of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
  /// One entry per attempted item
  pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
  /// Number of items that were attached.
  pub fn succeeded(&self) -> usize { self.outcomes.iter().filter(|o| o.result.is_ok()).count() }

  /// Number of items that failed.
  pub fn failed(&self) -> usize { self.outcomes.iter().filter(|o| o.result.is_err()).count() }

  /// Whether no item was attempted.
  pub fn is_empty(&self) -> bool { self.outcomes.is_empty() }
}

/// Runs the translation pipeline against an [`AttachmentStore`].
pub struct Translator<S> {
  /// Client for the translation service
  fetcher:     Fetcher,
  /// Where attachments are created
  store:       S,
  /// File naming and transient directory
  options:     AttachmentOptions,
  /// How long the batch summary stays visible
  close_delay: Duration,
}

impl<S: AttachmentStore> Translator<S> {
  /// Creates a translator from a configuration and a store.
  pub fn new(config: Config, store: S) -> Result<Self> {
    config.validate()?;
    let fetcher = Fetcher::new(config.endpoint_template.clone())?;
    Ok(Self {
      fetcher,
      store,
      options: AttachmentOptions::from(&config),
      close_delay: config.close_delay(),
    })
  }

  /// The underlying store.
  pub fn store(&self) -> &S { &self.store }

  /// Consumes the translator, returning the store.
  pub fn into_store(self) -> S { self.store }

  /// Translates one item and attaches the result.
  ///
  /// # Errors
  ///
  /// - [`ArxlateError::NoDoi`] if the item has no DOI
  /// - [`ArxlateError::NoArxivId`] if the DOI is not an arXiv DOI
  /// - Download errors from the fetcher and import errors from the store
  pub async fn translate_single_item(&mut self, item: &Item) -> Result<Attachment> {
    let Identifier { arxiv_id, .. } = Identifier::from_item(item)?;
    let pdf = self.fetcher.download_translated_pdf(&arxiv_id).await?;
    save_pdf_as_attachment(&mut self.store, item, pdf, &arxiv_id, &self.options).await
  }

  /// Translates items one after another, reporting each on its own progress line.
  ///
  /// A failure is recorded on the item's line and never stops the batch. When all items are
  /// done the reporter is closed after the configured delay.
  pub async fn translate_selected_items<P: ProgressReporter + ?Sized>(
    &mut self,
    items: &[Item],
    reporter: &mut P,
  ) -> BatchReport {
    let mut report = BatchReport { outcomes: Vec::with_capacity(items.len()) };

    for item in items {
      let line = reporter.add_line(&format!("Translating: {item}"));
      let result = self.translate_single_item(item).await;
      match &result {
        Ok(_) => {
          reporter.update_line(line, &format!("Attached: {item}"), LineStatus::Done, 100);
        },
        Err(e) => {
          warn!("Translation of {} failed: {e}", item.key);
          reporter.update_line(line, &format!("Failed: {item}: {e}"), LineStatus::Failed, 100);
        },
      }
      report.outcomes.push(ItemOutcome { key: item.key.clone(), result });
    }

    debug!("Batch finished: {} attached, {} failed", report.succeeded(), report.failed());
    reporter.close_after(self.close_delay);
    report
  }

  /// Translates every item of the selection that has an arXiv DOI.
  ///
  /// If none qualifies, a single warning is shown and nothing is downloaded.
  pub async fn batch_translate<P: ProgressReporter + ?Sized>(
    &mut self,
    items: &[Item],
    reporter: &mut P,
  ) -> BatchReport {
    let eligible: Vec<Item> = items.iter().filter(|item| has_arxiv_id(item)).cloned().collect();
    if eligible.is_empty() {
      reporter.warn(NO_ELIGIBLE_ITEMS);
      return BatchReport::default();
    }
    info!("Translating {} of {} selected items", eligible.len(), items.len());
    self.translate_selected_items(&eligible, reporter).await
  }
}
