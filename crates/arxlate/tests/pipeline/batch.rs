use arxlate::translator::NO_ELIGIBLE_ITEMS;

use super::*;

#[traced_test]
#[tokio::test]
async fn test_failure_does_not_stop_batch() -> TestResult<()> {
  let items = vec![
    arxiv_item("K1", "First", "2401.00001"),
    arxiv_item("K2", "Second", "2401.00002"),
    arxiv_item("K3", "Third", "2401.00003"),
  ];
  let mut fx = fixture(&items).await;
  let first =
    fx.server.mock("GET", "/arxiv/2401.00001").with_status(200).with_body("%PDF 1").create_async().await;
  let second = fx.server.mock("GET", "/arxiv/2401.00002").with_status(500).create_async().await;
  let third =
    fx.server.mock("GET", "/arxiv/2401.00003").with_status(200).with_body("%PDF 3").create_async().await;

  let mut reporter = RecordingReporter::default();
  let report = fx.translator.translate_selected_items(&items, &mut reporter).await;

  first.assert_async().await;
  second.assert_async().await;
  third.assert_async().await;

  let keys: Vec<_> = report.outcomes.iter().map(|o| o.key.as_str()).collect();
  assert_eq!(keys, ["K1", "K2", "K3"]);
  assert_eq!(report.succeeded(), 2);
  assert_eq!(report.failed(), 1);
  assert!(report.outcomes[1].result.as_ref().unwrap_err().is_download());

  assert_eq!(reporter.lines.len(), 3);
  assert_eq!(reporter.lines[0].status, LineStatus::Done);
  assert_eq!(reporter.lines[1].status, LineStatus::Failed);
  assert!(reporter.lines[1].text.contains("500"));
  assert_eq!(reporter.lines[2].status, LineStatus::Done);
  assert!(reporter.lines.iter().all(|line| line.percent == 100));
  assert_eq!(reporter.closed_with, Some(Duration::from_millis(1500)));

  assert_eq!(fx.translator.store().attachments_for("K1").count(), 1);
  assert_eq!(fx.translator.store().attachments_for("K2").count(), 0);
  assert_eq!(fx.translator.store().attachments_for("K3").count(), 1);
  assert!(is_empty_dir(&fx.transient));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_selected_items_report_missing_identifiers() {
  let items = vec![Item::new("K1", "No DOI"), Item::new("K2", "Plain DOI").with_doi("10.1000/1")];
  let mut fx = fixture(&items).await;

  let mut reporter = RecordingReporter::default();
  let report = fx.translator.translate_selected_items(&items, &mut reporter).await;

  assert_eq!(report.failed(), 2);
  assert!(matches!(report.outcomes[0].result, Err(ArxlateError::NoDoi)));
  assert!(matches!(report.outcomes[1].result, Err(ArxlateError::NoArxivId(_))));
  assert!(reporter.lines.iter().all(|line| line.status == LineStatus::Failed));
}

#[traced_test]
#[tokio::test]
async fn test_batch_without_eligible_items_warns_once() {
  let items = vec![
    Item::new("K1", "Nothing"),
    Item::new("K2", "Journal").with_doi("10.1145/1327452.1327492"),
    Item::new("K3", "Notes").with_extra("DOI: 10.1000/xyz123"),
  ];
  let mut fx = fixture(&items).await;
  let mock = fx.server.mock("GET", mockito::Matcher::Any).expect(0).create_async().await;

  let mut reporter = RecordingReporter::default();
  let report = fx.translator.batch_translate(&items, &mut reporter).await;

  assert!(report.is_empty());
  assert_eq!(reporter.warnings, vec![NO_ELIGIBLE_ITEMS.to_string()]);
  assert!(reporter.lines.is_empty());
  assert_eq!(reporter.closed_with, None);
  mock.assert_async().await;
}

#[traced_test]
#[tokio::test]
async fn test_batch_filters_ineligible_items() -> TestResult<()> {
  let items = vec![
    Item::new("K1", "Journal").with_doi("10.1145/1327452.1327492"),
    arxiv_item("K2", "Preprint", "2410.07087"),
  ];
  let mut fx = fixture(&items).await;
  let mock =
    fx.server.mock("GET", "/arxiv/2410.07087").with_status(200).with_body("%PDF").create_async().await;

  let mut reporter = RecordingReporter::default();
  let report = fx.translator.batch_translate(&items, &mut reporter).await;
  mock.assert_async().await;

  assert_eq!(report.outcomes.len(), 1);
  assert_eq!(report.outcomes[0].key, "K2");
  assert_eq!(report.succeeded(), 1);
  assert!(reporter.warnings.is_empty());
  assert_eq!(reporter.lines.len(), 1);
  Ok(())
}
