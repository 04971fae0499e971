use super::*;

#[traced_test]
#[tokio::test]
async fn test_translate_single_item() -> TestResult<()> {
  let item = arxiv_item("K1", "Attention Is All You Need", "1706.03762");
  let mut fx = fixture(&[item.clone()]).await;
  let mock = fx
    .server
    .mock("GET", "/arxiv/1706.03762")
    .with_status(200)
    .with_body("%PDF-1.5 translated")
    .create_async()
    .await;

  let attachment = fx.translator.translate_single_item(&item).await?;
  mock.assert_async().await;

  assert_eq!(attachment.parent_key, "K1");
  assert_eq!(attachment.title, "Translated PDF: Attention Is All You Need");
  assert_eq!(attachment.file_name, "Attention Is All You Need_hjfy_arxiv_1706.03762.pdf");
  assert_eq!(std::fs::read(&attachment.path)?, b"%PDF-1.5 translated");
  assert!(is_empty_dir(&fx.transient));

  // The retitled attachment is what the library persisted.
  let library = LocalLibrary::open(fx.translator.store().root()).await?;
  assert_eq!(library.attachments(), &[attachment]);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_url_doi_is_used() -> TestResult<()> {
  let item = Item::new("K1", "From URL").with_url("https://doi.org/10.48550/arxiv.1234.56789");
  let mut fx = fixture(&[item.clone()]).await;
  let mock =
    fx.server.mock("GET", "/arxiv/1234.56789").with_status(200).with_body("%PDF").create_async().await;

  fx.translator.translate_single_item(&item).await?;
  mock.assert_async().await;
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_no_doi() {
  let item = Item::new("K1", "No identifiers");
  let mut fx = fixture(&[item.clone()]).await;
  let mock = fx.server.mock("GET", mockito::Matcher::Any).expect(0).create_async().await;

  let err = fx.translator.translate_single_item(&item).await.unwrap_err();
  assert!(matches!(err, ArxlateError::NoDoi));
  mock.assert_async().await;
}

#[traced_test]
#[tokio::test]
async fn test_no_arxiv_id() {
  let item = Item::new("K1", "Journal paper").with_extra("DOI: 10.1000/xyz123");
  let mut fx = fixture(&[item.clone()]).await;
  let mock = fx.server.mock("GET", mockito::Matcher::Any).expect(0).create_async().await;

  let err = fx.translator.translate_single_item(&item).await.unwrap_err();
  assert!(matches!(err, ArxlateError::NoArxivId(ref doi) if doi == "10.1000/xyz123"));
  mock.assert_async().await;
}

#[traced_test]
#[tokio::test]
async fn test_not_found_is_download_error() {
  let item = arxiv_item("K1", "Untranslated", "2410.07087");
  let mut fx = fixture(&[item.clone()]).await;
  let _mock = fx.server.mock("GET", "/arxiv/2410.07087").with_status(404).create_async().await;

  let err = fx.translator.translate_single_item(&item).await.unwrap_err();
  assert!(err.is_download(), "expected a download error, got {err:?}");
  assert!(fx.translator.store().attachments().is_empty());
  assert!(is_empty_dir(&fx.transient));
}

#[traced_test]
#[tokio::test]
async fn test_import_failure_cleans_up() {
  // The item is not in the library, so the import is rejected after the transient file exists.
  let item = arxiv_item("GHOST", "Not in library", "2410.07087");
  let mut fx = fixture(&[]).await;
  let _mock =
    fx.server.mock("GET", "/arxiv/2410.07087").with_status(200).with_body("%PDF").create_async().await;

  let err = fx.translator.translate_single_item(&item).await.unwrap_err();
  assert!(err.is_attachment(), "expected an attachment error, got {err:?}");
  assert!(!err.is_download());
  assert!(fx.transient.exists());
  assert!(is_empty_dir(&fx.transient));
}
