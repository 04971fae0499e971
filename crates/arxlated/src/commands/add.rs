//! Module for the "add" command.

use super::*;

/// Arguments that can be used for the [`Commands::Add`]
#[derive(Args, Clone)]
pub struct AddArgs {
  /// Item key
  pub key: String,

  /// Item title
  #[arg(long, default_value = "")]
  pub title: String,

  /// DOI field
  #[arg(long)]
  pub doi: Option<String>,

  /// URL field
  #[arg(long)]
  pub url: Option<String>,

  /// Free-text notes field
  #[arg(long)]
  pub extra: Option<String>,
}

/// Function for the [`Commands::Add`] in the CLI.
pub async fn add(cli: &Cli, add_args: AddArgs) -> Result<()> {
  let AddArgs { key, title, doi, url, extra } = add_args;
  let config = cli.load_config()?;
  let mut library = open_library(&config).await?;

  let item = Item { key, title, doi, url, extra };
  let eligible = identifier::has_arxiv_id(&item);
  library.add_item(item.clone()).await?;

  success(&format!("Added {} to the library", style(&item.key).cyan()));
  if !eligible {
    warning("This item has no arXiv DOI and will be skipped by `batch`");
  }
  Ok(())
}
