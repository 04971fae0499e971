//! Module for the "check" command.

use super::*;

/// Arguments that can be used for the [`Commands::Check`]
#[derive(Args, Clone)]
pub struct CheckArgs {
  /// Keys of the items to inspect
  #[arg(required = true)]
  pub keys: Vec<String>,
}

/// Function for the [`Commands::Check`] in the CLI.
pub async fn check(cli: &Cli, check_args: CheckArgs) -> Result<()> {
  let config = cli.load_config()?;
  let library = open_library(&config).await?;
  let items = library.items_by_keys(&check_args.keys).await?;

  for item in &items {
    println!("{} {}", style(&item.key).cyan(), style(item).bold());
    match identifier::extract_doi(item) {
      None => println!("   {} no DOI", style(ERROR_PREFIX).red()),
      Some(doi) => {
        println!("   {} DOI: {}", style(ITEM_PREFIX).dim(), style(&doi).yellow());
        match identifier::extract_arxiv_id(&doi) {
          Some(arxiv_id) =>
            println!("   {} arXiv: {}", style(LAST_ITEM_PREFIX).dim(), style(arxiv_id).green()),
          None => println!("   {} not an arXiv DOI", style(LAST_ITEM_PREFIX).dim()),
        }
      },
    }
  }
  Ok(())
}
