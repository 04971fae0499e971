//! Module for the "batch" command.

use super::*;

/// Arguments that can be used for the [`Commands::Batch`]
#[derive(Args, Clone)]
pub struct BatchArgs {
  /// Restrict the batch to these item keys; all items when empty
  pub keys: Vec<String>,
}

/// Function for the [`Commands::Batch`] in the CLI.
pub async fn batch(cli: &Cli, batch_args: BatchArgs) -> Result<()> {
  let config = cli.load_config()?;
  let library = open_library(&config).await?;
  let items = if batch_args.keys.is_empty() {
    library.items().await?
  } else {
    library.items_by_keys(&batch_args.keys).await?
  };

  let mut translator = Translator::new(config, library)?;
  let mut reporter = ConsoleReporter::new();
  translator.batch_translate(&items, &mut reporter).await;
  Ok(())
}
