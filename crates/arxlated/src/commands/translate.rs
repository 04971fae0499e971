//! Module for the "translate" command.

use super::*;

/// Arguments that can be used for the [`Commands::Translate`]
#[derive(Args, Clone)]
pub struct TranslateArgs {
  /// Keys of the items to translate, processed in the given order
  #[arg(required = true)]
  pub keys: Vec<String>,
}

/// Function for the [`Commands::Translate`] in the CLI.
pub async fn translate(cli: &Cli, translate_args: TranslateArgs) -> Result<()> {
  let config = cli.load_config()?;
  let library = open_library(&config).await?;
  let items = library.items_by_keys(&translate_args.keys).await?;

  let mut translator = Translator::new(config, library)?;
  let mut reporter = ConsoleReporter::new();
  translator.translate_selected_items(&items, &mut reporter).await;
  Ok(())
}
