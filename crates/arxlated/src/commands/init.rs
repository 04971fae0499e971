//! Module for writing an `arxlate` configuration.

use dialoguer::Confirm;

use super::*;

/// Arguments that can be used for the [`Commands::Init`]
#[derive(Args, Clone)]
pub struct InitArgs {
  /// Translation service endpoint, with `{arxiv_id}` where the identifier goes
  #[arg(long)]
  pub endpoint: Option<String>,

  /// Service tag used in attachment file names
  #[arg(long)]
  pub service_tag: Option<String>,
}

/// Function for the [`Commands::Init`] in the CLI.
pub fn init(cli: &Cli, init_args: InitArgs) -> Result<()> {
  let InitArgs { endpoint, service_tag } = init_args;
  let path = cli.config_path();

  if path.exists()
    && !cli.accept_defaults
    && !Confirm::new()
      .with_prompt(format!("A configuration already exists at {path:?}. Overwrite it?"))
      .default(false)
      .interact()?
  {
    info("Keeping the existing configuration");
    return Ok(());
  }

  let mut config = Config::default();
  if let Some(library) = &cli.library {
    config = config.with_library_path(library);
  }
  if let Some(endpoint) = endpoint {
    config = config.with_endpoint_template(endpoint);
  }
  if let Some(service_tag) = service_tag {
    config = config.with_service_tag(service_tag);
  }
  config.validate()?;
  config.save(&path)?;

  success(&format!("Configuration written to {}", style(path.display()).yellow()));
  info(&format!("Library path: {}", style(config.library_path.display()).yellow()));
  Ok(())
}
