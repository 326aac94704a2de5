use clap::Parser;

use radixer::cli::Cli;
use radixer::config::{Config, ConfigStore};
use radixer::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Some(conversion) = cli.run_once()? {
        println!("{conversion}");
        return Ok(());
    }

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;
    tracing::info!(path = %path.display(), "config loaded");

    let store = ConfigStore::new(config, path);
    radixer::ui::run(store)?;
    Ok(())
}
