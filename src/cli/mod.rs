//! Command-line interface

pub mod args;

pub use args::Cli;

use crate::config::{Config, ConfigManager};
use crate::error::InstallResult;
use crate::install::Installer;
use tracing::debug;

/// Load configuration, applying the `--config` path if given
pub async fn load_config(cli: &Cli) -> InstallResult<Config> {
    let manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    debug!("Config path: {}", manager.path().display());
    manager.load().await
}

/// Install the shrinkwrap into the output directory
pub async fn execute(cli: Cli, mut config: Config) -> InstallResult<()> {
    if let Some(npm) = cli.npm {
        config.npm.program = npm;
    }

    Installer::new(config.npm)
        .install(&cli.shrinkwrap, &cli.output)
        .await
}
