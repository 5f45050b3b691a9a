//! npm-installer - sandboxed npm install from a shrinkwrap
//!
//! CLI entry point.

use clap::Parser;
use console::style;
use npm_installer::cli::{self, Cli};
use npm_installer::error::InstallResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> InstallResult<()> {
    let cli = Cli::parse();
    let config = cli::load_config(&cli).await?;

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("npm_installer=warn"),
        1 => EnvFilter::new("npm_installer=info"),
        _ => EnvFilter::new("npm_installer=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    cli::execute(cli, config).await
}
