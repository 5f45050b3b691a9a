//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// npm-installer - install npm modules from a shrinkwrap
///
/// Copies the shrinkwrap into the output directory as npm-shrinkwrap.json
/// and runs `npm install` there with a throwaway cache.
#[derive(Parser, Debug)]
#[command(name = "npm-installer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to npm-shrinkwrap.json
    pub shrinkwrap: PathBuf,

    /// Directory that you want to install into
    pub output: PathBuf,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "NPM_INSTALLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Package manager binary (overrides config)
    #[arg(long, env = "NPM_INSTALLER_NPM")]
    pub npm: Option<String>,
}
