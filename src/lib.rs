//! npm-installer - install npm modules from a shrinkwrap
//!
//! Stages the lockfile into the output directory and runs `npm install`
//! with its cache redirected into a per-run temporary directory.

pub mod cli;
pub mod config;
pub mod error;
pub mod install;

pub use error::{InstallError, InstallResult};
pub use install::Installer;
