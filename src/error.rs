//! Error types for npm-installer
//!
//! All modules use `InstallResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for installer operations
pub type InstallResult<T> = Result<T, InstallError>;

/// All errors that can occur while installing
#[derive(Error, Debug)]
pub enum InstallError {
    // Lockfile errors
    #[error("Lockfile not found: {0}")]
    LockfileNotFound(PathBuf),

    #[error("Failed to copy lockfile {from} to {to}: {source}")]
    LockfileCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid output directory {path}: {reason}")]
    OutputDirInvalid { path: PathBuf, reason: String },

    // Package manager errors
    #[error("Package manager not found: {0}")]
    PackageManagerNotFound(String),

    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Install failed: {command}, exit code: {code}")]
    InstallFailed { command: String, code: i32 },

    #[error("Process terminated by signal")]
    ProcessSignaled,

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a spawn error, mapping a missing binary to `PackageManagerNotFound`
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        let command = command.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::PackageManagerNotFound(command);
        }
        Self::CommandFailed { command, source }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::PackageManagerNotFound(_) => {
                Some("Install Node.js and npm, or pass the binary with --npm")
            }
            Self::OutputDirInvalid { .. } => Some("Create the output directory first"),
            Self::LockfileNotFound(_) => Some("Pass the path to an existing npm-shrinkwrap.json"),
            _ => None,
        }
    }
}
