//! Ephemeral cache directory for a single install run

use crate::error::{InstallError, InstallResult};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Suffix of generated sandbox directory names
const SANDBOX_SUFFIX: &str = "npm_install";

/// Cache subdirectory handed to the package manager
const CACHE_DIR: &str = ".npm";

/// Uniquely named temporary directory holding the package manager cache
///
/// Removed when dropped, so every exit path cleans up. `close` removes it
/// eagerly and reports failures.
#[derive(Debug)]
pub struct CacheSandbox {
    dir: TempDir,
}

impl CacheSandbox {
    /// Create a fresh sandbox under the system temp directory
    pub fn create() -> InstallResult<Self> {
        let dir = tempfile::Builder::new()
            .suffix(SANDBOX_SUFFIX)
            .tempdir()
            .map_err(|e| InstallError::io("creating cache sandbox", e))?;
        Ok(Self { dir })
    }

    /// Root of the sandbox
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path the package manager cache is pointed at
    pub fn cache_dir(&self) -> PathBuf {
        self.root().join(CACHE_DIR)
    }

    /// Remove the sandbox and everything the package manager wrote into it
    pub fn close(self) -> InstallResult<()> {
        let root = self.root().to_path_buf();
        self.dir
            .close()
            .map_err(|e| InstallError::io(format!("removing {}", root.display()), e))
    }
}
