//! Sandboxed npm install
//!
//! Stages the shrinkwrap into the output directory, then runs the package
//! manager there with its cache pointed into a throwaway directory.

pub mod lockfile;
pub mod runner;
pub mod sandbox;

pub use lockfile::{stage_lockfile, StagedLockfile, SHRINKWRAP};
pub use runner::{override_env, Invocation, NpmCommand, PackageManager};
pub use sandbox::CacheSandbox;

use crate::config::NpmConfig;
use crate::error::{InstallError, InstallResult};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

/// Runs installs with a configured package manager
pub struct Installer {
    config: NpmConfig,
    manager: Arc<dyn PackageManager>,
}

impl Installer {
    /// Create an installer that spawns the configured binary
    pub fn new(config: NpmConfig) -> Self {
        Self::with_package_manager(config, Arc::new(NpmCommand))
    }

    /// Create an installer with a custom package manager backend
    pub fn with_package_manager(config: NpmConfig, manager: Arc<dyn PackageManager>) -> Self {
        Self { config, manager }
    }

    /// Install the packages pinned by `lockfile` into `output_dir`
    ///
    /// Fails before writing anything if `output_dir` is not a directory.
    /// The cache sandbox is removed on every return path.
    pub async fn install(&self, lockfile: &Path, output_dir: &Path) -> InstallResult<()> {
        ensure_output_dir(output_dir).await?;

        let staged = stage_lockfile(lockfile, output_dir).await?;
        info!("Staged {} ({})", staged.path.display(), staged.hash);

        let sandbox = CacheSandbox::create()?;
        debug!("Cache sandbox: {}", sandbox.root().display());

        let invocation = self.invocation(output_dir, &sandbox.cache_dir());
        info!("Running: {}", invocation.command_line());
        self.manager.run(&invocation).await?;

        if let Err(e) = sandbox.close() {
            warn!("Failed to remove cache sandbox: {}", e);
        }

        info!("Installed into {}", output_dir.display());
        Ok(())
    }

    /// Resolve the package manager call for one run
    pub fn invocation(&self, output_dir: &Path, cache_dir: &Path) -> Invocation {
        let base: Vec<(OsString, OsString)> = if self.config.inherit_env {
            std::env::vars_os().collect()
        } else {
            Vec::new()
        };

        self.invocation_with_env(output_dir, cache_dir, base)
    }

    fn invocation_with_env(
        &self,
        output_dir: &Path,
        cache_dir: &Path,
        base: impl IntoIterator<Item = (OsString, OsString)>,
    ) -> Invocation {
        let env: BTreeMap<OsString, OsString> =
            override_env(base, &self.config.cache_env, cache_dir.as_os_str());

        let mut args = vec!["install".to_string()];
        args.extend(self.config.extra_args.iter().cloned());

        Invocation {
            program: self.config.program.clone(),
            args,
            cwd: output_dir.to_path_buf(),
            env,
        }
    }
}

async fn ensure_output_dir(path: &Path) -> InstallResult<()> {
    let reason = match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => "not a directory".to_string(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => "does not exist".to_string(),
        Err(e) => e.to_string(),
    };

    Err(InstallError::OutputDirInvalid {
        path: path.to_path_buf(),
        reason,
    })
}
