//! Package manager invocation
//!
//! An `Invocation` is the fully resolved command line, working directory
//! and environment. `PackageManager` implementations execute it.

use crate::error::{InstallError, InstallResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// One package manager call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Binary to execute
    pub program: String,
    /// Arguments, starting with the subcommand
    pub args: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
    /// Complete environment of the child; nothing else is inherited
    pub env: BTreeMap<OsString, OsString>,
}

impl Invocation {
    /// Human-readable command line for logs and errors
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build a child environment from `base` with one variable overridden
///
/// Any spelling of `key` that differs only in ASCII case is dropped first,
/// since npm reads its `npm_config_*` variables case-insensitively.
pub fn override_env<I>(
    base: I,
    key: &str,
    value: impl Into<OsString>,
) -> BTreeMap<OsString, OsString>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env: BTreeMap<OsString, OsString> = base
        .into_iter()
        .filter(|(k, _)| !k.eq_ignore_ascii_case(key))
        .collect();
    env.insert(OsString::from(key), value.into());
    env
}

/// Abstract package manager
///
/// The default implementation spawns a real process; tests substitute a
/// recorder.
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Run the invocation to completion
    async fn run(&self, invocation: &Invocation) -> InstallResult<()>;
}

/// Runs the package manager as a subprocess with inherited stdio
pub struct NpmCommand;

#[async_trait]
impl PackageManager for NpmCommand {
    async fn run(&self, invocation: &Invocation) -> InstallResult<()> {
        debug!(
            "Executing: {} in {}",
            invocation.command_line(),
            invocation.cwd.display()
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .env_clear()
            .envs(&invocation.env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| InstallError::command_failed(&invocation.program, e))?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(InstallError::InstallFailed {
                command: invocation.command_line(),
                code,
            }),
            None => Err(InstallError::ProcessSignaled),
        }
    }
}
