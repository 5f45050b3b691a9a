//! Lockfile staging
//!
//! Copies the shrinkwrap into the output directory under the name npm
//! expects, and records a short content hash for logging.

use crate::error::{InstallError, InstallResult};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File name npm reads pinned versions from
pub const SHRINKWRAP: &str = "npm-shrinkwrap.json";

/// A lockfile copied into an output directory
#[derive(Debug, Clone)]
pub struct StagedLockfile {
    /// Path of the staged copy
    pub path: PathBuf,
    /// SHA256 hash of the contents (first 12 chars)
    pub hash: String,
}

/// Hash contents using SHA256, returning first 12 hex chars
fn short_hash(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let result = hasher.finalize();

    hex::encode(&result[..6])
}

/// Copy `source` to `output_dir/npm-shrinkwrap.json`, overwriting any existing copy
///
/// The source is read in full before the destination is opened, so a
/// missing lockfile leaves a previously staged copy untouched. A source that
/// already is the staged file is left as is.
pub async fn stage_lockfile(source: &Path, output_dir: &Path) -> InstallResult<StagedLockfile> {
    match fs::metadata(source).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(InstallError::LockfileNotFound(source.to_path_buf())),
    }

    let dest = output_dir.join(SHRINKWRAP);
    let copy_error = |e| InstallError::LockfileCopy {
        from: source.to_path_buf(),
        to: dest.clone(),
        source: e,
    };

    let contents = fs::read(source).await.map_err(copy_error)?;
    let hash = short_hash(&contents);

    if is_same_file(source, &dest).await {
        debug!("{} is already staged", dest.display());
    } else {
        debug!("Copying {} to {}", source.display(), dest.display());
        fs::write(&dest, &contents).await.map_err(copy_error)?;
    }

    Ok(StagedLockfile { path: dest, hash })
}

/// Whether both paths resolve to the same file; false if either is missing
async fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a).await, fs::canonicalize(b).await) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
