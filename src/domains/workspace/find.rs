use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Main config file that identifies a town root.
pub const PRIMARY_MARKER: &str = "config/town.json";
/// Town-level directory accepted when the config file is missing.
pub const SECONDARY_MARKER: &str = "mayor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceError {
    NotFound,
}

impl std::fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceError::NotFound => write!(f, "not in a Gas Town workspace"),
        }
    }
}

impl std::error::Error for WorkspaceError {}

/// Walks up from `start_dir` looking for a town root.
///
/// Symlinks are resolved first, so the returned path is canonical. Returns
/// `Ok(None)` once the filesystem root is reached without a match.
pub fn find(start_dir: &Path) -> Result<Option<PathBuf>> {
    let abs_dir = std::path::absolute(start_dir)
        .with_context(|| format!("resolving path {}", start_dir.display()))?;
    let abs_dir = abs_dir
        .canonicalize()
        .with_context(|| format!("evaluating symlinks for {}", abs_dir.display()))?;

    for dir in abs_dir.ancestors() {
        if has_marker(dir) {
            log::debug!("Found town root at {}", dir.display());
            return Ok(Some(dir.to_path_buf()));
        }
    }
    Ok(None)
}

/// Like [`find`], but a missing workspace is an error carrying
/// [`WorkspaceError::NotFound`].
pub fn find_or_error(start_dir: &Path) -> Result<PathBuf> {
    find(start_dir)?.ok_or_else(|| WorkspaceError::NotFound.into())
}

pub fn find_from_cwd() -> Result<Option<PathBuf>> {
    let cwd = std::env::current_dir().context("getting current directory")?;
    find(&cwd)
}

pub fn find_from_cwd_or_error() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("getting current directory")?;
    find_or_error(&cwd)
}

/// Checks only `dir` itself, without walking upward.
pub fn is_workspace(dir: &Path) -> Result<bool> {
    let abs_dir = std::path::absolute(dir)
        .with_context(|| format!("resolving path {}", dir.display()))?;
    Ok(has_marker(&abs_dir))
}

fn has_marker(dir: &Path) -> bool {
    dir.join(PRIMARY_MARKER).exists() || dir.join(SECONDARY_MARKER).is_dir()
}
