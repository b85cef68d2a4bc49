//! Package manifest discovery
//!
//! Looks for a `Cargo.toml` in a starting directory, then exactly one level
//! up, then gives up. The one-level limit is intentional; this is not an
//! upward workspace walk.
//!
//! Existence check and read are separate steps: a file that exists but
//! fails to read or parse is an error, not absence.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::SundryError;

/// Manifest file name searched for
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// `[package]` section of a manifest
#[derive(Debug, Clone, Deserialize)]
pub struct PackageMeta {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}

/// Parsed manifest contents
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Absent for virtual workspace manifests
    #[serde(default)]
    pub package: Option<PackageMeta>,
}

/// Find and parse the nearest manifest.
///
/// Checks `start` (the process CWD when `None`), then `start`'s parent, and
/// nowhere else. `Ok(None)` when neither level has one, including when
/// `start` is the filesystem root.
pub fn load_manifest(start: Option<&Path>) -> Result<Option<Manifest>, SundryError> {
    let start = match start {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if let Some(manifest) = try_dir(&start)? {
        return Ok(Some(manifest));
    }

    match start.parent() {
        Some(parent) => try_dir(parent),
        None => Ok(None),
    }
}

fn try_dir(dir: &Path) -> Result<Option<Manifest>, SundryError> {
    let candidate: PathBuf = dir.join(MANIFEST_FILE);
    debug!(path = %candidate.display(), "checking for manifest");

    if !candidate.is_file() {
        return Ok(None);
    }

    // Read failures past this point propagate; the file was seen to exist.
    let text = std::fs::read_to_string(&candidate)?;
    let manifest: Manifest = toml::from_str(&text)?;
    Ok(Some(manifest))
}
