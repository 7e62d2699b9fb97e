//! Filesystem utilities.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::{JsrManifest, PackageJson};
use crate::ops::errors::GenerateError;

/// Source manifest file name.
pub const PACKAGE_JSON: &str = "package.json";

/// Generated manifest file name.
pub const JSR_JSON: &str = "jsr.json";

/// Find `package.json` in `start` or the nearest ancestor directory.
pub fn find_package_json(start: &Path) -> Result<PathBuf, GenerateError> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(PACKAGE_JSON);
        if candidate.is_file() {
            tracing::debug!("found {}", candidate.display());
            return Ok(candidate);
        }
        if !current.pop() {
            return Err(GenerateError::ManifestNotFound {
                dir: start.to_path_buf(),
            });
        }
    }
}

/// Read and parse a `package.json`.
pub fn read_package_json(path: &Path) -> Result<PackageJson, GenerateError> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    PackageJson::parse(&content).map_err(|e| GenerateError::ManifestParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write `manifest` to `path` as tab-indented JSON.
///
/// The file is written next to `path` and renamed into place, so `path`
/// either keeps its old contents or holds the complete new manifest.
pub fn write_jsr_json(path: &Path, manifest: &JsrManifest) -> Result<(), GenerateError> {
    let write_error = |source: std::io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let contents = manifest
        .to_json_string()
        .map_err(|e| write_error(e.into()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(contents.as_bytes()).map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Resolve `root` against `cwd` and make sure it is a directory.
pub fn resolve_root(cwd: &Path, root: Option<&Path>) -> Result<PathBuf, GenerateError> {
    let dir = match root {
        Some(root) if root.is_absolute() => root.to_path_buf(),
        Some(root) => cwd.join(root),
        None => cwd.to_path_buf(),
    };

    if !dir.is_dir() {
        return Err(GenerateError::InvalidRoot { path: dir });
    }
    Ok(dir)
}
