//! Generate `jsr.json` from `package.json`.

use std::path::{Path, PathBuf};

use crate::core::schema;
use crate::core::{JsrManifest, PackageJson};
use crate::ops::errors::GenerateError;
use crate::ops::resolve_exports::resolve_exports;
use crate::ops::resolve_name::resolve_name;
use crate::ops::resolve_publish::resolve_publish;
use crate::util::config::Config;
use crate::util::fs::{find_package_json, read_package_json, write_jsr_json, JSR_JSON};

/// Options for [`generate_jsr_json`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory to start from; must exist
    pub root: PathBuf,
}

/// Outcome of a successful [`generate_jsr_json`].
#[derive(Debug)]
pub struct GenerateResult {
    /// package.json that was read
    pub package_json_path: PathBuf,
    /// jsr.json that was written
    pub jsr_json_path: PathBuf,
    pub manifest: JsrManifest,
}

/// Build and validate the `jsr.json` manifest for a package.
///
/// Pure: the same input always yields the same manifest.
pub fn generate(pkg: &PackageJson) -> Result<JsrManifest, GenerateError> {
    let candidate = JsrManifest {
        name: resolve_name(pkg)?.to_string(),
        version: pkg.version.clone(),
        publish: resolve_publish(pkg),
        exports: resolve_exports(pkg)?,
    };

    let manifest = schema::validate(candidate)
        .map_err(|violations| GenerateError::Validation { violations })?;

    if let Some(ref version) = manifest.version {
        semver::Version::parse(version).map_err(|source| GenerateError::InvalidVersion {
            version: version.clone(),
            source,
        })?;
    }

    Ok(manifest)
}

/// Locate package.json from `opts.root`, generate the manifest, and write it
/// to `jsr.json` in the root directory.
///
/// Nothing is written unless the manifest is complete and valid.
pub fn generate_jsr_json(opts: &GenerateOptions) -> Result<GenerateResult, GenerateError> {
    let config = Config::load_from_dir(&opts.root)?;
    let package_dir = config.package_dir(&opts.root);
    if !package_dir.is_dir() {
        return Err(GenerateError::InvalidRoot { path: package_dir });
    }

    let package_json_path = find_package_json(&package_dir)?;
    let mut pkg = read_package_json(&package_json_path)?;
    config.apply(&mut pkg);

    let manifest = generate(&pkg)?;
    tracing::debug!(
        "generated manifest for {} with {} export(s)",
        manifest.name,
        manifest.exports.len()
    );

    let jsr_json_path = jsr_json_path(&package_dir);
    write_jsr_json(&jsr_json_path, &manifest)?;

    Ok(GenerateResult {
        package_json_path,
        jsr_json_path,
        manifest,
    })
}

/// Where `jsr.json` is written for a root directory.
pub fn jsr_json_path(root: &Path) -> PathBuf {
    root.join(JSR_JSON)
}
