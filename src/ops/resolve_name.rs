//! Derive the scoped JSR package name.

use crate::core::jsr_json::ScopedName;
use crate::core::PackageJson;
use crate::ops::errors::GenerateError;

/// Resolve the JSR name for a package.
///
/// Precedence, first match wins:
/// 1. `jsrName`, which must itself be scoped (an invalid `jsrName` is an error,
///    not a reason to fall back);
/// 2. `name`, when it is already scoped;
/// 3. `@{author}/{name}`, when both are present and the result is scoped.
pub fn resolve_name(pkg: &PackageJson) -> Result<ScopedName, GenerateError> {
    let author = pkg.author.as_ref().and_then(|a| a.name());
    let error = || GenerateError::NameResolution {
        registry_name: pkg.registry_name.clone(),
        name: pkg.name.clone(),
        has_author: author.is_some(),
    };

    if let Some(ref registry_name) = pkg.registry_name {
        return ScopedName::new(registry_name.as_str()).ok_or_else(error);
    }

    let Some(ref name) = pkg.name else {
        return Err(error());
    };

    if let Some(scoped) = ScopedName::new(name.as_str()) {
        return Ok(scoped);
    }

    if let Some(author) = author {
        let candidate = format!("@{}/{}", author, name);
        tracing::debug!("deriving JSR name `{}` from name and author", candidate);
        if let Some(scoped) = ScopedName::new(candidate) {
            return Ok(scoped);
        }
    }

    Err(error())
}
