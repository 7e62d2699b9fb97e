//! Normalize `package.json` exports into JSR exports.
//!
//! JSR only understands entrypoint-to-path maps, so conditional exports are
//! collapsed to a single path: the `source` condition when present, otherwise
//! `import` (either a path or `{ "default": path }`).

use serde_json::{Map, Value};

use crate::core::jsr_json::ExportMap;
use crate::core::{Exports, ExportsField, PackageJson};
use crate::ops::errors::GenerateError;

/// Condition preferred over everything else; points at the untranspiled source.
pub const SOURCE_CONDITION: &str = "source";

/// Fallback condition.
pub const IMPORT_CONDITION: &str = "import";

/// Resolve the JSR exports of a package.
pub fn resolve_exports(pkg: &PackageJson) -> Result<Exports, GenerateError> {
    let exports = pkg.exports.as_ref().ok_or(GenerateError::ExportsMissing)?;

    let map = match exports {
        ExportsField::Path(path) => {
            return Ok(Exports::from_entries([(".", path.as_str())]));
        }
        ExportsField::Map(map) => map,
    };

    let (resolved, skipped) = flatten_exports(map);
    for key in &skipped {
        tracing::warn!(
            "export key `{}` is ignored because it is not a string or a `{}`/`{}` object",
            key,
            SOURCE_CONDITION,
            IMPORT_CONDITION
        );
    }

    if resolved.is_empty() {
        return Err(GenerateError::NoResolvableExports { skipped });
    }

    Ok(Exports::Map(resolved))
}

/// Collapse each entry to a path. Returns the resolved map and the keys
/// that could not be resolved, both in declaration order.
fn flatten_exports(exports: &Map<String, Value>) -> (ExportMap, Vec<String>) {
    let mut resolved = ExportMap::new();
    let mut skipped = Vec::new();

    for (key, value) in exports {
        match entry_path(value) {
            Some(path) => {
                resolved.insert(key.clone(), path.to_string());
            }
            None => skipped.push(key.clone()),
        }
    }

    (resolved, skipped)
}

fn entry_path(value: &Value) -> Option<&str> {
    match value {
        Value::String(path) => Some(path.as_str()),
        Value::Object(conditions) => {
            if let Some(Value::String(source)) = conditions.get(SOURCE_CONDITION) {
                return Some(source.as_str());
            }
            match conditions.get(IMPORT_CONDITION)? {
                Value::String(import) => Some(import.as_str()),
                Value::Object(import) => import.get("default").and_then(Value::as_str),
                _ => None,
            }
        }
        _ => None,
    }
}
