//! Derive `publish.include` / `publish.exclude` from `files` and overrides.
//!
//! Positive `files` patterns become includes and negated ones become excludes.
//! `jsrInclude`/`jsrExclude` are placed before the derived patterns, and each
//! override list removes exact matches from the opposite side. Missing `files`
//! means nothing is derived; there is no implicit publish root.

use std::collections::HashSet;

use crate::core::pattern;
use crate::core::{PackageJson, Publish};

/// Compute `publish.include`, or `None` when there is nothing to include.
pub fn resolve_include(pkg: &PackageJson) -> Option<Vec<String>> {
    let (from_files, _) = split_files(pkg);
    combine(
        pkg.registry_include.as_deref().unwrap_or_default(),
        &from_files,
        pkg.registry_exclude.as_deref().unwrap_or_default(),
    )
}

/// Compute `publish.exclude`, or `None` when there is nothing to exclude.
pub fn resolve_exclude(pkg: &PackageJson) -> Option<Vec<String>> {
    let (_, from_files) = split_files(pkg);
    combine(
        pkg.registry_exclude.as_deref().unwrap_or_default(),
        &from_files,
        pkg.registry_include.as_deref().unwrap_or_default(),
    )
}

/// Compute the whole `publish` section, or `None` when both lists are empty.
pub fn resolve_publish(pkg: &PackageJson) -> Option<Publish> {
    check_patterns(pkg);

    let include = resolve_include(pkg);
    let exclude = resolve_exclude(pkg);
    if include.is_none() && exclude.is_none() {
        return None;
    }
    Some(Publish { include, exclude })
}

fn split_files(pkg: &PackageJson) -> (Vec<&str>, Vec<&str>) {
    pkg.files
        .as_deref()
        .map(pattern::partition)
        .unwrap_or_default()
}

/// `overrides ++ derived`, minus anything in `removed`, deduplicated in
/// first-seen order.
fn combine(overrides: &[String], derived: &[&str], removed: &[String]) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let result: Vec<String> = overrides
        .iter()
        .map(String::as_str)
        .chain(derived.iter().copied())
        .filter(|p| !removed.iter().any(|r| r.as_str() == *p))
        .filter(|p| seen.insert(*p))
        .map(str::to_string)
        .collect();

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

fn check_patterns(pkg: &PackageJson) {
    let lists = [&pkg.files, &pkg.registry_include, &pkg.registry_exclude];
    for pattern in lists.into_iter().flatten().flatten() {
        if let Err(e) = pattern::check_glob(pattern) {
            tracing::warn!("`{}` is not a valid glob pattern: {}", pattern, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::package_json;
    use serde_json::json;

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_files_split_into_include_and_exclude() {
        let pkg = package_json(json!({ "files": ["src", "dist", "!node_modules"] }));
        assert_eq!(resolve_include(&pkg), strings(&["src", "dist"]));
        assert_eq!(resolve_exclude(&pkg), strings(&["node_modules"]));
    }

    #[test]
    fn test_include_override_is_prepended() {
        let pkg = package_json(json!({
            "files": ["dist", "!node_modules"],
            "jsrInclude": ["src"]
        }));
        assert_eq!(resolve_include(&pkg), strings(&["src", "dist"]));
    }

    #[test]
    fn test_include_is_deduplicated() {
        let pkg = package_json(json!({
            "files": ["src", "dist", "!node_modules"],
            "jsrInclude": ["src"]
        }));
        assert_eq!(resolve_include(&pkg), strings(&["src", "dist"]));
    }

    #[test]
    fn test_exclude_override_removes_include() {
        let pkg = package_json(json!({
            "files": ["src", "dist", "!node_modules"],
            "jsrInclude": ["src"],
            "jsrExclude": ["dist"]
        }));
        assert_eq!(resolve_include(&pkg), strings(&["src"]));
        assert_eq!(resolve_exclude(&pkg), strings(&["dist", "node_modules"]));
    }

    #[test]
    fn test_include_override_removes_exclude() {
        let pkg = package_json(json!({
            "files": ["dist", "!src"],
            "jsrInclude": ["src"]
        }));
        assert_eq!(resolve_include(&pkg), strings(&["src", "dist"]));
        assert_eq!(resolve_exclude(&pkg), None);
    }

    #[test]
    fn test_only_one_bang_is_stripped() {
        let pkg = package_json(json!({ "files": ["dist", "!**/node_modules"] }));
        assert_eq!(resolve_exclude(&pkg), strings(&["**/node_modules"]));
    }

    #[test]
    fn test_missing_files_yields_nothing() {
        let pkg = package_json(json!({ "name": "@scope/pkg" }));
        assert_eq!(resolve_include(&pkg), None);
        assert_eq!(resolve_exclude(&pkg), None);
        assert_eq!(resolve_publish(&pkg), None);
    }

    #[test]
    fn test_overrides_without_files() {
        let pkg = package_json(json!({ "jsrExclude": ["tests"] }));
        assert_eq!(
            resolve_publish(&pkg),
            Some(Publish {
                include: None,
                exclude: strings(&["tests"]),
            })
        );
    }

    #[test]
    fn test_publish_omits_empty_side() {
        let pkg = package_json(json!({ "files": ["dist"] }));
        assert_eq!(
            resolve_publish(&pkg),
            Some(Publish {
                include: strings(&["dist"]),
                exclude: None,
            })
        );
    }

    #[test]
    fn test_overrides_remove_from_opposite_side() {
        let pkg = package_json(json!({
            "files": ["a", "b", "!c"],
            "jsrInclude": ["c"],
            "jsrExclude": ["b"]
        }));
        let include = resolve_include(&pkg).unwrap_or_default();
        let exclude = resolve_exclude(&pkg).unwrap_or_default();
        assert_eq!(include, ["c", "a"]);
        assert_eq!(exclude, ["b"]);
        assert!(include.iter().all(|p| !exclude.contains(p)));
    }
}
