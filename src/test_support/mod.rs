//! Test utilities for pkg-to-jsr unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::{package_json, write_package};
//!
//! #[test]
//! fn test_example() {
//!     let pkg = package_json(json!({ "name": "@scope/pkg", "exports": "./mod.ts" }));
//!     // Use pkg in tests...
//! }
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::PackageJson;
use crate::util::fs::PACKAGE_JSON;

// Re-export fixtures for convenience
pub use fixtures::*;

/// Build a `PackageJson` from a JSON value.
///
/// Panics if the value does not have the package.json shape.
pub fn package_json(value: Value) -> PackageJson {
    serde_json::from_value(value).expect("invalid package.json fixture")
}

/// Write `value` as `package.json` into `dir`, returning the file path.
pub fn write_package(dir: &Path, value: Value) -> PathBuf {
    let path = dir.join(PACKAGE_JSON);
    let content = serde_json::to_string_pretty(&value).expect("serialize fixture");
    std::fs::write(&path, content).expect("write package.json fixture");
    path
}
