//! pkg-to-jsr - Generate a JSR manifest (`jsr.json`) from `package.json`
//!
//! This crate provides the library functionality behind the `pkg-to-jsr`
//! binary: deriving the scoped package name, the publish include/exclude
//! lists and the exports map, and validating the result against the JSR
//! manifest schema.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{Exports, JsrManifest, PackageJson, Publish, ScopedName};
pub use ops::{generate, generate_jsr_json, GenerateError, GenerateOptions};
