//! Core data structures.

pub mod jsr_json;
pub mod package_json;
pub mod pattern;
pub mod schema;

pub use jsr_json::{Exports, JsrManifest, Publish, ScopedName};
pub use package_json::{Author, ExportsField, PackageJson};
pub use schema::Violation;
