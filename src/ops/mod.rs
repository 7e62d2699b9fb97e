//! High-level operations.
//!
//! Each resolver derives one part of `jsr.json` from `package.json`;
//! [`generate`] puts them together and validates the result.

pub mod errors;
pub mod generate;
pub mod resolve_exports;
pub mod resolve_name;
pub mod resolve_publish;

pub use errors::GenerateError;
pub use generate::{generate, generate_jsr_json, GenerateOptions, GenerateResult};
pub use resolve_exports::resolve_exports;
pub use resolve_name::resolve_name;
pub use resolve_publish::{resolve_exclude, resolve_include, resolve_publish};
