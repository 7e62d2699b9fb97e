//! Generation error types and diagnostics.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::schema::{format_violations, Violation};
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while generating `jsr.json`. Every variant ends the run.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum GenerateError {
    #[error("{} is not a valid root directory", .path.display())]
    #[diagnostic(code(pkg_to_jsr::root))]
    InvalidRoot { path: PathBuf },

    #[error("cannot find package.json at {}", .dir.display())]
    #[diagnostic(code(pkg_to_jsr::not_found))]
    ManifestNotFound { dir: PathBuf },

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(pkg_to_jsr::read))]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    #[diagnostic(code(pkg_to_jsr::parse))]
    ManifestParse { path: PathBuf, message: String },

    #[error("invalid config {}: {message}", .path.display())]
    #[diagnostic(code(pkg_to_jsr::config))]
    Config { path: PathBuf, message: String },

    #[error("cannot derive a scoped JSR package name")]
    #[diagnostic(code(pkg_to_jsr::name))]
    NameResolution {
        /// `jsrName` as given, if any
        registry_name: Option<String>,
        /// `name` as given, if any
        name: Option<String>,
        /// Whether a usable author was present
        has_author: bool,
    },

    #[error("no exports field found in package.json")]
    #[diagnostic(code(pkg_to_jsr::exports))]
    ExportsMissing,

    #[error("no valid exports field found in package.json")]
    #[diagnostic(code(pkg_to_jsr::exports))]
    NoResolvableExports { skipped: Vec<String> },

    #[error("{}", format_violations(.violations))]
    #[diagnostic(code(pkg_to_jsr::schema))]
    Validation { violations: Vec<Violation> },

    #[error("invalid version: {version}")]
    #[diagnostic(code(pkg_to_jsr::version))]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("failed to write jsr.json to {}", .path.display())]
    #[diagnostic(code(pkg_to_jsr::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            GenerateError::InvalidRoot { .. } => Diagnostic::error(self.to_string()),

            GenerateError::ManifestNotFound { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::NO_MANIFEST)
            }

            GenerateError::ManifestRead { path, source } => {
                Diagnostic::error(format!("failed to read package.json: {}", source))
                    .with_location(path)
            }

            GenerateError::ManifestParse { path, message } => {
                Diagnostic::error(format!("failed to parse package.json: {}", message))
                    .with_location(path)
            }

            GenerateError::Config { path, message } => {
                Diagnostic::error(format!("invalid configuration: {}", message))
                    .with_location(path)
            }

            GenerateError::NameResolution {
                registry_name,
                name,
                has_author,
            } => {
                let message = match (registry_name, name) {
                    (Some(registry_name), _) => format!(
                        "`jsrName: {}` is not a valid scoped package name",
                        registry_name
                    ),
                    (None, Some(name)) if !has_author => {
                        format!("`name: {}` is not a valid scoped package name", name)
                    }
                    (None, Some(name)) => format!(
                        "`name: {}` combined with `author` is not a valid scoped package name",
                        name
                    ),
                    (None, None) => "package.json has no name to derive a JSR name from".to_string(),
                };

                Diagnostic::error(message)
                    .with_context(format!(
                        "On JSR, all packages are contained within a scope. See {} for more information",
                        suggestions::SCOPES_DOC
                    ))
                    .with_suggestion(suggestions::ADD_JSR_NAME)
                    .with_suggestion(suggestions::USE_SCOPED_NAME)
                    .with_suggestion(suggestions::ADD_NAME_AND_AUTHOR)
            }

            GenerateError::ExportsMissing => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::ADD_EXPORTS)
            }

            GenerateError::NoResolvableExports { skipped } => {
                let mut diag = Diagnostic::error(self.to_string());
                if !skipped.is_empty() {
                    diag = diag.with_context(format!("ignored export keys: {}", skipped.join(", ")));
                }
                diag.with_context(
                    "each export must be a path, or an object with a `source` or `import` path",
                )
            }

            GenerateError::Validation { violations } => {
                let mut diag = Diagnostic::error("generated jsr.json does not match the JSR schema");
                for violation in violations {
                    diag = diag.with_context(violation.to_string());
                }
                diag
            }

            GenerateError::InvalidVersion { version, source } => {
                Diagnostic::error(format!("invalid version: {}", version))
                    .with_context(source.to_string())
            }

            GenerateError::Write { path, source } => {
                Diagnostic::error(format!("failed to write jsr.json: {}", source))
                    .with_location(path)
            }
        }
    }
}
