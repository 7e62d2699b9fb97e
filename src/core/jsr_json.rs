//! `jsr.json` registry manifest.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

/// Pattern every JSR package name must match: `@scope/name`.
pub const SCOPED_NAME_PATTERN: &str = r"^@[a-z0-9\-_]+/[a-z0-9\-_]+$";

static SCOPED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SCOPED_NAME_PATTERN).unwrap());

/// Check whether `name` is a valid JSR scoped package name.
pub fn is_scoped_name(name: &str) -> bool {
    SCOPED_NAME_RE.is_match(name)
}

/// A package name known to match [`SCOPED_NAME_PATTERN`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ScopedName(String);

impl ScopedName {
    /// Returns `None` if `name` is not a scoped name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        is_scoped_name(&name).then_some(ScopedName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scope without the leading `@`.
    pub fn scope(&self) -> &str {
        self.0
            .trim_start_matches('@')
            .split_once('/')
            .map_or("", |(scope, _)| scope)
    }

    /// The package part after the `/`.
    pub fn package(&self) -> &str {
        self.0.split_once('/').map_or("", |(_, pkg)| pkg)
    }
}

impl fmt::Display for ScopedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entrypoint to path, in declaration order.
pub type ExportMap = IndexMap<String, String>;

/// Normalized exports: a single entrypoint path, or entrypoint to path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Exports {
    Path(String),
    Map(ExportMap),
}

impl Exports {
    /// Build a map variant from `(entrypoint, path)` pairs, keeping their order.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Exports::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Number of entrypoints.
    pub fn len(&self) -> usize {
        match self {
            Exports::Path(_) => 1,
            Exports::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path for an entrypoint such as `"."` or `"./sub"`.
    pub fn get(&self, entrypoint: &str) -> Option<&str> {
        match self {
            Exports::Path(path) if entrypoint == "." => Some(path),
            Exports::Path(_) => None,
            Exports::Map(map) => map.get(entrypoint).map(String::as_str),
        }
    }
}

/// The `publish` section of `jsr.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Publish {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

/// The generated `jsr.json` manifest.
///
/// Field order here is the serialized field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsrManifest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish: Option<Publish>,

    pub exports: Exports,
}

impl JsrManifest {
    /// Serialize as tab-indented JSON, the layout written to `jsr.json`.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
