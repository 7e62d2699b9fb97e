//! `package.json` source manifest.
//!
//! Only the fields that feed `jsr.json` are modelled; everything else in the
//! file is ignored during deserialization. A modelled field carrying the wrong
//! JSON type is a parse error.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The subset of `package.json` consumed by the generator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageJson {
    /// Package name, scoped or unscoped
    #[serde(default)]
    pub name: Option<String>,

    /// Package author
    #[serde(default)]
    pub author: Option<Author>,

    /// Package version
    #[serde(default)]
    pub version: Option<String>,

    /// Published file patterns; `!`-prefixed entries are negations
    #[serde(default)]
    pub files: Option<Vec<String>>,

    /// Entrypoint map
    #[serde(default)]
    pub exports: Option<ExportsField>,

    /// Explicit registry name, takes precedence over `name`/`author`
    #[serde(default, rename = "jsrName")]
    pub registry_name: Option<String>,

    /// Explicit include patterns, prepended to those derived from `files`
    #[serde(default, rename = "jsrInclude")]
    pub registry_include: Option<Vec<String>>,

    /// Explicit exclude patterns, prepended to those derived from `files`
    #[serde(default, rename = "jsrExclude")]
    pub registry_exclude: Option<Vec<String>>,
}

impl PackageJson {
    /// Parse `package.json` content.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

/// `author` in either of its npm forms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Author {
    /// `"author": "Jane Doe <jane@example.com>"`
    Name(String),
    /// `"author": { "name": "Jane Doe", "email": "..." }`
    Person {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl Author {
    /// The author's name, if it is a non-empty string.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Author::Name(name) => Some(name.as_str()),
            Author::Person { name, .. } => name.as_deref(),
        };
        name.filter(|n| !n.is_empty())
    }
}

/// The `exports` field before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExportsField {
    /// `"exports": "./index.js"`
    Path(String),
    /// Subpath map; values are paths or conditional-export objects.
    /// Key order follows the source document.
    Map(Map<String, Value>),
}
