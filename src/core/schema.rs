//! Structural validation of a candidate `jsr.json`.
//!
//! Validation never rewrites the candidate: a record either already has the
//! exact target shape and is handed back unchanged, or every violated field is
//! reported.

use std::fmt;

use crate::core::jsr_json::{is_scoped_name, Exports, JsrManifest, Publish, SCOPED_NAME_PATTERN};

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending field, e.g. `publish.include[2]`
    pub path: String,
    /// What is wrong with it
    pub reason: String,
}

impl Violation {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Violation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is invalid: {}", self.path, self.reason)
    }
}

/// Validate `candidate` against the `jsr.json` schema.
pub fn validate(candidate: JsrManifest) -> Result<JsrManifest, Vec<Violation>> {
    let mut violations = Vec::new();

    if !is_scoped_name(&candidate.name) {
        violations.push(Violation::new(
            "name",
            format!(
                "`{}` does not match {}",
                candidate.name, SCOPED_NAME_PATTERN
            ),
        ));
    }

    if let Some(ref publish) = candidate.publish {
        check_publish(publish, &mut violations);
    }

    check_exports(&candidate.exports, &mut violations);

    if violations.is_empty() {
        Ok(candidate)
    } else {
        Err(violations)
    }
}

fn check_publish(publish: &Publish, violations: &mut Vec<Violation>) {
    if publish.include.is_none() && publish.exclude.is_none() {
        violations.push(Violation::new(
            "publish",
            "must contain `include` or `exclude` when present",
        ));
    }

    for (field, list) in [("include", &publish.include), ("exclude", &publish.exclude)] {
        let Some(list) = list else { continue };
        if list.is_empty() {
            violations.push(Violation::new(
                format!("publish.{}", field),
                "must not be an empty list",
            ));
        }
    }
}

fn check_exports(exports: &Exports, violations: &mut Vec<Violation>) {
    if let Exports::Map(map) = exports {
        if map.is_empty() {
            violations.push(Violation::new(
                "exports",
                "must contain at least one entrypoint",
            ));
        }
    }
}

/// Join violations into the multi-line message reported to the user.
pub fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jsr_json::ExportMap;

    fn candidate() -> JsrManifest {
        JsrManifest {
            name: "@author/package".to_string(),
            version: Some("1.0.0".to_string()),
            publish: Some(Publish {
                include: Some(vec!["src".to_string()]),
                exclude: Some(vec!["node_modules".to_string()]),
            }),
            exports: Exports::from_entries([(".", "./src/index.ts")]),
        }
    }

    #[test]
    fn test_valid_candidate_is_returned_unchanged() {
        let input = candidate();
        let output = validate(input.clone()).unwrap();
        assert_eq!(input, output);
    }

    #[test]
    fn test_unscoped_name_is_rejected() {
        let mut input = candidate();
        input.name = "package".to_string();

        let violations = validate(input).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "name");
        assert!(violations[0].to_string().starts_with("name is invalid: "));
    }

    #[test]
    fn test_empty_exports_map_is_rejected() {
        let mut input = candidate();
        input.exports = Exports::Map(ExportMap::new());

        let violations = validate(input).unwrap_err();
        assert_eq!(violations[0].path, "exports");
    }

    #[test]
    fn test_empty_strings_pass_through() {
        let mut input = candidate();
        input.version = Some(String::new());
        input.publish = Some(Publish {
            include: Some(vec!["dist".to_string(), String::new()]),
            exclude: None,
        });
        input.exports = Exports::from_entries([(".", "./mod.ts"), ("./x", "")]);

        let output = validate(input.clone()).unwrap();
        assert_eq!(input, output);

        let mut input = candidate();
        input.exports = Exports::Path(String::new());
        assert_eq!(validate(input).unwrap().exports.get("."), Some(""));
    }

    #[test]
    fn test_empty_publish_is_rejected() {
        let mut input = candidate();
        input.publish = Some(Publish::default());
        assert!(validate(input).is_err());

        let mut input = candidate();
        input.publish = Some(Publish {
            include: Some(Vec::new()),
            exclude: None,
        });
        let violations = validate(input).unwrap_err();
        assert_eq!(violations[0].path, "publish.include");
    }

    #[test]
    fn test_all_violations_are_reported() {
        let input = JsrManifest {
            name: "Bad Name".to_string(),
            version: None,
            publish: None,
            exports: Exports::Map(ExportMap::new()),
        };

        let violations = validate(input).unwrap_err();
        let message = format_violations(&violations);
        assert_eq!(message.lines().count(), 2);
        assert!(message.contains("name is invalid"));
        assert!(message.contains("exports is invalid"));
    }
}
