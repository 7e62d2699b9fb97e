//! `files` pattern classification.
//!
//! npm `files` entries are glob patterns; a leading `!` turns an entry into a
//! negation. Only a single leading `!` is stripped when turning a negation
//! into an exclude pattern, so `!**/node_modules` becomes `**/node_modules`.

use glob::{Pattern, PatternError};

/// Returns true if `pattern` is a negation (`!`-prefixed).
pub fn is_negation(pattern: &str) -> bool {
    pattern.starts_with('!')
}

/// Remove the leading `!` from a negation. Positive patterns are returned as-is.
pub fn strip_negation(pattern: &str) -> &str {
    pattern.strip_prefix('!').unwrap_or(pattern)
}

/// Check that the pattern (negation stripped) is valid glob syntax.
pub fn check_glob(pattern: &str) -> Result<(), PatternError> {
    Pattern::new(strip_negation(pattern)).map(|_| ())
}

/// Split patterns into `(positive, negated)`, preserving order.
///
/// Negated patterns come back with the leading `!` stripped.
pub fn partition(patterns: &[String]) -> (Vec<&str>, Vec<&str>) {
    let mut positive = Vec::new();
    let mut negated = Vec::new();
    for pattern in patterns {
        if is_negation(pattern) {
            negated.push(strip_negation(pattern));
        } else {
            positive.push(pattern.as_str());
        }
    }
    (positive, negated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negation() {
        assert!(is_negation("!node_modules"));
        assert!(is_negation("!"));
        assert!(!is_negation("dist"));
        assert!(!is_negation(""));
        assert!(!is_negation(" !dist"));
    }

    #[test]
    fn test_strip_negation_removes_one_bang() {
        assert_eq!(strip_negation("!node_modules"), "node_modules");
        assert_eq!(strip_negation("!**/node_modules"), "**/node_modules");
        assert_eq!(strip_negation("!!twice"), "!twice");
        assert_eq!(strip_negation("dist"), "dist");
    }

    #[test]
    fn test_partition() {
        let files = vec![
            "src".to_string(),
            "!**/*.test.ts".to_string(),
            "dist".to_string(),
            "!node_modules".to_string(),
        ];
        let (positive, negated) = partition(&files);
        assert_eq!(positive, ["src", "dist"]);
        assert_eq!(negated, ["**/*.test.ts", "node_modules"]);
    }

    #[test]
    fn test_check_glob() {
        assert!(check_glob("src/**/*.ts").is_ok());
        assert!(check_glob("!dist/*.map").is_ok());
        assert!(check_glob("src/[").is_err());
        assert!(check_glob("a/***/b").is_err());
    }
}
