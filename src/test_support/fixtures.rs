//! Test fixtures for common package.json shapes.

use serde_json::{json, Value};

/// A fully populated package that generates cleanly.
pub fn basic_package() -> Value {
    json!({
        "name": "package",
        "author": "author",
        "version": "1.0.0",
        "description": "fixture",
        "files": ["src", "dist", "!node_modules"],
        "exports": {
            ".": "./src/index.ts",
            "./sub": "./src/sub.ts"
        }
    })
}

/// A package using conditional exports with a `source` condition.
pub fn conditional_exports_package() -> Value {
    json!({
        "name": "@scope/conditional",
        "version": "2.0.0",
        "exports": {
            ".": {
                "source": "./src/index.ts",
                "import": "./dist/index.js",
                "types": "./dist/index.d.ts"
            },
            "./sub": {
                "import": { "types": "./dist/sub.d.ts", "default": "./dist/sub.js" }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::generate;
    use crate::test_support::package_json;

    #[test]
    fn test_fixtures_generate() {
        let manifest = generate(&package_json(basic_package())).unwrap();
        assert_eq!(manifest.name, "@author/package");

        let manifest = generate(&package_json(conditional_exports_package())).unwrap();
        assert_eq!(manifest.exports.get("."), Some("./src/index.ts"));
        assert_eq!(manifest.exports.get("./sub"), Some("./dist/sub.js"));
    }
}
