//! Locating, parsing and projecting npm package.json files.
//!
//! The pipeline is: `manifest_path` builds the path, `parse_file` reads and
//! deserializes it, and `extract_names` pulls out the dependency names.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::types::{DependencyMap, DependencyNames, PackageJson};

/// File name of the manifest inside the application directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Application directory used when none is given on the command line.
pub const DEFAULT_APP_DIR: &str = "APP";

/// Errors that can occur while loading a package.json file.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// No file exists at the resolved path.
    #[error("package.json not found at: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read as text.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file content is not a valid manifest.
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Builds the path of the manifest inside `app_dir`.
///
/// Pure path composition; the filesystem is not touched.
///
/// ```
/// use std::path::Path;
/// use depsummary::parser::package_json::manifest_path;
///
/// assert_eq!(manifest_path("APP"), Path::new("APP").join("package.json"));
/// ```
pub fn manifest_path(app_dir: impl AsRef<Path>) -> PathBuf {
    app_dir.as_ref().join(MANIFEST_FILE)
}

/// Reads and parses the manifest at `path`.
///
/// Returns [`ManifestError::NotFound`] when nothing exists at `path`. The
/// file handle is released before this function returns on every path.
pub fn parse_file(path: &Path) -> ManifestResult<PackageJson> {
    if !path.exists() {
        return Err(ManifestError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read manifest");

    parse_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a package.json from a string.
///
/// The document must be a JSON object. Repeated keys keep their last value.
///
/// ```
/// use depsummary::parser::package_json::parse_str;
///
/// let pkg = parse_str(r#"{"name": "my-app", "dependencies": {"react": "^18.0.0"}}"#).unwrap();
/// assert!(pkg.dependencies.is_some());
/// assert!(parse_str("[]").is_err());
/// ```
pub fn parse_str(content: &str) -> Result<PackageJson, serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;
    PackageJson::from_value(value)
}

/// Projects the keys of `dependencies` and `devDependencies`.
///
/// A missing mapping yields an empty list. Order is unspecified; the
/// reporter sorts.
pub fn extract_names(pkg: &PackageJson) -> DependencyNames {
    let names = DependencyNames {
        deps: mapping_keys(pkg.dependencies.as_ref()),
        dev_deps: mapping_keys(pkg.dev_dependencies.as_ref()),
    };
    debug!(
        deps = names.deps.len(),
        dev_deps = names.dev_deps.len(),
        "extracted dependency names"
    );
    names
}

fn mapping_keys(map: Option<&DependencyMap>) -> Vec<String> {
    map.map(|m| m.keys().cloned().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE_PACKAGE_JSON: &str = r#"{
        "name": "test-app",
        "version": "1.0.0",
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "lodash": "^4.17.21"
        },
        "devDependencies": {
            "typescript": "^5.0.0",
            "jest": "^29.0.0"
        },
        "peerDependencies": {
            "react": ">=16.8.0"
        }
    }"#;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_manifest_path_joins_file_name() {
        let path = manifest_path("some/dir");
        assert!(path.ends_with("package.json"));
        assert!(path.starts_with("some/dir"));
    }

    #[test]
    fn test_parse_str_invalid_json() {
        assert!(parse_str("{ invalid json }").is_err());
    }

    #[test]
    fn test_parse_str_rejects_top_level_array() {
        let json = r#"["x", "1", {"zeta": "1"}, {"jest": "1"}]"#;
        assert!(parse_str(json).is_err());
    }

    #[test]
    fn test_parse_str_falsy_mappings_yield_empty_names() {
        for falsy in ["null", "false", "0", "\"\""] {
            let json = format!(r#"{{"dependencies": {falsy}, "devDependencies": {falsy}}}"#);
            let names = extract_names(&parse_str(&json).unwrap());

            assert!(names.deps.is_empty(), "dependencies: {}", falsy);
            assert!(names.dev_deps.is_empty(), "devDependencies: {}", falsy);
        }
    }

    #[test]
    fn test_parse_str_duplicate_key_keeps_last() {
        let json = r#"{
            "dependencies": {"first": "1.0.0"},
            "dependencies": {"second": "2.0.0"}
        }"#;
        let names = extract_names(&parse_str(json).unwrap());

        assert_eq!(names.deps, vec!["second"]);
    }

    #[test]
    fn test_parse_str_rejects_non_mapping_dependencies() {
        assert!(parse_str(r#"{"dependencies": ["react"]}"#).is_err());
    }

    #[test]
    fn test_extract_names_both_mappings() {
        let pkg = parse_str(SAMPLE_PACKAGE_JSON).unwrap();
        let names = extract_names(&pkg);

        assert_eq!(sorted(names.deps), vec!["lodash", "react", "react-dom"]);
        assert_eq!(sorted(names.dev_deps), vec!["jest", "typescript"]);
    }

    #[test]
    fn test_extract_names_missing_mappings() {
        let pkg = parse_str(r#"{"name": "empty-deps"}"#).unwrap();
        let names = extract_names(&pkg);

        assert!(names.deps.is_empty());
        assert!(names.dev_deps.is_empty());
    }

    #[test]
    fn test_extract_names_ignores_version_values() {
        let json = r#"{"dependencies": {"local": {"path": "../x"}, "pinned": 3}}"#;
        let pkg = parse_str(json).unwrap();

        assert_eq!(sorted(extract_names(&pkg).deps), vec!["local", "pinned"]);
    }

    #[test]
    fn test_parse_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path().join("MISSING_DIR"));

        let err = parse_file(&path).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            format!("package.json not found at: {}", path.display())
        );
    }

    #[test]
    fn test_parse_file_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path());
        fs::write(&path, "{ \"dependencies\": ").unwrap();

        let err = parse_file(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn test_parse_file_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path());
        fs::create_dir(&path).unwrap();

        let err = parse_file(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn test_parse_file_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path());
        fs::write(&path, SAMPLE_PACKAGE_JSON).unwrap();

        let names = extract_names(&parse_file(&path).unwrap());
        assert_eq!(names.deps.len(), 3);
        assert_eq!(names.dev_deps.len(), 2);
    }
}
