//! Parser module for depsummary.
//!
//! Locates a package.json inside an application directory, parses it, and
//! projects the names declared under `dependencies` and `devDependencies`.
//!
//! # Example
//!
//! ```no_run
//! use depsummary::parser::{extract_names, manifest_path, parse_file};
//!
//! let path = manifest_path("APP");
//! let pkg = parse_file(&path).unwrap();
//! let names = extract_names(&pkg);
//!
//! println!("Found {} production dependencies", names.deps.len());
//! ```

pub mod package_json;
pub mod types;

// Re-export commonly used types for convenience
pub use package_json::{
    extract_names, manifest_path, parse_file, parse_str, ManifestError, ManifestResult,
    DEFAULT_APP_DIR, MANIFEST_FILE,
};

pub use types::{DependencyMap, DependencyNames, PackageJson};
