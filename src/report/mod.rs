//! Summary rendering.
//!
//! Turns extracted dependency names into the sorted JSON summary printed on
//! standard output.

use serde::Serialize;
use std::io::{self, Write};

use crate::parser::DependencyNames;

/// Sorted dependency summary for one application directory.
///
/// Counts are derived from the lists at construction and cannot be set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestSummary {
    #[serde(rename = "appDir")]
    app_dir: String,
    deps_count: usize,
    #[serde(rename = "devDeps_count")]
    dev_deps_count: usize,
    deps: Vec<String>,
    #[serde(rename = "devDeps")]
    dev_deps: Vec<String>,
}

impl ManifestSummary {
    /// Builds a summary, sorting both name lists by code point.
    pub fn new(app_dir: impl Into<String>, names: DependencyNames) -> Self {
        let DependencyNames {
            mut deps,
            mut dev_deps,
        } = names;
        deps.sort();
        dev_deps.sort();

        Self {
            app_dir: app_dir.into(),
            deps_count: deps.len(),
            dev_deps_count: dev_deps.len(),
            deps,
            dev_deps,
        }
    }

    /// Application directory as given on the command line.
    pub fn app_dir(&self) -> &str {
        &self.app_dir
    }

    /// Sorted names from `dependencies`.
    pub fn deps(&self) -> &[String] {
        &self.deps
    }

    /// Sorted names from `devDependencies`.
    pub fn dev_deps(&self) -> &[String] {
        &self.dev_deps
    }

    /// Number of production dependencies.
    pub fn deps_count(&self) -> usize {
        self.deps_count
    }

    /// Number of development dependencies.
    pub fn dev_deps_count(&self) -> usize {
        self.dev_deps_count
    }
}

/// Writes `summary` as 2-space indented JSON followed by a newline.
pub fn write_summary<W: Write>(summary: &ManifestSummary, writer: &mut W) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    writeln!(writer, "{}", json)
}

/// Renders the summary for the given names to a string, trailing newline included.
pub fn render(app_dir: &str, deps: Vec<String>, dev_deps: Vec<String>) -> io::Result<String> {
    let summary = ManifestSummary::new(app_dir, DependencyNames { deps, dev_deps });

    let mut buffer = Vec::new();
    write_summary(&summary, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
