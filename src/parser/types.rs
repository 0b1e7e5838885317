//! Shared types for dependency parsing.
//!
//! This module defines the typed view of a package.json manifest and the
//! projection of its dependency names.

use serde::de::{self, Deserialize, Deserializer, Unexpected};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// A dependency mapping: package name to raw version specifier.
pub type DependencyMap = HashMap<String, Value>;

/// Represents the fields of a package.json file that matter for a summary.
///
/// Every other field of the manifest is ignored. Version specifiers are kept
/// as raw JSON values; they are never validated or emitted. A field holding
/// `null`, `false`, `0` or `""` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct PackageJson {
    /// Production dependencies required at runtime.
    #[serde(default, deserialize_with = "dependencies_field")]
    pub dependencies: Option<DependencyMap>,

    /// Development-only dependencies (testing, building, etc.).
    #[serde(
        rename = "devDependencies",
        default,
        deserialize_with = "dev_dependencies_field"
    )]
    pub dev_dependencies: Option<DependencyMap>,
}

impl PackageJson {
    /// Builds a manifest from an already parsed JSON document.
    ///
    /// Only a JSON object is a manifest; arrays and scalars are rejected
    /// rather than read positionally.
    ///
    /// ```
    /// use depsummary::parser::types::PackageJson;
    /// use serde_json::json;
    ///
    /// let pkg = PackageJson::from_value(json!({"dependencies": {"react": "^18.0.0"}})).unwrap();
    /// assert!(pkg.dev_dependencies.is_none());
    ///
    /// assert!(PackageJson::from_value(json!([{"react": "^18.0.0"}])).is_err());
    /// ```
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(de::Error::invalid_type(
                unexpected(&value),
                &"a package.json object",
            ));
        }
        serde_json::from_value(value)
    }
}

fn dependencies_field<'de, D>(deserializer: D) -> Result<Option<DependencyMap>, D::Error>
where
    D: Deserializer<'de>,
{
    mapping_field("dependencies", deserializer)
}

fn dev_dependencies_field<'de, D>(deserializer: D) -> Result<Option<DependencyMap>, D::Error>
where
    D: Deserializer<'de>,
{
    mapping_field("devDependencies", deserializer)
}

fn mapping_field<'de, D>(field: &str, deserializer: D) -> Result<Option<DependencyMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        if !value.is_null() {
            warn!(field, value = %value, "treating falsy dependency field as empty");
        }
        return Ok(None);
    }
    match value {
        Value::Object(_) => DependencyMap::deserialize(value)
            .map(Some)
            .map_err(de::Error::custom),
        other => Err(de::Error::invalid_type(
            unexpected(&other),
            &"a map of dependency names",
        )),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => n
            .as_f64()
            .map_or(Unexpected::Other("number"), Unexpected::Float),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Dependency names projected out of a manifest, in no particular order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyNames {
    /// Keys of the `dependencies` mapping.
    pub deps: Vec<String>,

    /// Keys of the `devDependencies` mapping.
    pub dev_deps: Vec<String>,
}
