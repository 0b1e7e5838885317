//! depsummary - prints the dependencies declared in a package.json
//!
//! This crate locates an application's package.json, extracts the names
//! under `dependencies` and `devDependencies`, and renders a sorted JSON
//! summary of them.

pub mod parser;
pub mod report;
