//! Build target descriptors handed to the dependency graph

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::label::split_label;

/// A deferred file selection, expanded against the filesystem downstream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glob {
    pub patterns: Vec<String>,
    pub excludes: Vec<String>,
}

impl Glob {
    pub fn new(patterns: Vec<String>, excludes: Vec<String>) -> Self {
        Self { patterns, excludes }
    }
}

/// Explicit files and globs declared by `srcs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sources {
    pub files: Vec<String>,
    pub globs: Vec<Glob>,
}

impl Sources {
    pub fn new(files: Vec<String>, globs: Vec<Glob>) -> Self {
        Self { files, globs }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.globs.is_empty()
    }

    /// Append another set, files after files and globs after globs
    pub fn extend(&mut self, other: Sources) {
        self.files.extend(other.files);
        self.globs.extend(other.globs);
    }
}

/// A named, labeled unit of sources and dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTarget {
    /// Target name (e.g., "lib")
    pub name: String,
    /// Full label (e.g., "//some/project:lib")
    pub target: String,
    /// Resolved dependency labels, in source order
    pub dependencies: Vec<String>,
    pub sources: Sources,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_module: Option<String>,
}

impl BuildTarget {
    /// The project path embedded in the label
    pub fn package(&self) -> &str {
        split_label(&self.target)
            .map(|(package, _)| package)
            .unwrap_or_default()
    }

    /// Directory the sources are resolved against
    pub fn source_directory(&self, root: &Path) -> PathBuf {
        let package = self.package();
        if package.is_empty() {
            root.to_path_buf()
        } else {
            root.join(package)
        }
    }
}
