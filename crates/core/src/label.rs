//! Dependency label resolution

use crate::error::{Error, Result};

/// Fully-qualified label for a target declared in `project_path`
pub fn target_label(project_path: &str, name: &str) -> String {
    format!("//{project_path}:{name}")
}

/// Resolve a raw dependency string against the declaring project.
///
/// `:name` is relative to `project_path`; `//path:name` is already absolute
/// and returned unchanged. Anything else is rejected.
pub fn resolve_dependency(raw: &str, project_path: &str) -> Result<String> {
    if raw.starts_with(':') {
        Ok(format!("//{project_path}{raw}"))
    } else if raw.starts_with("//") {
        Ok(raw.to_string())
    } else {
        Err(Error::InvalidDependencyLabel(raw.to_string()))
    }
}

/// Split `//package:name` into its package and name
pub fn split_label(label: &str) -> Option<(&str, &str)> {
    label.strip_prefix("//")?.rsplit_once(':')
}
