//! Rule parsers for the recognized rule kinds and the fallback

mod fallback;
mod python_binary;
mod python_library;
mod python_unittest;

pub use fallback::{FallbackParser, make_fallback_parser};
pub use python_binary::{PythonBinaryParser, parse_python_binary};
pub use python_library::{PythonLibraryParser, parse_python_library};
pub use python_unittest::{PythonUnittestParser, parse_python_unittest};

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::ast::{Call, Keyword};
use crate::error::{Error, Result};
use crate::eval::{Value, evaluate, evaluate_sources, evaluate_string, evaluate_string_list};
use crate::label::{resolve_dependency, target_label};
use crate::target::{BuildTarget, Sources};

/// Turns one rule call into a build target
pub trait RuleParser: Send + Sync {
    /// The identifier this parser is registered under
    fn rule_kind(&self) -> &str;

    /// Parse a call declared in the build file at `project_path` under `root`
    fn parse(&self, call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget>;
}

/// Shared extraction for the python rule kinds
pub(crate) fn parse_python_rule(
    rule_kind: &str,
    call: &Call,
    root: &Path,
    project_path: &str,
) -> Result<BuildTarget> {
    check_unique_keywords(&call.keywords)?;

    let name = extract_name(call)?;
    let dependencies = extract_dependencies(call, project_path)?;
    let sources = match call.keyword("srcs") {
        Some(srcs) => evaluate_sources(srcs)?,
        None => Sources::default(),
    };
    let base_module = call.keyword("base_module").map(evaluate_string).transpose()?;

    debug!(
        "Parsed {} `{}` in {} ({} deps, {} files, {} globs, root {:?})",
        rule_kind,
        name,
        project_path,
        dependencies.len(),
        sources.files.len(),
        sources.globs.len(),
        root
    );

    Ok(BuildTarget {
        target: target_label(project_path, &name),
        name,
        dependencies,
        sources,
        base_module,
    })
}

/// The `name` keyword, which must be a string
pub(crate) fn extract_name(call: &Call) -> Result<String> {
    let expr = call
        .keyword("name")
        .ok_or_else(|| Error::MissingRequiredField("name".to_string()))?;

    if expr.is_non_string_literal() {
        return Err(Error::InvalidTargetName(expr.describe()));
    }

    match evaluate(expr)? {
        Value::String(name) => Ok(name),
        _ => Err(Error::InvalidTargetName(expr.describe())),
    }
}

/// The `deps` keyword, each entry resolved to a full label
pub(crate) fn extract_dependencies(call: &Call, project_path: &str) -> Result<Vec<String>> {
    let Some(deps) = call.keyword("deps") else {
        return Ok(Vec::new());
    };

    evaluate_string_list(deps)?
        .iter()
        .map(|raw| resolve_dependency(raw, project_path))
        .collect()
}

pub(crate) fn check_unique_keywords<'a>(
    keywords: impl IntoIterator<Item = &'a Keyword>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for keyword in keywords {
        if !seen.insert(keyword.name.as_str()) {
            return Err(Error::DuplicateArgument(keyword.name.clone()));
        }
    }
    Ok(())
}
