//! Parser for rule kinds without a dedicated handler

use std::path::Path;
use tracing::debug;

use super::{RuleParser, check_unique_keywords, extract_dependencies, extract_name};
use crate::ast::Call;
use crate::error::Result;
use crate::label::target_label;
use crate::target::{BuildTarget, Sources};

/// Extracts only `name` and `deps`, so foreign rule kinds still get a graph
/// node and edges. Every other keyword is accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackParser {
    rule_kind: String,
}

/// Create a fallback parser for `rule_kind`
pub fn make_fallback_parser(rule_kind: &str) -> FallbackParser {
    debug!("Creating fallback parser for rule kind `{}`", rule_kind);
    FallbackParser {
        rule_kind: rule_kind.to_string(),
    }
}

impl RuleParser for FallbackParser {
    fn rule_kind(&self) -> &str {
        &self.rule_kind
    }

    fn parse(&self, call: &Call, _root: &Path, project_path: &str) -> Result<BuildTarget> {
        check_unique_keywords(
            call.keywords
                .iter()
                .filter(|keyword| matches!(keyword.name.as_str(), "name" | "deps")),
        )?;

        let name = extract_name(call)?;
        let dependencies = extract_dependencies(call, project_path)?;

        debug!(
            "Parsed {} `{}` in {} with fallback parser",
            self.rule_kind, name, project_path
        );

        Ok(BuildTarget {
            target: target_label(project_path, &name),
            name,
            dependencies,
            sources: Sources::default(),
            base_module: None,
        })
    }
}
