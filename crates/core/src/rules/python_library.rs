//! Handler for python_library rules

use std::path::Path;

use super::{RuleParser, parse_python_rule};
use crate::ast::Call;
use crate::error::Result;
use crate::target::BuildTarget;

/// Handler for python_library rules
pub struct PythonLibraryParser;

impl RuleParser for PythonLibraryParser {
    fn rule_kind(&self) -> &str {
        "python_library"
    }

    fn parse(&self, call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget> {
        parse_python_rule(self.rule_kind(), call, root, project_path)
    }
}

/// Parse a `python_library(...)` call
pub fn parse_python_library(call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget> {
    PythonLibraryParser.parse(call, root, project_path)
}
