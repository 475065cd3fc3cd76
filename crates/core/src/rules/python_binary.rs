//! Handler for python_binary rules

use std::path::Path;

use super::{RuleParser, parse_python_rule};
use crate::ast::Call;
use crate::error::Result;
use crate::target::BuildTarget;

/// Handler for python_binary rules
pub struct PythonBinaryParser;

impl RuleParser for PythonBinaryParser {
    fn rule_kind(&self) -> &str {
        "python_binary"
    }

    fn parse(&self, call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget> {
        parse_python_rule(self.rule_kind(), call, root, project_path)
    }
}

/// Parse a `python_binary(...)` call
pub fn parse_python_binary(call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget> {
    PythonBinaryParser.parse(call, root, project_path)
}
