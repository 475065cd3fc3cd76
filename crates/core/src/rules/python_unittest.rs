//! Handler for python_unittest rules

use std::path::Path;

use super::{RuleParser, parse_python_rule};
use crate::ast::Call;
use crate::error::Result;
use crate::target::BuildTarget;

/// Handler for python_unittest rules
pub struct PythonUnittestParser;

impl RuleParser for PythonUnittestParser {
    fn rule_kind(&self) -> &str {
        "python_unittest"
    }

    fn parse(&self, call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget> {
        parse_python_rule(self.rule_kind(), call, root, project_path)
    }
}

/// Parse a `python_unittest(...)` call
pub fn parse_python_unittest(call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget> {
    PythonUnittestParser.parse(call, root, project_path)
}
