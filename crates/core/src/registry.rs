//! Dispatch from rule kind to rule parser

use std::path::Path;
use tracing::trace;

use crate::ast::Call;
use crate::error::{Error, Result};
use crate::rules::{
    FallbackParser, PythonBinaryParser, PythonLibraryParser, PythonUnittestParser, RuleParser,
    make_fallback_parser,
};
use crate::target::BuildTarget;

/// The parser selected for a rule kind
pub enum Dispatch<'a> {
    Registered(&'a dyn RuleParser),
    Fallback(FallbackParser),
}

impl RuleParser for Dispatch<'_> {
    fn rule_kind(&self) -> &str {
        match self {
            Dispatch::Registered(parser) => parser.rule_kind(),
            Dispatch::Fallback(parser) => parser.rule_kind(),
        }
    }

    fn parse(&self, call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget> {
        match self {
            Dispatch::Registered(parser) => parser.parse(call, root, project_path),
            Dispatch::Fallback(parser) => parser.parse(call, root, project_path),
        }
    }
}

/// Registry of rule parsers, fixed at construction.
///
/// Kinds without a registered parser are never rejected; they are routed
/// through a fallback parser created on first lookup.
pub struct RuleRegistry {
    parsers: Vec<Box<dyn RuleParser>>,
}

impl RuleRegistry {
    /// Create a registry with the python rule parsers
    pub fn new() -> Self {
        let parsers: Vec<Box<dyn RuleParser>> = vec![
            Box::new(PythonBinaryParser),
            Box::new(PythonLibraryParser),
            Box::new(PythonUnittestParser),
        ];

        Self { parsers }
    }

    /// Whether `rule_kind` has a dedicated parser
    pub fn is_registered(&self, rule_kind: &str) -> bool {
        self.parsers
            .iter()
            .any(|parser| parser.rule_kind() == rule_kind)
    }

    /// Look up the parser for `rule_kind`
    pub fn parser_for(&self, rule_kind: &str) -> Dispatch<'_> {
        match self
            .parsers
            .iter()
            .find(|parser| parser.rule_kind() == rule_kind)
        {
            Some(parser) => {
                trace!("Dispatching `{}` to registered parser", rule_kind);
                Dispatch::Registered(parser.as_ref())
            }
            None => Dispatch::Fallback(make_fallback_parser(rule_kind)),
        }
    }

    /// Parse a rule call, dispatching on the identifier being called
    pub fn parse_call(&self, call: &Call, root: &Path, project_path: &str) -> Result<BuildTarget> {
        let rule_kind = call.function_name().ok_or_else(|| {
            Error::unsupported(format!("{} as rule kind", call.function.describe()))
        })?;

        self.parser_for(rule_kind).parse(call, root, project_path)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
