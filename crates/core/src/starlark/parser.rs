//! Starlark parser using tree-sitter-starlark

use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

use super::lower::lower_call;
use crate::ast::Call;
use crate::error::{Error, Result};

/// Parser for BUCK/TARGETS files
pub struct StarlarkParser {
    parser: Parser,
}

impl StarlarkParser {
    /// Create a new Starlark parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_starlark::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| Error::ParseError(format!("Failed to set Starlark language: {}", e)))?;

        Ok(Self { parser })
    }

    /// Parse build file content into an AST
    pub fn parse_build_file(&mut self, content: &str) -> Result<StarlarkAst> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| Error::ParseError("Failed to parse build file".to_string()))?;

        if let Some(node) = first_error(tree.root_node()) {
            return Err(Error::ParseError(format!(
                "Build file contains a syntax error at line {}",
                node.start_position().row + 1
            )));
        }

        Ok(StarlarkAst {
            tree,
            source: content.to_string(),
        })
    }
}

/// Parsed Starlark AST
pub struct StarlarkAst {
    pub tree: Tree,
    pub source: String,
}

impl StarlarkAst {
    /// Get the root node of the AST
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Top-level call statements, in source order
    pub fn calls(&self) -> Vec<Call> {
        let root = self.root();
        let mut cursor = root.walk();
        let mut calls = Vec::new();

        for statement in root.named_children(&mut cursor) {
            let line = statement.start_position().row + 1;
            match statement.kind() {
                "expression_statement" => {
                    let mut inner = statement.walk();
                    let expression = statement
                        .named_children(&mut inner)
                        .find(|node| node.kind() != "comment");
                    match expression {
                        Some(node) if node.kind() == "call" => {
                            calls.push(lower_call(node, self.source.as_bytes()));
                        }
                        Some(node) => debug!("Skipping {} statement at line {}", node.kind(), line),
                        None => {}
                    }
                }
                "comment" => {}
                kind => debug!("Skipping {} at line {}", kind, line),
            }
        }

        calls
    }
}

/// Parse `source` and return its first top-level call
pub fn parse_call(source: &str) -> Result<Call> {
    let ast = StarlarkParser::new()?.parse_build_file(source)?;
    ast.calls()
        .into_iter()
        .next()
        .ok_or_else(|| Error::ParseError("No call expression found".to_string()))
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error).or(Some(node))
}
