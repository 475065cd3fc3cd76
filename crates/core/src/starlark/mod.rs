//! Build file front end using tree-sitter-starlark

mod lower;
mod parser;

pub use parser::{StarlarkAst, StarlarkParser, parse_call};
