//! buildrules - turn build-file rule calls into build target descriptors
//!
//! This crate provides functionality to:
//! - Evaluate rule arguments (strings, lists, `glob()` calls and `+` chains)
//! - Parse `python_binary`, `python_library` and `python_unittest` calls, with a
//!   fallback for every other rule kind
//! - Load BUCK/TARGETS files through a tree-sitter Starlark front end
pub mod ast;
pub mod error;
pub mod eval;
pub mod label;
pub mod loader;
pub mod registry;
pub mod rules;
pub mod starlark;
pub mod target;

// Re-export commonly used types and functions
pub use ast::{BinOp, Call, Expr, Keyword};
pub use error::{Error, Result};
pub use eval::{Value, evaluate};
pub use label::resolve_dependency;
pub use loader::{BuildFile, BuildFileLoader, Config};
pub use registry::{Dispatch, RuleRegistry};
pub use rules::{
    FallbackParser, RuleParser, make_fallback_parser, parse_python_binary, parse_python_library,
    parse_python_unittest,
};
pub use starlark::{StarlarkParser, parse_call};
pub use target::{BuildTarget, Glob, Sources};
