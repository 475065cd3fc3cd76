//! Reduce argument expressions to the value shapes rules understand

use crate::ast::{BinOp, Call, Expr};
use crate::error::{Error, Result};
use crate::target::{Glob, Sources};

/// Result of evaluating an argument expression
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    StringList(Vec<String>),
    Glob(Glob),
    /// Files and globs merged through `+`
    FilesAndGlobs(Sources),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "a string",
            Value::StringList(_) => "a list",
            Value::Glob(_) => "a glob",
            Value::FilesAndGlobs(_) => "a source list",
        }
    }

    /// View as sources; a lone string is not a source list
    pub fn into_sources(self) -> Option<Sources> {
        match self {
            Value::String(_) => None,
            Value::StringList(files) => Some(Sources::new(files, Vec::new())),
            Value::Glob(glob) => Some(Sources::new(Vec::new(), vec![glob])),
            Value::FilesAndGlobs(sources) => Some(sources),
        }
    }
}

/// Evaluate an argument expression
pub fn evaluate(expr: &Expr) -> Result<Value> {
    match expr {
        Expr::Str(value) => Ok(Value::String(value.clone())),
        Expr::List(items) => items
            .iter()
            .map(evaluate_string)
            .collect::<Result<Vec<_>>>()
            .map(Value::StringList),
        Expr::Call(call) if call.function_name() == Some("glob") => {
            evaluate_glob(call).map(Value::Glob)
        }
        Expr::BinaryOp {
            op: BinOp::Add,
            left,
            right,
        } => combine(evaluate(left)?, evaluate(right)?),
        other => Err(Error::unsupported(other.describe())),
    }
}

/// Evaluate an expression that must reduce to a single string
pub fn evaluate_string(expr: &Expr) -> Result<String> {
    match evaluate(expr)? {
        Value::String(value) => Ok(value),
        other => Err(Error::unsupported(format!(
            "{} evaluates to {}, expected a string",
            expr.describe(),
            other.kind()
        ))),
    }
}

/// Evaluate an expression that must reduce to a list of strings
pub fn evaluate_string_list(expr: &Expr) -> Result<Vec<String>> {
    match evaluate(expr)? {
        Value::StringList(items) => Ok(items),
        other => Err(Error::unsupported(format!(
            "{} evaluates to {}, expected a list of strings",
            expr.describe(),
            other.kind()
        ))),
    }
}

/// Evaluate a `srcs` expression into files and globs
pub fn evaluate_sources(expr: &Expr) -> Result<Sources> {
    let value = evaluate(expr)?;
    let kind = value.kind();
    value.into_sources().ok_or_else(|| {
        Error::unsupported(format!(
            "{} evaluates to {kind}, expected a list or glob",
            expr.describe()
        ))
    })
}

fn evaluate_glob(call: &Call) -> Result<Glob> {
    let patterns = match call.args.as_slice() {
        [patterns] => evaluate_string_list(patterns)?,
        [] => return Err(Error::unsupported("`glob` call without patterns")),
        _ => {
            return Err(Error::unsupported(
                "`glob` call with more than one positional argument",
            ));
        }
    };

    let mut excludes = None;
    for keyword in &call.keywords {
        match keyword.name.as_str() {
            "exclude" if excludes.is_some() => {
                return Err(Error::DuplicateArgument(keyword.name.clone()));
            }
            "exclude" => excludes = Some(evaluate_string_list(&keyword.value)?),
            other => {
                return Err(Error::unsupported(format!("`{other}` argument to `glob`")));
            }
        }
    }

    Ok(Glob::new(patterns, excludes.unwrap_or_default()))
}

/// Pairwise `+`: strings join, lists concatenate, lists and globs merge
/// into files and globs regardless of operand order.
fn combine(left: Value, right: Value) -> Result<Value> {
    match (left, right) {
        (Value::String(mut left), Value::String(right)) => {
            left.push_str(&right);
            Ok(Value::String(left))
        }
        (Value::StringList(mut left), Value::StringList(right)) => {
            left.extend(right);
            Ok(Value::StringList(left))
        }
        (left, right) => {
            let description = format!("`+` between {} and {}", left.kind(), right.kind());
            match (left.into_sources(), right.into_sources()) {
                (Some(mut sources), Some(other)) => {
                    sources.extend(other);
                    Ok(Value::FilesAndGlobs(sources))
                }
                _ => Err(Error::unsupported(description)),
            }
        }
    }
}
