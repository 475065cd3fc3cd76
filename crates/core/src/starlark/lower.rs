//! Lower tree-sitter nodes into the owned expression tree

use tree_sitter::Node;

use crate::ast::{BinOp, Call, Expr, Keyword};

/// Lower a call node
pub(crate) fn lower_call(node: Node<'_>, source: &[u8]) -> Call {
    let function = match node.child_by_field_name("function") {
        Some(function) => lower_expression(function, source),
        None => Expr::Other("missing_callee".to_string()),
    };

    let mut args = Vec::new();
    let mut keywords = Vec::new();

    if let Some(arguments) = node.child_by_field_name("arguments") {
        let mut cursor = arguments.walk();
        for child in arguments.named_children(&mut cursor) {
            match child.kind() {
                "comment" => {}
                "keyword_argument" => {
                    let name = child.child_by_field_name("name");
                    let value = child.child_by_field_name("value");
                    if let (Some(name), Some(value)) = (name, value) {
                        keywords.push(Keyword {
                            name: node_text(&name, source).to_string(),
                            value: lower_expression(value, source),
                        });
                    }
                }
                _ => args.push(lower_expression(child, source)),
            }
        }
    }

    Call {
        function: Box::new(function),
        args,
        keywords,
    }
}

/// Lower an expression node. Node kinds without a counterpart become
/// `Expr::Other` and are rejected later by evaluation.
pub(crate) fn lower_expression(node: Node<'_>, source: &[u8]) -> Expr {
    match node.kind() {
        "string" => match unquote(node_text(&node, source)) {
            Some(value) => Expr::Str(value),
            None => Expr::Other("invalid_string_escape".to_string()),
        },
        "integer" | "float" => Expr::Number(node_text(&node, source).to_string()),
        "unary_operator" => {
            let sign = node.child_by_field_name("operator").map(|op| op.kind());
            let argument = node.child_by_field_name("argument");
            match (sign, argument) {
                (Some("-" | "+"), Some(argument))
                    if matches!(argument.kind(), "integer" | "float") =>
                {
                    Expr::Number(node_text(&node, source).to_string())
                }
                _ => Expr::Other(node.kind().to_string()),
            }
        }
        "true" => Expr::Bool(true),
        "false" => Expr::Bool(false),
        "none" => Expr::None,
        "identifier" => Expr::Name(node_text(&node, source).to_string()),
        "list" => {
            let mut cursor = node.walk();
            let items = node
                .named_children(&mut cursor)
                .filter(|child| child.kind() != "comment")
                .map(|child| lower_expression(child, source))
                .collect();
            Expr::List(items)
        }
        "dictionary" => {
            let mut cursor = node.walk();
            let pairs = node
                .named_children(&mut cursor)
                .filter(|child| child.kind() == "pair")
                .filter_map(|pair| {
                    let key = pair.child_by_field_name("key")?;
                    let value = pair.child_by_field_name("value")?;
                    Some((lower_expression(key, source), lower_expression(value, source)))
                })
                .collect();
            Expr::Dict(pairs)
        }
        "binary_operator" => {
            let (Some(left), Some(right)) = (
                node.child_by_field_name("left"),
                node.child_by_field_name("right"),
            ) else {
                return Expr::Other(node.kind().to_string());
            };
            let op = match node.child_by_field_name("operator").map(|op| op.kind()) {
                Some("+") => BinOp::Add,
                Some(symbol) => BinOp::Other(symbol.to_string()),
                None => BinOp::Other("?".to_string()),
            };
            Expr::BinaryOp {
                op,
                left: Box::new(lower_expression(left, source)),
                right: Box::new(lower_expression(right, source)),
            }
        }
        "parenthesized_expression" => {
            let mut cursor = node.walk();
            let inner = node
                .named_children(&mut cursor)
                .find(|child| child.kind() != "comment");
            match inner {
                Some(inner) => lower_expression(inner, source),
                None => Expr::Other(node.kind().to_string()),
            }
        }
        "call" => Expr::Call(lower_call(node, source)),
        kind => Expr::Other(kind.to_string()),
    }
}

fn node_text<'a>(node: &Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Strip string prefix and quotes, decoding escapes unless raw.
/// Returns `None` for an escape that does not encode a character.
fn unquote(text: &str) -> Option<String> {
    let body = text.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let prefix = &text[..text.len() - body.len()];
    let raw = prefix.contains(['r', 'R']);

    let quote = if body.starts_with("\"\"\"") || body.starts_with("'''") {
        &body[..3]
    } else if body.starts_with(['"', '\'']) {
        &body[..1]
    } else {
        ""
    };

    let inner = body
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(body);

    if raw {
        Some(inner.to_string())
    } else {
        unescape(inner)
    }
}

fn unescape(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('f') => out.push('\x0c'),
            Some('v') => out.push('\x0b'),
            Some('\n') => {}
            Some(escaped @ ('\\' | '\'' | '"')) => out.push(escaped),
            Some('x') => out.push(hex_escape(&mut chars, 2)?),
            Some('u') => out.push(hex_escape(&mut chars, 4)?),
            Some('U') => out.push(hex_escape(&mut chars, 8)?),
            Some(first @ '0'..='7') => {
                let mut code = first.to_digit(8)?;
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(code)?);
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Some(out)
}

/// Exactly `digits` hex digits naming a Unicode scalar value
fn hex_escape(chars: &mut impl Iterator<Item = char>, digits: usize) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}
