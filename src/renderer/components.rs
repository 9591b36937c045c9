//! Shared rendering helpers: operator tables, indentation, docstring
//! splitting and the parameter type table.

use rustpython_parser::ast;

use crate::renderer::traits::{Render, RenderContext};

/// Reverse of dedent: indent every line after the first by `depth`
/// levels of four spaces.
pub fn indent(text: &str, depth: usize) -> String {
    let spacing = "    ".repeat(depth);
    text.replace('\n', &format!("\n{}", spacing))
}

/// Render a statement list, one statement per line.
pub fn render_body(nodes: &[ast::Stmt], context: &RenderContext) -> String {
    nodes
        .iter()
        .map(|node| node.render(context))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop the enclosing parens a rendered tuple carries, for positions
/// where Go wants a bare comma-separated list (range targets, returns).
pub fn strip_tuple_parens(text: &str) -> &str {
    text.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(text)
}

/// Split a leading docstring off a definition body: when the first
/// statement is a bare string literal, it becomes `// ` comment lines
/// (with a leading newline, matching the declaration framing) and is
/// excluded from the remaining statements.
pub fn split_docstring(body: &[ast::Stmt]) -> (String, &[ast::Stmt]) {
    if let Some(ast::Stmt::Expr(first)) = body.first() {
        if let ast::Expr::Constant(constant) = first.value.as_ref() {
            if let ast::Constant::Str(text) = &constant.value {
                let comment = format!("\n// {}", text.trim().replace('\n', "\n// "));
                return (comment, &body[1..]);
            }
        }
    }
    (String::new(), body)
}

/// Map a rendered parameter annotation to its Go spelling.
pub fn parameter_type(rendered: &str) -> String {
    match rendered {
        "str" => "string".to_string(),
        other => other.to_string(),
    }
}

/// Placeholder for every parameter without an annotation.
pub const DYNAMIC_TYPE: &str = "python.Type";

pub fn binary_op(op: &ast::Operator) -> &'static str {
    match op {
        ast::Operator::Add => "+",
        ast::Operator::Sub => "-",
        ast::Operator::Mult => "*",
        ast::Operator::MatMult => "@",
        ast::Operator::Div => "/",
        ast::Operator::Mod => "%",
        ast::Operator::Pow => "**",
        ast::Operator::LShift => "<<",
        ast::Operator::RShift => ">>",
        ast::Operator::BitOr => "|",
        ast::Operator::BitXor => "^",
        ast::Operator::BitAnd => "&",
        ast::Operator::FloorDiv => "//",
    }
}

pub fn unary_op(op: &ast::UnaryOp) -> &'static str {
    match op {
        ast::UnaryOp::Invert => "~",
        ast::UnaryOp::Not => "!",
        ast::UnaryOp::UAdd => "+",
        ast::UnaryOp::USub => "-",
    }
}

pub fn bool_op(op: &ast::BoolOp) -> &'static str {
    match op {
        ast::BoolOp::And => "&&",
        ast::BoolOp::Or => "||",
    }
}

// `is` / `in` and friends have no Go operator; the Python spelling is
// kept as-is for the reader to resolve.
pub fn compare_op(op: &ast::CmpOp) -> &'static str {
    match op {
        ast::CmpOp::Eq => "==",
        ast::CmpOp::NotEq => "!=",
        ast::CmpOp::Lt => "<",
        ast::CmpOp::LtE => "<=",
        ast::CmpOp::Gt => ">",
        ast::CmpOp::GtE => ">=",
        ast::CmpOp::Is => "is",
        ast::CmpOp::IsNot => "is not",
        ast::CmpOp::In => "in",
        ast::CmpOp::NotIn => "not in",
    }
}
