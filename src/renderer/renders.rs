//! Per-kind renderers. Dispatch is one closed match per AST enum; any
//! kind without a renderer falls through to an inert comment fragment
//! naming the kind and its fields, so rendering is total over the tree.

use rustpython_parser::ast;

use crate::namer;
use crate::renderer::components::*;
use crate::renderer::traits::{Render, RenderContext, TypeContext};

impl Render for ast::Stmt {
    fn render(&self, context: &RenderContext) -> String {
        match self {
            ast::Stmt::Expr(node) => node.value.render(context),
            ast::Stmt::Assign(node) => render_assign(node, context),
            ast::Stmt::AugAssign(node) => render_aug_assign(node, context),
            ast::Stmt::Return(node) => render_return(node, context),
            ast::Stmt::If(node) => render_if(node, context),
            ast::Stmt::For(node) => render_for(node, context),
            ast::Stmt::FunctionDef(node) => render_function_def(node, context),
            ast::Stmt::ClassDef(node) => render_class_def(node),
            ast::Stmt::Assert(node) => format!("// assert {}", node.test.render(context)),
            ast::Stmt::Break(_) => "break".to_string(),
            ast::Stmt::Continue(_) => "continue".to_string(),
            other => {
                let (kind, fields) = stmt_meta(other);
                unknown(kind, fields)
            }
        }
    }
}

impl Render for ast::Expr {
    fn render(&self, context: &RenderContext) -> String {
        match self {
            ast::Expr::Name(node) => render_name(node, context),
            ast::Expr::Constant(node) => render_constant(node),
            ast::Expr::Attribute(node) => {
                format!("{}.{}", node.value.render(context), node.attr.as_str())
            }
            ast::Expr::BinOp(node) => format!(
                "{} {} {}",
                node.left.render(context),
                binary_op(&node.op),
                node.right.render(context)
            ),
            ast::Expr::UnaryOp(node) => {
                format!("{}{}", unary_op(&node.op), node.operand.render(context))
            }
            ast::Expr::BoolOp(node) => {
                let separator = format!(" {} ", bool_op(&node.op));
                node.values
                    .iter()
                    .map(|value| value.render(context))
                    .collect::<Vec<_>>()
                    .join(&separator)
            }
            ast::Expr::Compare(node) => render_compare(node, context),
            ast::Expr::Call(node) => render_call(node, context),
            ast::Expr::List(node) => format!("[{}]", join_rendered(&node.elts, context)),
            ast::Expr::Tuple(node) => format!("({})", join_rendered(&node.elts, context)),
            ast::Expr::Dict(node) => render_dict(node, context),
            ast::Expr::Lambda(node) => format!(
                "func({}) {{ return {} }}",
                node.args.render(context),
                node.body.render(context)
            ),
            ast::Expr::ListComp(node) => format!(
                "[{}]",
                render_generator(&node.elt, &node.generators, context)
            ),
            ast::Expr::GeneratorExp(node) => {
                render_generator(&node.elt, &node.generators, context)
            }
            ast::Expr::Subscript(node) => format!(
                "{}[{}]",
                node.value.render(context),
                node.slice.render(context)
            ),
            ast::Expr::Slice(node) => render_slice(node, context),
            ast::Expr::Yield(node) => match &node.value {
                Some(value) => format!("// yield {}", value.render(context)),
                None => "// yield".to_string(),
            },
            other => {
                let (kind, fields) = expr_meta(other);
                unknown(kind, fields)
            }
        }
    }
}

impl Render for ast::Keyword {
    fn render(&self, context: &RenderContext) -> String {
        let value = self.value.render(context);
        match &self.arg {
            Some(key) => format!("{}={}", key.as_str(), value),
            // a nameless keyword is `**kwargs`; only the value survives
            None => value,
        }
    }
}

impl Render for ast::Arguments {
    fn render(&self, context: &RenderContext) -> String {
        self.args
            .iter()
            .map(|arg| arg.render(context))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Render for ast::ArgWithDefault {
    fn render(&self, context: &RenderContext) -> String {
        let parameter = &self.def;
        let ty = match &parameter.annotation {
            Some(annotation) => parameter_type(&annotation.render(context)),
            None => DYNAMIC_TYPE.to_string(),
        };
        format!("{} {}", namer::to_lower_camel(parameter.arg.as_str()), ty)
    }
}

impl Render for ast::Comprehension {
    fn render(&self, context: &RenderContext) -> String {
        let mut out = String::from(" for ");
        let target = self.target.render(context);
        if matches!(self.target, ast::Expr::Tuple(_)) {
            out.push_str(strip_tuple_parens(&target));
        } else {
            out.push_str(&target);
        }
        out.push_str(" in ");
        out.push_str(&self.iter.render(context));
        for clause in &self.ifs {
            out.push_str(" if ");
            out.push_str(&clause.render(context));
        }
        out
    }
}

fn render_name(node: &ast::ExprName, context: &RenderContext) -> String {
    if let Some(ty) = context.type_context() {
        if node.id.as_str() == "self" {
            return ty.receiver();
        }
    }
    namer::to_lower_camel(node.id.as_str())
}

fn render_constant(node: &ast::ExprConstant) -> String {
    match &node.value {
        ast::Constant::Str(text) => format!("\"{}\"", text),
        ast::Constant::Int(value) => value.to_string(),
        ast::Constant::Float(value) => value.to_string(),
        ast::Constant::Bool(true) => "true".to_string(),
        ast::Constant::Bool(false) => "false".to_string(),
        // deliberately not `nil`; left for the reader to resolve
        ast::Constant::None => "None".to_string(),
        _ => unknown("Constant", &["value", "kind"]),
    }
}

fn render_assign(node: &ast::StmtAssign, context: &RenderContext) -> String {
    let targets = join_rendered(&node.targets, context);
    let value = node.value.render(context);
    if context.is_module() {
        format!("var {} = {}", targets, value)
    } else {
        format!("{} = {}", targets, value)
    }
}

fn render_aug_assign(node: &ast::StmtAugAssign, context: &RenderContext) -> String {
    format!(
        "{} {}= {}",
        node.target.render(context),
        binary_op(&node.op),
        node.value.render(context)
    )
}

fn render_return(node: &ast::StmtReturn, context: &RenderContext) -> String {
    let Some(value) = &node.value else {
        return "return".to_string();
    };
    let rendered = value.render(context);
    if matches!(value.as_ref(), ast::Expr::Tuple(_)) {
        return format!("return {}", strip_tuple_parens(&rendered));
    }
    format!("return {}", rendered)
}

fn render_compare(node: &ast::ExprCompare, context: &RenderContext) -> String {
    // chained comparisons are a plain textual join; the Go reading does
    // not preserve Python's pairwise short-circuit semantics
    let mut parts = vec![node.left.render(context)];
    for (op, comparator) in node.ops.iter().zip(&node.comparators) {
        parts.push(compare_op(op).to_string());
        parts.push(comparator.render(context));
    }
    parts.join(" ")
}

fn render_call(node: &ast::ExprCall, context: &RenderContext) -> String {
    let func = node.func.render(context);
    let mut args = Vec::new();
    let mut spread = None;
    for arg in &node.args {
        match arg {
            ast::Expr::Starred(starred) if spread.is_none() => {
                spread = Some(format!("*{}", starred.value.render(context)));
            }
            // only the first starred argument is supported
            ast::Expr::Starred(_) => {}
            other => args.push(other.render(context)),
        }
    }
    for keyword in &node.keywords {
        args.push(keyword.render(context));
    }
    if let Some(spread) = spread {
        args.push(spread);
    }
    format!("{}({})", func, args.join(", "))
}

fn render_if(node: &ast::StmtIf, context: &RenderContext) -> String {
    // else branches are not rendered
    format!(
        "if {} {{\n    {}\n}}",
        node.test.render(context),
        indent(&render_body(&node.body, context), 1)
    )
}

fn render_for(node: &ast::StmtFor, context: &RenderContext) -> String {
    let target = node.target.render(context);
    let head = match enumerate_argument(&node.iter, context) {
        Some(iterable) => {
            let target = if matches!(node.target.as_ref(), ast::Expr::Tuple(_)) {
                strip_tuple_parens(&target)
            } else {
                target.as_str()
            };
            format!("{} := range {}", target, iterable)
        }
        None => format!("_, {} := range {}", target, node.iter.render(context)),
    };
    format!(
        "for {} {{\n    {}\n}}",
        head,
        indent(&render_body(&node.body, context), 1)
    )
}

/// When the iterable is a call to `enumerate`, the rendered inner
/// iterable; `None` otherwise.
fn enumerate_argument(iter: &ast::Expr, context: &RenderContext) -> Option<String> {
    let ast::Expr::Call(call) = iter else {
        return None;
    };
    if call.func.render(context) != "enumerate" {
        return None;
    }
    call.args.first().map(|inner| inner.render(context))
}

fn render_function_def(node: &ast::StmtFunctionDef, context: &RenderContext) -> String {
    let (docstring, body) = split_docstring(&node.body);
    let args = node.args.render(context);
    let returns = return_type(node.returns.as_deref());

    // Local closure: assignment of an anonymous function value.
    if context.is_closure() {
        let name = namer::to_lower_camel(node.name.as_str());
        let body = render_body(body, &RenderContext::Closure);
        return format!(
            "{}\n{} := func({}) {}{{\n    {}\n}}",
            docstring,
            name,
            args,
            returns,
            indent(&body, 1)
        );
    }

    // Method: receiver alias derived from the enclosing type name; the
    // body keeps the type context so `self` stays resolvable.
    if let Some(ty) = context.type_context() {
        let name = namer::to_lower_camel(node.name.as_str());
        let body = render_body(body, context);
        return format!(
            "{}\nfunc ({} *{}) {}({}) {}{{\n    {}\n}}",
            docstring,
            ty.receiver(),
            ty.name(),
            name,
            args,
            returns,
            indent(&body, 1)
        );
    }

    // Standalone declaration; body statements see the closure context so
    // nested `def`s become local closures.
    let name = namer::to_upper_camel(node.name.as_str());
    let body = render_body(body, &RenderContext::Closure);
    format!(
        "{}\nfunc {}({}) {}{{\n    {}\n}}",
        docstring,
        name,
        args,
        returns,
        indent(&body, 1)
    )
}

// TODO(return types): render the annotated return type instead of the
// empty placeholder.
fn return_type(_returns: Option<&ast::Expr>) -> &'static str {
    ""
}

fn render_class_def(node: &ast::StmtClassDef) -> String {
    let (docstring, body) = split_docstring(&node.body);
    let context = RenderContext::Type(TypeContext::new(node.name.as_str()));
    let mut parts = Vec::new();
    if !docstring.is_empty() {
        parts.push(docstring);
    }
    parts.push(format!("type {} struct {{}}", node.name.as_str()));
    parts.push(render_body(body, &context));
    parts.join("\n")
}

fn render_dict(node: &ast::ExprDict, context: &RenderContext) -> String {
    let entries = node
        .keys
        .iter()
        .zip(&node.values)
        .map(|(key, value)| {
            let value = value.render(context);
            match key {
                Some(key) => format!("{}: {}", key.render(context), value),
                // `**spread` entry; only the value survives
                None => value,
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("map[interface{{}}]interface{{}}{{{}}}", entries)
}

fn render_generator(
    elt: &ast::Expr,
    generators: &[ast::Comprehension],
    context: &RenderContext,
) -> String {
    let clauses: String = generators
        .iter()
        .map(|generator| generator.render(context))
        .collect();
    format!("{}{}", elt.render(context), clauses)
}

fn render_slice(node: &ast::ExprSlice, context: &RenderContext) -> String {
    let mut out = String::new();
    if let Some(lower) = &node.lower {
        out.push_str(&lower.render(context));
    }
    out.push(':');
    if let Some(upper) = &node.upper {
        out.push_str(&upper.render(context));
    }
    if let Some(step) = &node.step {
        out.push(':');
        out.push_str(&step.render(context));
    }
    out
}

fn join_rendered(exprs: &[ast::Expr], context: &RenderContext) -> String {
    exprs
        .iter()
        .map(|expr| expr.render(context))
        .collect::<Vec<_>>()
        .join(", ")
}

fn unknown(kind: &str, fields: &[&str]) -> String {
    format!("// unknown {} ({})", kind, fields.join(", "))
}

/// Kind name and CPython `_fields` names for statements without a
/// dedicated renderer.
fn stmt_meta(node: &ast::Stmt) -> (&'static str, &'static [&'static str]) {
    match node {
        ast::Stmt::AsyncFunctionDef(_) => (
            "AsyncFunctionDef",
            &["name", "args", "body", "decorator_list", "returns"],
        ),
        ast::Stmt::AsyncFor(_) => ("AsyncFor", &["target", "iter", "body", "orelse"]),
        ast::Stmt::While(_) => ("While", &["test", "body", "orelse"]),
        ast::Stmt::With(_) => ("With", &["items", "body"]),
        ast::Stmt::AsyncWith(_) => ("AsyncWith", &["items", "body"]),
        ast::Stmt::Match(_) => ("Match", &["subject", "cases"]),
        ast::Stmt::Raise(_) => ("Raise", &["exc", "cause"]),
        ast::Stmt::Try(_) => ("Try", &["body", "handlers", "orelse", "finalbody"]),
        ast::Stmt::TryStar(_) => ("TryStar", &["body", "handlers", "orelse", "finalbody"]),
        ast::Stmt::Import(_) => ("Import", &["names"]),
        ast::Stmt::ImportFrom(_) => ("ImportFrom", &["module", "names", "level"]),
        ast::Stmt::Global(_) => ("Global", &["names"]),
        ast::Stmt::Nonlocal(_) => ("Nonlocal", &["names"]),
        ast::Stmt::Delete(_) => ("Delete", &["targets"]),
        ast::Stmt::AnnAssign(_) => ("AnnAssign", &["target", "annotation", "value", "simple"]),
        ast::Stmt::TypeAlias(_) => ("TypeAlias", &["name", "type_params", "value"]),
        ast::Stmt::Pass(_) => ("Pass", &[]),
        _ => ("Stmt", &[]),
    }
}

/// Kind name and field names for expressions without a dedicated
/// renderer.
fn expr_meta(node: &ast::Expr) -> (&'static str, &'static [&'static str]) {
    match node {
        ast::Expr::NamedExpr(_) => ("NamedExpr", &["target", "value"]),
        ast::Expr::IfExp(_) => ("IfExp", &["test", "body", "orelse"]),
        ast::Expr::Set(_) => ("Set", &["elts"]),
        ast::Expr::SetComp(_) => ("SetComp", &["elt", "generators"]),
        ast::Expr::DictComp(_) => ("DictComp", &["key", "value", "generators"]),
        ast::Expr::Await(_) => ("Await", &["value"]),
        ast::Expr::YieldFrom(_) => ("YieldFrom", &["value"]),
        ast::Expr::FormattedValue(_) => {
            ("FormattedValue", &["value", "conversion", "format_spec"])
        }
        ast::Expr::JoinedStr(_) => ("JoinedStr", &["values"]),
        ast::Expr::Starred(_) => ("Starred", &["value", "ctx"]),
        _ => ("Expr", &[]),
    }
}
