//! The rendering trait and the context threaded through recursive
//! dispatch.

/// Where in the tree rendering currently is. The same node kind renders
/// differently depending on this: assignments gain a `var` prefix at
/// module level, nested `def`s become closures, method bodies resolve
/// `self` to a receiver alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderContext {
    /// Top level of a module.
    Module,
    /// Inside a function body; a `def` encountered here renders as a
    /// local variable bound to an anonymous function.
    Closure,
    /// Inside a class body, carrying the owning type's name.
    Type(TypeContext),
}

impl RenderContext {
    pub fn is_module(&self) -> bool {
        matches!(self, RenderContext::Module)
    }

    pub fn is_closure(&self) -> bool {
        matches!(self, RenderContext::Closure)
    }

    pub fn type_context(&self) -> Option<&TypeContext> {
        match self {
            RenderContext::Type(ty) => Some(ty),
            _ => None,
        }
    }
}

/// The enclosing class of a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeContext {
    name: String,
}

impl TypeContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The class's declared name, kept raw (no case conversion).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Receiver alias: the lowercased first character of the type name.
    /// `self` references inside the class body render as this.
    pub fn receiver(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_lowercase().to_string())
            .unwrap_or_default()
    }
}

/// Core rendering trait for AST nodes.
///
/// Rendering is total: every node kind produces a fragment, with
/// unsupported kinds degrading to inert `// unknown ...` comments. No
/// implementation returns an error or panics on a parser-produced tree.
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
