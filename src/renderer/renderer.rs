use rustpython_parser::ast;
use tracing::debug;

use crate::namer;
use crate::renderer::traits::{Render, RenderContext};

/// Drives rendering of a whole module: package header, blank line, then
/// every top-level statement under module context in source order.
pub struct ModuleRenderer;

impl ModuleRenderer {
    /// Render `module` as a Go skeleton. `path` is only used to derive
    /// the package name.
    ///
    /// The output is editable text, not guaranteed to compile; every
    /// construct without a Go rendering is flagged inline as a comment.
    pub fn render(&self, path: &str, module: &ast::ModModule) -> String {
        let mut output = String::new();
        output.push_str(&format!("package {}\n\n", namer::package_name(path)));

        for node in &module.body {
            output.push_str(&node.render(&RenderContext::Module));
            output.push('\n');
        }

        debug!(path, bytes = output.len(), "rendered module");
        output
    }
}
