//! # py2go
//!
//! Convert Python source files into editable Go skeletons.
//!
//! The renderer walks an externally parsed Python AST and emits a
//! best-effort textual approximation of each top-level statement. It is
//! deliberately forgiving: any construct without a Go rendering becomes
//! an inert `// unknown ...` comment rather than an error, so a whole
//! module always renders and a human can find and hand-finish every gap.

pub mod loader;
pub mod namer;
pub mod renderer;

pub use renderer::{ModuleRenderer, Render, RenderContext, TypeContext};

#[cfg(test)]
mod tests;
