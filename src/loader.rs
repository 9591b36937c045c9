//! File loading: reads Python source and hands back the parsed module
//! tree the renderer consumes.

use std::fs;

use anyhow::{anyhow, Context, Result};
use rustpython_parser::{ast, parse, Mode};
use tracing::debug;

/// Read a Python source file and parse it into a module AST.
///
/// Both read and parse failures are fatal; there is no per-file
/// recovery at this layer.
pub fn load(path: &str) -> Result<ast::ModModule> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    parse_source(&source, path)
}

/// Parse Python source text into a module AST.
pub fn parse_source(source: &str, path: &str) -> Result<ast::ModModule> {
    let parsed = parse(source, Mode::Module, path)
        .map_err(|err| anyhow!("failed to parse {}: {}", path, err))?;
    match parsed {
        ast::Mod::Module(module) => {
            debug!(path, statements = module.body.len(), "parsed module");
            Ok(module)
        }
        // Mode::Module only ever yields a module; kept for totality.
        _ => Err(anyhow!("{}: top level is not a module", path)),
    }
}
