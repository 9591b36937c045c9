//! Pure identifier transforms: package names from file paths and
//! underscore-to-camel conversions for Go-style naming.

use std::path::Path;

/// Derive the Go package name from a source file path: the final path
/// segment with a trailing `.py` stripped. No case changes.
pub fn package_name(path: &str) -> &str {
    let base = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);
    base.strip_suffix(".py").unwrap_or(base)
}

/// Convert `underscore_name` to `UnderscoreName`.
///
/// Empty underscore-delimited parts collapse back to a literal `_`, so
/// leading, trailing and doubled underscores survive: `__init__`
/// becomes `__Init__`.
pub fn to_upper_camel(name: &str) -> String {
    name.split('_')
        .map(|part| {
            if part.is_empty() {
                "_".to_string()
            } else {
                capitalize(part)
            }
        })
        .collect()
}

/// Convert `underscore_name` to `underscoreName`: upper camel with only
/// the first character lowercased.
pub fn to_lower_camel(name: &str) -> String {
    let camel = to_upper_camel(name);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => camel,
    }
}

// Same behavior as Python's str.capitalize: first char uppercased, the
// rest lowercased.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
