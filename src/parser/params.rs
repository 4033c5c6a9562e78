//! Parameter-list normalization.
//!
//! The raw text between a declaration's parentheses is split on every comma.
//! Nesting is not tracked, so a default value containing a comma (a list or
//! dict literal, a call with several arguments) splits into bogus tokens.

use crate::ir::ParameterSchema;

/// Normalized parameter list: schema plus required names in encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedParams {
    pub schema: ParameterSchema,
    pub required: Vec<String>,
}

impl NormalizedParams {
    fn push(&mut self, name: &str, required: bool) {
        if required {
            self.required.push(name.to_string());
        }
        self.schema.insert(name);
    }
}

/// Normalize a Python parameter list.
///
/// `self` and variadic markers (`*args`, `**kwargs`, bare `*`) are dropped.
/// A parameter is required when it has no default.
pub fn normalize_python(params: &str) -> NormalizedParams {
    let mut out = NormalizedParams::default();

    for token in params.split(',') {
        let token = token.trim();
        if token.is_empty() || token == "self" || token.starts_with('*') {
            continue;
        }

        let name = param_name(token);
        if name.is_empty() || name == "self" {
            continue;
        }

        out.push(name, !token.contains('='));
    }

    out
}

/// Normalize a JavaScript/TypeScript parameter list.
///
/// Rest parameters are dropped. A trailing `?` on the name marks the
/// parameter optional; optional and defaulted parameters are not required.
pub fn normalize_javascript(params: &str) -> NormalizedParams {
    let mut out = NormalizedParams::default();

    for token in params.split(',') {
        let token = token.trim();
        if token.is_empty() || token.starts_with("...") {
            continue;
        }

        let name = param_name(token);
        let (name, optional) = match name.strip_suffix('?') {
            Some(stripped) => (stripped.trim_end(), true),
            None => (name, false),
        };
        if name.is_empty() {
            continue;
        }

        out.push(name, !optional && !token.contains('='));
    }

    out
}

/// Text before the first annotation (`:`) or default (`=`) marker.
fn param_name(token: &str) -> &str {
    let end = token.find([':', '=']).unwrap_or(token.len());
    token[..end].trim()
}
