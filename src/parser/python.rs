use once_cell::sync::Lazy;

use super::{docs, params, scan_lines, ExtractOptions, Grammar, HeaderPattern, LanguageParser};
use crate::ir::{Language, SignatureKind, SignatureRecord};

pub struct PythonParser;

// Header shapes, matched against the trimmed line in this order.
static HEADER_PATTERNS: Lazy<Vec<HeaderPattern>> = Lazy::new(|| {
    vec![
        // def name(params) -> ret:
        HeaderPattern::new(
            SignatureKind::Function,
            r"^def\s+(\w+)\s*\((.*?)\)\s*(?:->.*?)?:",
        ),
        // class Name(Base, ...):
        HeaderPattern::new(SignatureKind::Class, r"^class\s+(\w+)(?:\(.*?\))?:"),
    ]
});

fn docstring_after(lines: &[&str], header: usize) -> String {
    docs::python_docstring(lines, header + 1)
}

impl LanguageParser for PythonParser {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extract(&self, content: &str, options: &ExtractOptions) -> Vec<SignatureRecord> {
        let grammar = Grammar {
            patterns: &HEADER_PATTERNS,
            describe: docstring_after,
            normalize: params::normalize_python,
        };
        scan_lines(content, &grammar, options)
    }
}
