use once_cell::sync::Lazy;

use super::{docs, params, scan_lines, ExtractOptions, Grammar, HeaderPattern, LanguageParser};
use crate::ir::{Language, SignatureKind, SignatureRecord};

/// Scanner for JavaScript and TypeScript. TypeScript-only constructs
/// (interfaces, type aliases, decorators) have no header pattern and are
/// skipped; type positions inside a matched header are tolerated.
pub struct TypeScriptParser;

// Evaluated independently per trimmed line, in this order.
static HEADER_PATTERNS: Lazy<Vec<HeaderPattern>> = Lazy::new(|| {
    vec![
        // [export] [async] function name(params)[: Ret]
        HeaderPattern::new(
            SignatureKind::Function,
            r"^(?:export\s+)?(?:async\s+)?function\s+(\w+)\s*\((.*?)\)(?:\s*:\s*.*?)?",
        ),
        // [export] const name = [async] (params)[: Ret] =>
        HeaderPattern::new(
            SignatureKind::Function,
            r"^(?:export\s+)?const\s+(\w+)\s*=\s*(?:async\s+)?\((.*?)\)(?:\s*:\s*.*?)?\s*=>",
        ),
        // [export] [abstract] class Name [extends Base] [implements ...]
        HeaderPattern::new(
            SignatureKind::Class,
            r"^(?:export\s+)?(?:abstract\s+)?class\s+(\w+)(?:\s+extends\s+\w+)?(?:\s+implements\s+.*?)?",
        ),
    ]
});

impl LanguageParser for TypeScriptParser {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn extract(&self, content: &str, options: &ExtractOptions) -> Vec<SignatureRecord> {
        let grammar = Grammar {
            patterns: &HEADER_PATTERNS,
            describe: docs::jsdoc_comment,
            normalize: params::normalize_javascript,
        };
        scan_lines(content, &grammar, options)
    }
}
