pub mod docs;
pub mod json_schema;
pub mod params;
pub mod python;
pub mod typescript;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ir::{Language, SignatureKind, SignatureRecord};
use params::NormalizedParams;

/// Knobs for a single extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Only accept headers with no leading indentation. Off by default, in
    /// which case nested functions and methods are reported as well.
    #[serde(default)]
    pub top_level_only: bool,
}

/// Language scanner trait. Each scanner turns source text into signature
/// records, in source order. Scanners never fail: lines that don't match a
/// header pattern are skipped.
pub trait LanguageParser: Send + Sync {
    fn language(&self) -> Language;
    fn extract(&self, content: &str, options: &ExtractOptions) -> Vec<SignatureRecord>;
}

/// Get the scanner for a language. JavaScript and TypeScript share one.
pub fn parser_for_language(lang: Language) -> Box<dyn LanguageParser> {
    match lang {
        Language::Python => Box::new(python::PythonParser),
        Language::JavaScript | Language::TypeScript => Box::new(typescript::TypeScriptParser),
    }
}

/// Extract signatures from `code` written in the language named by `language`.
///
/// Accepted tags are `python`, `javascript` and `typescript`, matched exactly.
pub fn extract_signatures(code: &str, language: &str) -> Result<Vec<SignatureRecord>> {
    let language = Language::from_tag(language)?;
    Ok(extract_with(code, language, &ExtractOptions::default()))
}

/// Like [`extract_signatures`], for raw bytes. Non-UTF-8 input is rejected
/// without a partial result.
pub fn extract_signatures_from_bytes(code: &[u8], language: &str) -> Result<Vec<SignatureRecord>> {
    let language = Language::from_tag(language)?;
    let code = std::str::from_utf8(code)?;
    Ok(extract_with(code, language, &ExtractOptions::default()))
}

/// Typed extraction entry point.
pub fn extract_with(
    code: &str,
    language: Language,
    options: &ExtractOptions,
) -> Vec<SignatureRecord> {
    let records = parser_for_language(language).extract(code, options);
    tracing::debug!(
        language = %language,
        count = records.len(),
        "extracted signatures"
    );
    records
}

/// One recognizable declaration header shape.
///
/// Capture group 1 is the declared name. Function patterns also capture the
/// parameter text in group 2.
pub(crate) struct HeaderPattern {
    pub kind: SignatureKind,
    pub regex: Regex,
}

impl HeaderPattern {
    pub fn new(kind: SignatureKind, pattern: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("header pattern must compile"),
        }
    }
}

/// Per-language hooks plugged into the shared line scanner.
pub(crate) struct Grammar<'a> {
    pub patterns: &'a [HeaderPattern],
    /// Documentation for the header at the given line index.
    pub describe: fn(&[&str], usize) -> String,
    pub normalize: fn(&str) -> NormalizedParams,
}

/// Walk `content` line by line and emit a record for every header match.
///
/// Patterns are not mutually exclusive: a line matching several of them
/// produces one record per match, in pattern order. Names starting with `_`
/// are private and never produce a record.
pub(crate) fn scan_lines(
    content: &str,
    grammar: &Grammar<'_>,
    options: &ExtractOptions,
) -> Vec<SignatureRecord> {
    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::new();

    for (idx, raw) in lines.iter().enumerate() {
        if options.top_level_only && raw.starts_with(char::is_whitespace) {
            continue;
        }
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        for pattern in grammar.patterns {
            let Some(cap) = pattern.regex.captures(line) else {
                continue;
            };
            let name = &cap[1];
            if name.starts_with('_') {
                tracing::debug!(name, line = idx + 1, "skipping private declaration");
                continue;
            }

            let description = (grammar.describe)(&lines, idx);
            let record = match pattern.kind {
                SignatureKind::Function => {
                    let params = cap.get(2).map_or("", |m| m.as_str());
                    let normalized = (grammar.normalize)(params);
                    SignatureRecord::function(
                        name,
                        line,
                        description,
                        normalized.schema,
                        normalized.required,
                    )
                }
                SignatureKind::Class => SignatureRecord::class(name, line, description),
            };
            records.push(record);
        }
    }

    records
}
