//! repo-prime: turn a codebase's public surface into function-calling tools.
//!
//! Scans Python, JavaScript and TypeScript source line by line for
//! function and class headers, attaches their docstrings or JSDoc blocks,
//! normalizes parameter lists into JSON-Schema objects, and wraps the result
//! in OpenAI-style tool definitions.
//!
//! # Quick Start
//!
//! ```
//! use repoprime::{extract_signatures, synthesize_tool_schemas};
//! use repoprime::emit::descriptors_from_signatures;
//!
//! let code = "def greet(name: str, age: int = 25) -> str:\n    \"\"\"Greets.\"\"\"\n";
//! let records = extract_signatures(code, "python").unwrap();
//! assert_eq!(records[0].required_parameters, vec!["name"]);
//!
//! let tools = synthesize_tool_schemas(&descriptors_from_signatures(&records)).unwrap();
//! assert_eq!(tools[0].function.name, "greet");
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod ir;
pub mod output;
pub mod parser;
pub mod repository;

use std::path::{Path, PathBuf};

use serde::Serialize;

use config::Config;
use emit::EmitOptions;
use error::Result;
use ir::{Language, SignatureRecord, ToolDefinition};
use parser::ExtractOptions;

pub use emit::synthesize_tool_schemas;
pub use parser::{extract_signatures, extract_signatures_from_bytes};

/// Options for a repository-wide generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub extract: ExtractOptions,
    pub emit: EmitOptions,
    /// Directory names skipped while walking.
    pub exclude_dirs: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            emit: EmitOptions::default(),
            exclude_dirs: repository::default_exclude_dirs(),
        }
    }
}

impl GenerateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extract: config.scan.clone(),
            emit: config.emit.clone(),
            exclude_dirs: config.listing.exclude_dirs.clone(),
        }
    }
}

/// Signatures found in one source file.
#[derive(Debug, Clone, Serialize)]
pub struct FileSignatures {
    /// Path relative to the repository root.
    pub path: String,
    pub language: Language,
    pub signatures: Vec<SignatureRecord>,
}

/// Result of a generate run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub root: PathBuf,
    pub files: Vec<FileSignatures>,
    pub tools: Vec<ToolDefinition>,
}

/// Walk a repository, extract every recognized source file and assemble
/// tool definitions for all public functions found.
///
/// Files that cannot be read as UTF-8 text are logged and skipped. A
/// repository with no functions yields an empty tool list.
pub fn generate(root: &Path, options: &GenerateOptions) -> Result<GenerateReport> {
    let paths = repository::walk_files(root, None, &options.exclude_dirs)?;
    let mut files = Vec::new();

    for path in paths {
        let Some(language) = Path::new(&path)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Language::from_extension)
        else {
            continue;
        };

        let content = match repository::read_file(root, &path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %path,
                    error = %e,
                    "failed to read source file, skipping"
                );
                continue;
            }
        };

        let signatures = parser::extract_with(&content, language, &options.extract);
        files.push(FileSignatures {
            path,
            language,
            signatures,
        });
    }

    let descriptors: Vec<_> = files
        .iter()
        .flat_map(|f| emit::descriptors_from_signatures(&f.signatures))
        .collect();

    let tools = if descriptors.is_empty() {
        Vec::new()
    } else {
        emit::synthesize_tool_schemas_with(&descriptors, &options.emit)?
    };

    Ok(GenerateReport {
        root: root.to_path_buf(),
        files,
        tools,
    })
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    const SAMPLE_REPO: &str = "tests/fixtures/sample_repo";

    fn tool_names(report: &GenerateReport) -> Vec<&str> {
        report
            .tools
            .iter()
            .map(|t| t.function.name.as_str())
            .collect()
    }

    #[test]
    fn sample_repo_generates_tools_for_all_languages() {
        let report = generate(Path::new(SAMPLE_REPO), &GenerateOptions::default()).unwrap();

        let languages: Vec<Language> = report.files.iter().map(|f| f.language).collect();
        assert!(languages.contains(&Language::Python));
        assert!(languages.contains(&Language::JavaScript));
        assert!(languages.contains(&Language::TypeScript));

        assert_eq!(
            tool_names(&report),
            vec!["fetchUser", "listUsers", "add", "divide", "greet", "add"]
        );
    }

    #[test]
    fn excluded_and_unrecognized_files_are_skipped() {
        let report = generate(Path::new(SAMPLE_REPO), &GenerateOptions::default()).unwrap();
        let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.iter().all(|p| !p.contains("node_modules")));
        assert!(paths.iter().all(|p| !p.ends_with(".md")));
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn top_level_only_drops_methods() {
        let options = GenerateOptions {
            extract: ExtractOptions {
                top_level_only: true,
            },
            ..GenerateOptions::default()
        };
        let report = generate(Path::new(SAMPLE_REPO), &options).unwrap();
        assert_eq!(
            tool_names(&report),
            vec!["fetchUser", "listUsers", "add", "divide", "greet"]
        );
    }

    #[test]
    fn python_fixture_matches_expected_records() {
        let content =
            repository::read_file(Path::new(SAMPLE_REPO), "greeter.py").unwrap();
        let records = extract_signatures(&content, "python").unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["greet", "Calculator", "add"]);
        assert_eq!(
            records[0].description,
            "Greet a person with their name and age.\n\nArgs:\n    name: The person's name\n    age: The person's age (default: 25)\n\nReturns:\n    A greeting string"
        );
        assert_eq!(records[1].description, "A simple calculator class.");
    }

    #[test]
    fn empty_directory_yields_no_tools() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(dir.path(), &GenerateOptions::default()).unwrap();
        assert!(report.files.is_empty());
        assert!(report.tools.is_empty());
    }

    #[test]
    fn undecodable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.py"), [0xffu8, 0xfe]).unwrap();
        std::fs::write(dir.path().join("good.py"), "def ok():\n    pass\n").unwrap();
        let report = generate(dir.path(), &GenerateOptions::default()).unwrap();
        assert_eq!(tool_names(&report), vec!["ok"]);
    }
}
