//! Intermediate representation shared by extraction and tool assembly.
//!
//! Scanners produce `SignatureRecord`s. The assembler consumes
//! `FunctionDescriptor`s, which can be derived from records or supplied
//! directly as JSON.

pub mod signature;
pub mod tool;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrimeError;

pub use signature::{ParameterSchema, SignatureKind, SignatureRecord};
pub use tool::{FunctionDef, FunctionDescriptor, ToolDefinition, ToolType};

/// Source language accepted by the extraction facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
}

impl Language {
    /// Resolve a language tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Result<Self, PrimeError> {
        match tag {
            "python" => Ok(Self::Python),
            "javascript" => Ok(Self::JavaScript),
            "typescript" => Ok(Self::TypeScript),
            other => Err(PrimeError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// Infer the language from a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Self::Python),
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "tsx" => Some(Self::TypeScript),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }
}

impl FromStr for Language {
    type Err = PrimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "Python"),
            Self::JavaScript => write!(f, "JavaScript"),
            Self::TypeScript => write!(f, "TypeScript"),
        }
    }
}
