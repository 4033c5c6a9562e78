pub mod console;
pub mod json;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ir::{SignatureRecord, ToolDefinition};
use crate::GenerateReport;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl OutputFormat {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Some(Self::Console),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render extracted signatures.
pub fn render_signatures(records: &[SignatureRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render_signatures(records)),
        OutputFormat::Json => json::render(records),
    }
}

/// Render assembled tool definitions.
pub fn render_tools(tools: &[ToolDefinition], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render_tools(tools)),
        OutputFormat::Json => json::render(tools),
    }
}

/// Render a repository-wide generate report. The JSON form is just the
/// tool array, ready to hand to a function-calling API.
pub fn render_report(report: &GenerateReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render_report(report)),
        OutputFormat::Json => json::render(&report.tools),
    }
}
