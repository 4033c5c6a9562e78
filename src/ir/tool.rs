use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SignatureRecord;

/// Input to tool assembly: a callable's name, documentation and parameter
/// schema, regardless of where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// JSON Schema of the parameters. Passed through untouched.
    pub parameters: Value,
    #[serde(default)]
    pub required: Vec<String>,
}

impl FunctionDescriptor {
    /// Build a descriptor from an extracted record. Classes have no
    /// parameter schema and yield `None`.
    pub fn from_signature(record: &SignatureRecord) -> Option<Self> {
        let schema = record.parameter_schema.as_ref()?;
        Some(Self {
            name: record.name.clone(),
            description: record.description.clone(),
            parameters: schema.to_value(),
            required: record.required_parameters.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    Function,
}

/// OpenAI-style function-calling tool envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: FunctionDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    pub fn function(name: String, description: String, parameters: Value) -> Self {
        Self {
            tool_type: ToolType::Function,
            function: FunctionDef {
                name,
                description,
                parameters,
            },
        }
    }
}
