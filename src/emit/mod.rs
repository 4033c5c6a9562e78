//! Tool schema assembly: function descriptors in, tool definitions out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PrimeError, Result};
use crate::ir::{FunctionDescriptor, SignatureRecord, ToolDefinition};

/// Options for tool assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Copy each descriptor's `required` list into `parameters.required`
    /// when the parameters object has none of its own. Without this the
    /// list is dropped.
    #[serde(default)]
    pub embed_required: bool,
}

/// Wrap each descriptor in a `{"type": "function", "function": {...}}`
/// envelope, preserving order.
///
/// Fails with `EmptyInput` for an empty slice, and with
/// `MalformedDescriptor` if any descriptor has an empty name or null
/// parameters.
pub fn synthesize_tool_schemas(functions: &[FunctionDescriptor]) -> Result<Vec<ToolDefinition>> {
    synthesize_tool_schemas_with(functions, &EmitOptions::default())
}

pub fn synthesize_tool_schemas_with(
    functions: &[FunctionDescriptor],
    options: &EmitOptions,
) -> Result<Vec<ToolDefinition>> {
    if functions.is_empty() {
        return Err(PrimeError::EmptyInput);
    }

    for (index, func) in functions.iter().enumerate() {
        if func.name.is_empty() {
            return Err(PrimeError::malformed(index, "name"));
        }
        if func.parameters.is_null() {
            return Err(PrimeError::malformed(index, "parameters"));
        }
    }

    let tools = functions
        .iter()
        .map(|func| {
            let mut parameters = func.parameters.clone();
            if options.embed_required {
                embed_required(&mut parameters, &func.required);
            }
            ToolDefinition::function(func.name.clone(), func.description.clone(), parameters)
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = tools.len(), "assembled tool definitions");
    Ok(tools)
}

/// Descriptors for the function records in `records`; classes are dropped.
pub fn descriptors_from_signatures(records: &[SignatureRecord]) -> Vec<FunctionDescriptor> {
    records
        .iter()
        .filter_map(FunctionDescriptor::from_signature)
        .collect()
}

fn embed_required(parameters: &mut Value, required: &[String]) {
    if required.is_empty() {
        return;
    }
    if let Some(obj) = parameters.as_object_mut() {
        obj.entry("required").or_insert_with(|| {
            Value::Array(required.iter().cloned().map(Value::String).collect())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_signatures;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn descriptor(name: &str) -> FunctionDescriptor {
        FunctionDescriptor {
            name: name.into(),
            description: format!("{name} tool"),
            parameters: json!({"type": "object", "properties": {"x": {"type": "string"}}}),
            required: vec!["x".into()],
        }
    }

    #[test]
    fn empty_input_fails() {
        let err = synthesize_tool_schemas(&[]).unwrap_err();
        assert!(matches!(err, PrimeError::EmptyInput));
    }

    #[test]
    fn wraps_each_descriptor_in_order_without_required() {
        let tools = synthesize_tool_schemas(&[descriptor("a"), descriptor("b")]).unwrap();
        assert_eq!(
            serde_json::to_value(&tools).unwrap(),
            json!([
                {
                    "type": "function",
                    "function": {
                        "name": "a",
                        "description": "a tool",
                        "parameters": {"type": "object", "properties": {"x": {"type": "string"}}}
                    }
                },
                {
                    "type": "function",
                    "function": {
                        "name": "b",
                        "description": "b tool",
                        "parameters": {"type": "object", "properties": {"x": {"type": "string"}}}
                    }
                }
            ])
        );
    }

    #[test]
    fn duplicates_are_not_merged() {
        let tools = synthesize_tool_schemas(&[descriptor("same"), descriptor("same")]).unwrap();
        assert_eq!(tools.len(), 2);
    }

    #[test]
    fn malformed_descriptor_aborts_assembly() {
        let mut bad = descriptor("bad");
        bad.name.clear();
        let err = synthesize_tool_schemas(&[descriptor("ok"), bad]).unwrap_err();
        assert!(matches!(
            err,
            PrimeError::MalformedDescriptor { index: 1, ref field } if field == "name"
        ));

        let mut bad = descriptor("bad");
        bad.parameters = Value::Null;
        let err = synthesize_tool_schemas(&[bad]).unwrap_err();
        assert!(matches!(
            err,
            PrimeError::MalformedDescriptor { index: 0, ref field } if field == "parameters"
        ));
    }

    #[test]
    fn embed_required_writes_into_parameters() {
        let options = EmitOptions {
            embed_required: true,
        };
        let tools = synthesize_tool_schemas_with(&[descriptor("a")], &options).unwrap();
        assert_eq!(tools[0].function.parameters["required"], json!(["x"]));
    }

    #[test]
    fn embed_required_keeps_existing_list() {
        let mut desc = descriptor("a");
        desc.parameters["required"] = json!(["y"]);
        let options = EmitOptions {
            embed_required: true,
        };
        let tools = synthesize_tool_schemas_with(&[desc], &options).unwrap();
        assert_eq!(tools[0].function.parameters["required"], json!(["y"]));
    }

    #[test]
    fn extracted_functions_feed_the_assembler() {
        let code = "class Shape:\n    pass\ndef area(w, h=1):\n    \"\"\"Area.\"\"\"\n";
        let records = extract_signatures(code, "python").unwrap();
        let descriptors = descriptors_from_signatures(&records);
        assert_eq!(descriptors.len(), 1);

        let tools = synthesize_tool_schemas(&descriptors).unwrap();
        assert_eq!(tools[0].function.name, "area");
        assert_eq!(tools[0].function.description, "Area.");
        assert_eq!(
            tools[0].function.parameters,
            json!({
                "type": "object",
                "properties": {
                    "w": {"type": "string", "description": "Parameter w"},
                    "h": {"type": "string", "description": "Parameter h"}
                }
            })
        );
    }
}
