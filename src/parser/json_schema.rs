use serde_json::Value;

use crate::error::{PrimeError, Result};
use crate::ir::FunctionDescriptor;

/// Read function descriptors from caller-supplied JSON.
///
/// Accepts either a bare array or an object with a `functions` array. Each
/// item needs a non-empty string `name` and a non-null `parameters`;
/// `description` defaults to `""` and `required` to `[]`. The first bad item
/// aborts the whole read.
pub fn parse_descriptors_from_json(value: &Value) -> Result<Vec<FunctionDescriptor>> {
    let items = if let Some(arr) = value.as_array() {
        arr
    } else if let Some(arr) = value.get("functions").and_then(|v| v.as_array()) {
        arr
    } else {
        return Err(PrimeError::malformed(0, "functions"));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_descriptor(index, item))
        .collect()
}

fn parse_descriptor(index: usize, item: &Value) -> Result<FunctionDescriptor> {
    let obj = item
        .as_object()
        .ok_or_else(|| PrimeError::malformed(index, "name"))?;

    let name = obj
        .get("name")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PrimeError::malformed(index, "name"))?
        .to_string();

    let description = match obj.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(PrimeError::malformed(index, "description")),
    };

    let parameters = match obj.get("parameters") {
        None | Some(Value::Null) => return Err(PrimeError::malformed(index, "parameters")),
        Some(v) => v.clone(),
    };

    let required = match obj.get("required") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(arr)) => arr
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| PrimeError::malformed(index, "required"))?,
        Some(_) => return Err(PrimeError::malformed(index, "required")),
    };

    Ok(FunctionDescriptor {
        name,
        description,
        parameters,
        required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_array() {
        let value = json!([
            {
                "name": "calculator_add",
                "description": "Add two numbers",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "a": {"type": "number"},
                        "b": {"type": "number"}
                    }
                },
                "required": ["a", "b"]
            },
            {
                "name": "ping",
                "parameters": {"type": "object", "properties": {}}
            }
        ]);
        let descriptors = parse_descriptors_from_json(&value).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "calculator_add");
        assert_eq!(descriptors[0].required, vec!["a", "b"]);
        assert_eq!(descriptors[1].description, "");
        assert!(descriptors[1].required.is_empty());
    }

    #[test]
    fn parses_functions_wrapper() {
        let value = json!({
            "functions": [
                {"name": "f", "description": "F.", "parameters": {}, "required": []}
            ]
        });
        let descriptors = parse_descriptors_from_json(&value).unwrap();
        assert_eq!(descriptors[0].name, "f");
    }

    #[test]
    fn missing_name_reports_offending_index() {
        let value = json!([
            {"name": "ok", "parameters": {}},
            {"description": "no name", "parameters": {}}
        ]);
        let err = parse_descriptors_from_json(&value).unwrap_err();
        match err {
            PrimeError::MalformedDescriptor { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_parameters_is_malformed() {
        let value = json!([{"name": "f", "parameters": null}]);
        let err = parse_descriptors_from_json(&value).unwrap_err();
        assert!(matches!(
            err,
            PrimeError::MalformedDescriptor { index: 0, ref field } if field == "parameters"
        ));
    }

    #[test]
    fn non_string_required_entry_is_malformed() {
        let value = json!([{"name": "f", "parameters": {}, "required": ["a", 3]}]);
        let err = parse_descriptors_from_json(&value).unwrap_err();
        assert!(matches!(
            err,
            PrimeError::MalformedDescriptor { ref field, .. } if field == "required"
        ));
    }

    #[test]
    fn wrong_top_level_shape() {
        let err = parse_descriptors_from_json(&json!({"tools": []})).unwrap_err();
        assert!(matches!(err, PrimeError::MalformedDescriptor { .. }));
    }

    #[test]
    fn empty_array_reads_as_empty() {
        let descriptors = parse_descriptors_from_json(&json!([])).unwrap();
        assert!(descriptors.is_empty());
    }
}
