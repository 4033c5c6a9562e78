use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of declaration a header introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureKind {
    Function,
    Class,
}

impl std::fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Class => write!(f, "class"),
        }
    }
}

/// JSON-Schema-like object describing a parameter list.
///
/// Always `{"type": "object", "properties": {...}}`. Every property is a
/// `string` with a generated description; annotations are never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: Map<String, Value>,
}

impl Default for ParameterSchema {
    fn default() -> Self {
        Self {
            schema_type: "object".into(),
            properties: Map::new(),
        }
    }
}

impl ParameterSchema {
    /// Add a string property. A repeated name overwrites the earlier entry
    /// but keeps its original position.
    pub fn insert(&mut self, name: &str) {
        let mut prop = Map::new();
        prop.insert("type".into(), Value::String("string".into()));
        prop.insert(
            "description".into(),
            Value::String(format!("Parameter {name}")),
        );
        self.properties.insert(name.to_string(), Value::Object(prop));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), Value::String(self.schema_type.clone()));
        obj.insert("properties".into(), Value::Object(self.properties.clone()));
        Value::Object(obj)
    }
}

/// One extracted top-level declaration.
///
/// Serialized with the same field names a `FunctionDescriptor` uses, so
/// extraction output can be fed back into tool assembly unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SignatureKind,
    /// The trimmed header line as it appeared in the source.
    #[serde(rename = "signature")]
    pub raw_signature: String,
    /// Attached documentation, empty when none was found.
    pub description: String,
    /// Present only for functions.
    #[serde(
        rename = "parameters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parameter_schema: Option<ParameterSchema>,
    #[serde(rename = "required", default, skip_serializing_if = "Vec::is_empty")]
    pub required_parameters: Vec<String>,
}

impl SignatureRecord {
    pub fn function(
        name: &str,
        raw_signature: &str,
        description: String,
        parameter_schema: ParameterSchema,
        required_parameters: Vec<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind: SignatureKind::Function,
            raw_signature: raw_signature.to_string(),
            description,
            parameter_schema: Some(parameter_schema),
            required_parameters,
        }
    }

    pub fn class(name: &str, raw_signature: &str, description: String) -> Self {
        Self {
            name: name.to_string(),
            kind: SignatureKind::Class,
            raw_signature: raw_signature.to_string(),
            description,
            parameter_schema: None,
            required_parameters: Vec::new(),
        }
    }

    pub fn is_function(&self) -> bool {
        self.kind == SignatureKind::Function
    }
}
