use serde::Serialize;

use crate::error::Result;

/// Pretty-printed JSON with a trailing newline.
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
