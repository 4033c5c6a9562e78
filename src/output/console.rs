use crate::ir::{SignatureKind, SignatureRecord, ToolDefinition};
use crate::GenerateReport;

/// Render signatures as an indented listing, one block per declaration.
pub fn render_signatures(records: &[SignatureRecord]) -> String {
    let mut output = String::new();

    if records.is_empty() {
        output.push_str("\n  No declarations recognized.\n\n");
        return output;
    }

    output.push_str(&format!("\n  {} declaration(s):\n\n", records.len()));
    for record in records {
        push_record(&mut output, record);
    }

    output
}

/// Render tool definitions as a name/parameter summary.
pub fn render_tools(tools: &[ToolDefinition]) -> String {
    let mut output = String::new();

    if tools.is_empty() {
        output.push_str("\n  No tools generated.\n\n");
        return output;
    }

    output.push_str(&format!("\n  {} tool(s):\n\n", tools.len()));
    for tool in tools {
        let params = tool
            .function
            .parameters
            .get("properties")
            .and_then(|p| p.as_object())
            .map(|p| p.keys().cloned().collect::<Vec<_>>().join(", "))
            .unwrap_or_default();
        output.push_str(&format!("  {}({})\n", tool.function.name, params));
        if !tool.function.description.is_empty() {
            output.push_str(&format!("           {}\n", first_line(&tool.function.description)));
        }
    }
    output.push('\n');

    output
}

/// Render a generate report grouped by file.
pub fn render_report(report: &GenerateReport) -> String {
    let mut output = String::new();

    if report.files.is_empty() {
        output.push_str("\n  No source files found.\n\n");
        return output;
    }

    output.push('\n');
    for file in &report.files {
        output.push_str(&format!(
            "  {} ({}, {} declaration(s))\n",
            file.path,
            file.language,
            file.signatures.len()
        ));
        for record in &file.signatures {
            push_record(&mut output, record);
        }
    }

    output.push_str(&format!(
        "  Result: {} tool(s) from {} file(s)\n\n",
        report.tools.len(),
        report.files.len()
    ));

    output
}

fn push_record(output: &mut String, record: &SignatureRecord) {
    let tag = match record.kind {
        SignatureKind::Function => "[function]",
        SignatureKind::Class => "[class]   ",
    };

    let params = match &record.parameter_schema {
        Some(schema) => {
            let names: Vec<String> = schema
                .names()
                .map(|n| {
                    if record.required_parameters.iter().any(|r| r == n) {
                        n.to_string()
                    } else {
                        format!("{n}?")
                    }
                })
                .collect();
            format!("({})", names.join(", "))
        }
        None => String::new(),
    };

    output.push_str(&format!("  {} {}{}\n", tag, record.name, params));
    output.push_str(&format!("           at {}\n", record.raw_signature));
    if !record.description.is_empty() {
        output.push_str(&format!("           doc: {}\n", first_line(&record.description)));
    }
    output.push('\n');
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_signatures;

    #[test]
    fn empty_listing() {
        assert!(render_signatures(&[]).contains("No declarations recognized"));
        assert!(render_tools(&[]).contains("No tools generated"));
    }

    #[test]
    fn optional_parameters_are_marked() {
        let records = extract_signatures(
            "def greet(name, age=25):\n    \"\"\"Greets.\n\n    More.\n    \"\"\"",
            "python",
        )
        .unwrap();
        let out = render_signatures(&records);
        assert!(out.contains("1 declaration(s)"));
        assert!(out.contains("[function] greet(name, age?)"));
        assert!(out.contains("doc: Greets."));
        assert!(!out.contains("More."));
    }

    #[test]
    fn tools_list_parameters() {
        let tools = vec![ToolDefinition::function(
            "add".into(),
            "Adds.".into(),
            serde_json::json!({"type": "object", "properties": {"a": {}, "b": {}}}),
        )];
        let out = render_tools(&tools);
        assert!(out.contains("add(a, b)"));
        assert!(out.contains("Adds."));
    }
}
