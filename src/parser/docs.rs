//! Documentation association: find the doc block that belongs to a
//! declaration header.

const TRIPLE_QUOTES: [&str; 2] = ["\"\"\"", "'''"];

/// Docstring opening on `lines[start]`, the line right after a Python header.
///
/// A one-line `"""text"""` yields `text`. A multi-line docstring collects
/// everything up to the closing quote, with the common indentation of the
/// continuation lines removed. An unterminated docstring runs to the end of
/// the input. Returns an empty string when the line does not open one.
pub fn python_docstring(lines: &[&str], start: usize) -> String {
    let Some(first) = lines.get(start) else {
        return String::new();
    };
    let first = first.trim();
    let Some(quote) = TRIPLE_QUOTES.iter().find(|q| first.starts_with(**q)) else {
        return String::new();
    };

    let opening = &first[quote.len()..];
    if let Some(end) = opening.find(quote) {
        return opening[..end].trim().to_string();
    }

    let mut body = Vec::new();
    for line in &lines[start + 1..] {
        if let Some(end) = line.find(quote) {
            body.push(&line[..end]);
            break;
        }
        body.push(*line);
    }

    let mut doc_lines = Vec::with_capacity(body.len() + 1);
    doc_lines.push(opening.trim_end().to_string());
    doc_lines.extend(dedent(&body));
    doc_lines.join("\n").trim().to_string()
}

/// Block comment ending just above `lines[header]`, for JS/TS headers.
///
/// Scans upward, skipping blank lines and the closing `*/`. Lines starting
/// with `*` contribute their text; the `/**` opener ends the block. Any other
/// line means there is no attached comment. Collected lines are joined with
/// single spaces, earliest first.
pub fn jsdoc_comment(lines: &[&str], header: usize) -> String {
    let mut collected: Vec<&str> = Vec::new();

    for line in lines[..header.min(lines.len())].iter().rev() {
        let line = line.trim();

        if line.is_empty() || line.starts_with("*/") {
            continue;
        }

        if let Some(rest) = line.strip_prefix("/**") {
            let text = comment_text(rest);
            if !text.is_empty() {
                collected.push(text);
            }
            collected.reverse();
            return collected.join(" ");
        }

        if let Some(rest) = line.strip_prefix('*') {
            let text = comment_text(rest);
            if !text.is_empty() {
                collected.push(text);
            }
            continue;
        }

        break;
    }

    String::new()
}

fn comment_text(rest: &str) -> &str {
    let rest = rest.trim();
    rest.strip_suffix("*/").unwrap_or(rest).trim()
}

fn dedent(lines: &[&str]) -> Vec<String> {
    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                return String::new();
            }
            line.chars().skip(indent).collect::<String>().trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(src: &str) -> Vec<&str> {
        src.lines().collect()
    }

    #[test]
    fn single_line_docstring() {
        let lines = split("def f():\n    \"\"\"Greets.\"\"\"\n    return 1");
        assert_eq!(python_docstring(&lines, 1), "Greets.");
    }

    #[test]
    fn single_quoted_docstring() {
        let lines = split("class A:\n    '''Single quotes.'''");
        assert_eq!(python_docstring(&lines, 1), "Single quotes.");
    }

    #[test]
    fn multi_line_docstring_is_dedented() {
        let src = "def greet(name):\n    \"\"\"\n    Greet a person.\n\n    Args:\n        name: who\n    \"\"\"\n    pass";
        let lines = split(src);
        assert_eq!(
            python_docstring(&lines, 1),
            "Greet a person.\n\nArgs:\n    name: who"
        );
    }

    #[test]
    fn docstring_text_on_opening_line() {
        let src = "def f():\n    \"\"\"Summary line.\n\n    More detail.\n    \"\"\"";
        let lines = split(src);
        assert_eq!(python_docstring(&lines, 1), "Summary line.\n\nMore detail.");
    }

    #[test]
    fn empty_docstring() {
        let lines = split("def f():\n    \"\"\"\"\"\"");
        assert_eq!(python_docstring(&lines, 1), "");
    }

    #[test]
    fn unterminated_docstring_runs_to_end() {
        let lines = split("def f():\n    \"\"\"Starts here\n    and never ends");
        assert_eq!(python_docstring(&lines, 1), "Starts here\nand never ends");
    }

    #[test]
    fn no_docstring_after_header() {
        let lines = split("def f():\n    return 1");
        assert_eq!(python_docstring(&lines, 1), "");
        assert_eq!(python_docstring(&lines, 5), "");
    }

    #[test]
    fn jsdoc_block_above_header() {
        let src = "/**\n * Adds two numbers.\n * @param a first\n */\nfunction add(a, b) {}";
        let lines = split(src);
        assert_eq!(jsdoc_comment(&lines, 4), "Adds two numbers. @param a first");
    }

    #[test]
    fn jsdoc_skips_blank_lines() {
        let src = "/** Opening text\n *\n * Second.\n */\n\nexport function go() {}";
        let lines = split(src);
        assert_eq!(jsdoc_comment(&lines, 5), "Opening text Second.");
    }

    #[test]
    fn one_line_jsdoc() {
        let lines = split("/** Divides. */\nexport const divide = (a, b) => a / b;");
        assert_eq!(jsdoc_comment(&lines, 1), "Divides.");
    }

    #[test]
    fn code_line_breaks_association() {
        let src = "/**\n * Belongs to x.\n */\nconst x = 1;\nfunction next() {}";
        let lines = split(src);
        assert_eq!(jsdoc_comment(&lines, 4), "");
    }

    #[test]
    fn block_without_opener_is_not_a_comment() {
        let src = "const y = 2;\n * stray\nfunction f() {}";
        let lines = split(src);
        assert_eq!(jsdoc_comment(&lines, 2), "");
    }

    #[test]
    fn plain_block_comment_is_ignored() {
        let src = "/*\n * Not a doc comment.\n */\nfunction f() {}";
        let lines = split(src);
        assert_eq!(jsdoc_comment(&lines, 3), "");
    }

    #[test]
    fn header_on_first_line() {
        let lines = split("function first() {}");
        assert_eq!(jsdoc_comment(&lines, 0), "");
    }
}
