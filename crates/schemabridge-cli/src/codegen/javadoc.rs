//! Transcription of schema documentation into Javadoc comments.

use schemabridge_core::{Doc, DocBlock, DocSpan};

/// Render `doc` as a Javadoc comment at `indent`; empty docs render as nothing.
///
/// Paragraphs are separated by `<p>`, preformatted blocks become `<pre>`, and
/// code spans become `{@code ...}` unless their text would break the inline
/// tag, in which case `<code>` is used.
pub fn javadoc(doc: &Doc, indent: &str) -> String {
    if doc.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();
    for (i, block) in doc.blocks.iter().enumerate() {
        if i > 0 {
            lines.push("<p>".to_string());
        }
        match block {
            DocBlock::Paragraph { spans } => {
                let text: String = spans.iter().map(render_span).collect();
                lines.extend(text.lines().map(|line| line.trim_end().to_string()));
            }
            DocBlock::Pre { text } => {
                lines.push("<pre>".to_string());
                lines.extend(text.lines().map(escape_html));
                lines.push("</pre>".to_string());
            }
        }
    }

    let mut out = format!("{indent}/**\n");
    for line in lines {
        if line.is_empty() {
            out.push_str(&format!("{indent} *\n"));
        } else {
            out.push_str(&format!("{indent} * {line}\n"));
        }
    }
    out.push_str(&format!("{indent} */\n"));
    out
}

/// [`javadoc`] of an optional doc
pub fn javadoc_opt(doc: Option<&Doc>, indent: &str) -> String {
    doc.map(|doc| javadoc(doc, indent)).unwrap_or_default()
}

fn render_span(span: &DocSpan) -> String {
    match span {
        DocSpan::Text { text } => escape_html(text),
        DocSpan::Code { text } if fits_code_tag(text) => format!("{{@code {text}}}"),
        DocSpan::Code { text } => format!("<code>{}</code>", escape_html(text)),
    }
}

/// Whether `text` can sit verbatim inside `{@code ...}`
fn fits_code_tag(text: &str) -> bool {
    let mut depth = 0i32;
    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            '\\' | '\n' => return false,
            _ => {}
        }
    }
    depth == 0 && !text.contains("*/")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '@' => out.push_str("&#64;"),
            '\\' => out.push_str("&#92;"),
            '/' if out.ends_with('*') => out.push_str("&#47;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn paragraph(spans: Vec<DocSpan>) -> DocBlock {
        DocBlock::Paragraph { spans }
    }

    fn text(t: &str) -> DocSpan {
        DocSpan::Text {
            text: t.to_string(),
        }
    }

    fn code(t: &str) -> DocSpan {
        DocSpan::Code {
            text: t.to_string(),
        }
    }

    #[test]
    fn javadoc___empty___renders_nothing() {
        assert_eq!(javadoc(&Doc::default(), ""), "");
        assert_eq!(javadoc_opt(None, "  "), "");
    }

    #[test]
    fn javadoc___single_paragraph___renders_block_comment() {
        let doc = Doc::text("A color.");

        assert_eq!(javadoc(&doc, "  "), "  /**\n   * A color.\n   */\n");
    }

    #[test]
    fn javadoc___paragraphs___separated_by_p() {
        let doc = Doc {
            blocks: vec![paragraph(vec![text("One.")]), paragraph(vec![text("Two.")])],
        };

        assert_eq!(javadoc(&doc, ""), "/**\n * One.\n * <p>\n * Two.\n */\n");
    }

    #[test]
    fn javadoc___code_span___uses_code_tag() {
        let doc = Doc {
            blocks: vec![paragraph(vec![text("Use "), code("make(s)"), text(".")])],
        };

        assert!(javadoc(&doc, "").contains(" * Use {@code make(s)}.\n"));
    }

    #[test]
    fn javadoc___unbalanced_code_span___falls_back_to_html() {
        let doc = Doc {
            blocks: vec![paragraph(vec![code("a } b < c")])],
        };

        assert!(javadoc(&doc, "").contains("<code>a } b &lt; c</code>"));
    }

    #[test]
    fn javadoc___pre_block___is_escaped_and_wrapped() {
        let doc = Doc {
            blocks: vec![DocBlock::Pre {
                text: "x < y\nz".to_string(),
            }],
        };

        assert_eq!(
            javadoc(&doc, ""),
            "/**\n * <pre>\n * x &lt; y\n * z\n * </pre>\n */\n"
        );
    }

    #[test]
    fn javadoc___comment_terminator___is_neutralized() {
        let doc = Doc::text("ends */ here @param");

        let rendered = javadoc(&doc, "");

        assert!(rendered.contains("ends *&#47; here &#64;param"));
        assert_eq!(rendered.matches("*/").count(), 1);
    }
}
