//! Translation of the lightweight summary/advice markup into HTML fragments.
//!
//! Three rules are applied in order:
//!
//! 1. every `**` emphasis marker is stripped (rendered as plain text),
//! 2. a line starting with `###` becomes an `<h3>` subsection heading,
//! 3. every line break becomes `<br>`.
//!
//! This is a substitution pass, not a markdown parser. Markers that do not
//! match a rule, such as a lone `*` or `###` in the middle of a line, are
//! left in the output as they are.

pub const EMPHASIS_MARKER: &str = "**";
pub const HEADING_MARKER: &str = "###";

const LINE_BREAK_TAG: &str = "<br>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Heading(String),
    Text(String),
    LineBreak,
}

/// Splits `input` into nodes, stripping emphasis markers along the way.
pub fn parse(input: &str) -> Vec<MarkupNode> {
    let mut nodes = Vec::new();

    for (idx, raw_line) in input.split('\n').enumerate() {
        if idx > 0 {
            nodes.push(MarkupNode::LineBreak);
        }

        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let line = line.replace(EMPHASIS_MARKER, "");

        match line.strip_prefix(HEADING_MARKER) {
            Some(heading) => nodes.push(MarkupNode::Heading(heading.trim().to_string())),
            None if line.is_empty() => {}
            None => nodes.push(MarkupNode::Text(line)),
        }
    }

    nodes
}

pub fn to_html(nodes: &[MarkupNode]) -> String {
    let mut html = String::new();
    for node in nodes {
        match node {
            MarkupNode::Heading(text) => {
                html.push_str("<h3>");
                html.push_str(text);
                html.push_str("</h3>");
            }
            MarkupNode::Text(text) => html.push_str(text),
            MarkupNode::LineBreak => html.push_str(LINE_BREAK_TAG),
        }
    }
    html
}

pub fn translate(input: &str) -> String {
    to_html(&parse(input))
}
