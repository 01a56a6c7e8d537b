//! Document tree serialization
//!
//! Converts the editor's node tree into Markdown text. The walk threads two
//! pieces of context downward: the line prefix (quote marker, bullet, or
//! ordered-list counter) and a table flag that switches paragraphs and code
//! blocks to inline-cell emission.

use crate::node::Node;

/// Line-leading context threaded through the recursive walk.
///
/// Ordered lists seed a numeric counter; each list item turns the counter
/// plus its sibling index into its own rendered label.
#[derive(Debug, Clone, PartialEq)]
enum Prefix {
    /// No line prefix
    None,
    /// Literal prefix written at the start of each block line
    Line(String),
    /// Ordered-list numbering seed
    Counter(u32),
}

impl Prefix {
    fn write_line_start(&self, out: &mut String) {
        if let Prefix::Line(s) = self {
            out.push_str(s);
        }
    }
}

/// Serialize a document tree to a Markdown string.
///
/// Total over the documented model: unknown node types render through the
/// default branch and unknown marks pass text through, so the function never
/// fails. The result carries no leading or trailing whitespace.
pub fn serialize(doc: &Node) -> String {
    let mut out = String::with_capacity(256);
    emit_siblings(std::slice::from_ref(doc), &Prefix::None, false, &mut out);
    out.trim().to_string()
}

fn emit_siblings(nodes: &[Node], prefix: &Prefix, in_table: bool, out: &mut String) {
    let count = nodes.len();
    for (index, node) in nodes.iter().enumerate() {
        emit_node(node, index, count, prefix, in_table, out);
    }
}

fn emit_node(
    node: &Node,
    index: usize,
    count: usize,
    prefix: &Prefix,
    in_table: bool,
    out: &mut String,
) {
    match node {
        Node::Text { text, marks } => {
            // Blank runs emit nothing so an empty bold run never
            // produces a stray `****`.
            if text.trim().is_empty() {
                return;
            }
            let rendered = marks.iter().fold(text.clone(), |acc, mark| mark.apply(acc));
            out.push_str(&rendered);
        }

        Node::Heading { level, content } => {
            prefix.write_line_start(out);
            for _ in 0..*level {
                out.push('#');
            }
            out.push(' ');
            emit_siblings(content, &Prefix::None, in_table, out);
            if !in_table {
                out.push_str("\n\n");
            }
        }

        Node::CodeBlock { language, content } => {
            if in_table {
                // Inline-cell style: no fence inside tables
                emit_siblings(content, &Prefix::None, in_table, out);
            } else {
                out.push_str("```");
                out.push_str(language.as_deref().unwrap_or(""));
                out.push('\n');
                emit_siblings(content, &Prefix::None, in_table, out);
                out.push_str("\n```\n\n");
            }
        }

        Node::Blockquote { content } => {
            emit_siblings(content, &Prefix::Line("> ".to_string()), in_table, out);
        }

        Node::BulletList { content } => {
            emit_siblings(content, &Prefix::Line("- ".to_string()), in_table, out);
        }

        Node::OrderedList { start, content } => {
            emit_siblings(content, &Prefix::Counter(*start), in_table, out);
        }

        Node::ListItem { content } => {
            let item_prefix = match prefix {
                Prefix::Counter(n) => Prefix::Line(format!("{}. ", n + index as u32)),
                other => other.clone(),
            };
            emit_siblings(content, &item_prefix, in_table, out);
            if index + 1 == count {
                out.push_str(if in_table { "\n" } else { "\n\n" });
            }
        }

        Node::TaskList { content } => {
            emit_siblings(content, &Prefix::None, in_table, out);
        }

        Node::TaskItem { checked, content } => {
            let marker = if *checked { "- [x] " } else { "- [ ] " };
            emit_siblings(content, &Prefix::Line(marker.to_string()), in_table, out);
            if index + 1 == count {
                out.push_str(if in_table { "\n" } else { "\n\n" });
            }
        }

        Node::Table { content } => {
            emit_siblings(content, &Prefix::None, true, out);
        }

        Node::TableRow { content } => {
            out.push_str("| ");
            emit_siblings(content, &Prefix::None, true, out);
            out.push('\n');
        }

        Node::TableHeader { content } => {
            emit_siblings(content, &Prefix::None, true, out);
            out.push_str(" |");
            // The last header cell closes the row with the GFM divider,
            // one segment per header cell.
            if index + 1 == count {
                out.push('\n');
                for _ in 0..count {
                    out.push_str("|---");
                }
                out.push('|');
            }
        }

        Node::TableCell { content } => {
            emit_siblings(content, &Prefix::None, true, out);
            out.push_str(" |");
        }

        // Doc and unrecognized nodes render like paragraphs: best-effort
        // concatenation of children rather than a hard failure.
        Node::Paragraph { content } | Node::Doc { content } | Node::Other { content } => {
            prefix.write_line_start(out);
            emit_siblings(content, &Prefix::None, in_table, out);
            if !in_table {
                out.push('\n');
            }
        }
    }
}
