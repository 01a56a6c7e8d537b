//! Convert editor JSON to the typed document tree
//!
//! This module maps the editor's JSON wire shape (ProseMirror/TipTap style
//! `{type, attrs, content, text, marks}` objects) onto the `Node` model in
//! prosedown-core. The mapping is deliberately liberal: unrecognized node
//! types become `Node::Other`, unrecognized marks become `Mark::Unknown`,
//! and missing or ill-typed fields fall back to defaults, so conversion
//! never fails.

use prosedown_core::{Mark, Node};
use serde_json::Value;

/// Convert a JSON document value to a typed document tree
pub fn from_value(value: &Value) -> Node {
    let node_type = value.get("type").and_then(Value::as_str).unwrap_or("");

    match node_type {
        "doc" => Node::Doc {
            content: convert_children(value),
        },

        "paragraph" => Node::Paragraph {
            content: convert_children(value),
        },

        "heading" => Node::Heading {
            level: attr_u64(value, "level").unwrap_or(1) as u8,
            content: convert_children(value),
        },

        "blockquote" => Node::Blockquote {
            content: convert_children(value),
        },

        "bulletList" => Node::BulletList {
            content: convert_children(value),
        },

        "orderedList" => Node::OrderedList {
            start: attr_u64(value, "start").unwrap_or(1) as u32,
            content: convert_children(value),
        },

        "listItem" => Node::ListItem {
            content: convert_children(value),
        },

        "taskList" => Node::TaskList {
            content: convert_children(value),
        },

        "taskItem" => Node::TaskItem {
            checked: attr_bool(value, "checked").unwrap_or(false),
            content: convert_children(value),
        },

        "codeBlock" => Node::CodeBlock {
            language: attr_str(value, "language"),
            content: convert_children(value),
        },

        "table" => Node::Table {
            content: convert_children(value),
        },

        "tableRow" => Node::TableRow {
            content: convert_children(value),
        },

        "tableHeader" => Node::TableHeader {
            content: convert_children(value),
        },

        "tableCell" => Node::TableCell {
            content: convert_children(value),
        },

        "text" => Node::Text {
            text: value
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            marks: convert_marks(value),
        },

        _ => Node::Other {
            content: convert_children(value),
        },
    }
}

fn convert_children(value: &Value) -> Vec<Node> {
    value
        .get("content")
        .and_then(Value::as_array)
        .map(|children| children.iter().map(from_value).collect())
        .unwrap_or_default()
}

fn convert_marks(value: &Value) -> Vec<Mark> {
    value
        .get("marks")
        .and_then(Value::as_array)
        .map(|marks| marks.iter().map(convert_mark).collect())
        .unwrap_or_default()
}

fn convert_mark(value: &Value) -> Mark {
    match value.get("type").and_then(Value::as_str).unwrap_or("") {
        "italic" => Mark::Italic,
        "bold" => Mark::Bold,
        "strike" => Mark::Strike,
        "code" => Mark::Code,
        "mmLink" => Mark::Link {
            href: attr_str(value, "href"),
        },
        _ => Mark::Unknown,
    }
}

fn attr<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get("attrs")?.get(name)
}

fn attr_str(value: &Value, name: &str) -> Option<String> {
    attr(value, name)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn attr_u64(value: &Value, name: &str) -> Option<u64> {
    attr(value, name).and_then(Value::as_u64)
}

fn attr_bool(value: &Value, name: &str) -> Option<bool> {
    attr(value, name).and_then(Value::as_bool)
}
