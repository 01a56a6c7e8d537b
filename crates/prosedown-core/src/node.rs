//! Rich-text document model
//!
//! This module defines the typed node tree produced by the message composer's
//! editor. Block structure is a tree of `Node` values; inline formatting is an
//! ordered list of `Mark`s attached to each text run.

/// A node of the editor document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Root document container
    Doc { content: Vec<Node> },

    /// Paragraph containing inline text runs
    Paragraph { content: Vec<Node> },

    /// Heading with level (1-6)
    Heading { level: u8, content: Vec<Node> },

    /// Block quote containing nested blocks
    Blockquote { content: Vec<Node> },

    /// Unordered list of list items
    BulletList { content: Vec<Node> },

    /// Ordered list of list items, numbered from `start`
    OrderedList { start: u32, content: Vec<Node> },

    /// A single item of a bullet or ordered list
    ListItem { content: Vec<Node> },

    /// Checkbox list of task items
    TaskList { content: Vec<Node> },

    /// A single item of a task list
    TaskItem { checked: bool, content: Vec<Node> },

    /// Fenced code block with optional language tag
    CodeBlock {
        language: Option<String>,
        content: Vec<Node>,
    },

    /// Table containing rows
    Table { content: Vec<Node> },

    /// A row of header or data cells
    TableRow { content: Vec<Node> },

    /// A header cell
    TableHeader { content: Vec<Node> },

    /// A data cell
    TableCell { content: Vec<Node> },

    /// A leaf text run with its formatting marks
    Text { text: String, marks: Vec<Mark> },

    /// Any node type the model does not recognize.
    /// Rendered through the default (paragraph) branch rather than failing,
    /// so schema additions upstream never break conversion.
    Other { content: Vec<Node> },
}

/// An inline formatting mark attached to a text run.
///
/// Marks apply in list order: the first mark wraps the raw text, each
/// subsequent mark wraps the result of the previous one.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Emphasis, `*text*`
    Italic,

    /// Strong emphasis, `**text**`
    Bold,

    /// Strikethrough, `~~text~~`
    Strike,

    /// Inline code, `` `text` ``
    Code,

    /// Link, `[text](href)`. Without an href the mark degrades to
    /// plain text rather than erroring.
    Link { href: Option<String> },

    /// Any mark type the model does not recognize; passes text through
    Unknown,
}

impl Mark {
    /// Wrap inline text in this mark's Markdown delimiter
    pub fn apply(&self, text: String) -> String {
        match self {
            Mark::Italic => format!("*{text}*"),
            Mark::Bold => format!("**{text}**"),
            Mark::Strike => format!("~~{text}~~"),
            Mark::Code => format!("`{text}`"),
            Mark::Link { href: Some(href) } => format!("[{text}]({href})"),
            Mark::Link { href: None } => text,
            Mark::Unknown => text,
        }
    }
}

impl Node {
    /// Create a plain text run
    pub fn text(text: &str) -> Self {
        Node::Text {
            text: text.to_string(),
            marks: Vec::new(),
        }
    }

    /// Create a text run with formatting marks
    pub fn marked_text(text: &str, marks: Vec<Mark>) -> Self {
        Node::Text {
            text: text.to_string(),
            marks,
        }
    }

    /// Create a paragraph over inline content
    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::Paragraph { content }
    }

    /// Create a heading over inline content
    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        Node::Heading { level, content }
    }

    /// Create a list item wrapping a single paragraph
    pub fn item(content: Vec<Node>) -> Self {
        Node::ListItem {
            content: vec![Node::Paragraph { content }],
        }
    }

    /// Child nodes of this node; empty for text runs
    pub fn content(&self) -> &[Node] {
        match self {
            Node::Doc { content }
            | Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::Blockquote { content }
            | Node::BulletList { content }
            | Node::OrderedList { content, .. }
            | Node::ListItem { content }
            | Node::TaskList { content }
            | Node::TaskItem { content, .. }
            | Node::CodeBlock { content, .. }
            | Node::Table { content }
            | Node::TableRow { content }
            | Node::TableHeader { content }
            | Node::TableCell { content }
            | Node::Other { content } => content,
            Node::Text { .. } => &[],
        }
    }
}
