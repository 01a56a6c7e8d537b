//! # prosedown-json
//!
//! Convert editor JSON documents to Markdown.
//!
//! The message composer's editor serializes its document as a
//! ProseMirror/TipTap-style JSON tree. This crate maps that wire shape onto
//! the typed model in `prosedown-core` and exposes one-call conversion to
//! Markdown.
//!
//! ## Example
//!
//! ```rust
//! let markdown = prosedown_json::markdown_from_str(
//!     r#"{
//!         "type": "doc",
//!         "content": [
//!             {
//!                 "type": "heading",
//!                 "attrs": {"level": 1},
//!                 "content": [{"type": "text", "text": "Hello"}]
//!             }
//!         ]
//!     }"#,
//! ).unwrap();
//! assert_eq!(markdown, "# Hello");
//! ```

mod convert;

pub use convert::from_value;

use prosedown_core::{serialize, Node};
use serde_json::Value;

/// Error type for JSON document conversion
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse JSON text into a typed document tree
pub fn from_str(input: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(input)?;
    Ok(from_value(&value))
}

/// Convert an already-parsed JSON document value to Markdown
pub fn markdown_from_value(value: &Value) -> String {
    serialize(&from_value(value))
}

/// Parse JSON text and convert it to Markdown in one call
pub fn markdown_from_str(input: &str) -> Result<String> {
    Ok(serialize(&from_str(input)?))
}
