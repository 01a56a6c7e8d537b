//! prosedown-core - rich-text document model and Markdown serialization
//!
//! This crate provides the typed document tree produced by the message
//! composer's editor and the serializer that turns it into Markdown. It is
//! dependency-free; `prosedown-json` layers the editor's JSON wire shape on
//! top of it.
//!
//! # Architecture
//!
//! ```text
//! Editor JSON ──prosedown-json──▶ ┌───────────────┐
//!                                 │               │
//!                                 │ Document tree │ ──▶ Markdown String
//! Typed Node values ─────────────▶│               │
//!                                 └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use prosedown_core::{serialize, Mark, Node};
//!
//! let doc = Node::Doc {
//!     content: vec![
//!         Node::heading(1, vec![Node::text("Hello World")]),
//!         Node::paragraph(vec![
//!             Node::text("This is "),
//!             Node::marked_text("bold", vec![Mark::Bold]),
//!             Node::text(" text."),
//!         ]),
//!     ],
//! };
//!
//! let markdown = serialize(&doc);
//! assert_eq!(markdown, "# Hello World\n\nThis is **bold** text.");
//! ```

mod node;
mod serialize;

pub use node::{Mark, Node};
pub use serialize::serialize;
