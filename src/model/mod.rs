//! Document model types for formatted summary content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! summary segmentation and output rendering. The model is format-agnostic:
//! the same document renders to HTML, plain text, or JSON.

mod block;
mod document;

pub use block::{Block, Paragraph};
pub use document::Document;
