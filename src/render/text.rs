//! Plain text rendering for formatted summaries.

use crate::error::Result;
use crate::model::{Block, Document};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Blocks are separated by blank lines; list items are prefixed with the
/// configured marker character.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let rendered: Vec<String> = doc
        .blocks
        .iter()
        .map(|block| match block {
            Block::Heading { text } => text.clone(),
            Block::List { items } => items
                .iter()
                .map(|item| format!("{} {}", options.list_marker, item))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Paragraph(p) => p.text.clone(),
        })
        .collect();

    Ok(rendered.join("\n\n"))
}
