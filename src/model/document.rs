//! Document-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// A formatted summary document: an ordered sequence of content blocks.
///
/// Concatenating the blocks' plain text reconstructs the non-whitespace
/// content of the source summary; bullets and headings are reclassified,
/// never dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Content blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks in the document.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get the number of heading blocks.
    pub fn heading_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_heading()).count()
    }

    /// Get the number of list blocks.
    pub fn list_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_list()).count()
    }

    /// Get the total number of list items across all lists.
    pub fn list_item_count(&self) -> usize {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::List { items } => Some(items.len()),
                _ => None,
            })
            .sum()
    }

    /// Get the number of paragraph blocks.
    pub fn paragraph_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_paragraph()).count()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
