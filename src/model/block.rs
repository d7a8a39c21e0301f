//! Block-level types.

use serde::{Deserialize, Serialize};

/// A content block in a formatted summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A short section heading
    Heading {
        /// Heading text
        text: String,
    },

    /// A bullet list
    List {
        /// List items in source order
        items: Vec<String>,
    },

    /// A prose paragraph
    Paragraph(Paragraph),
}

impl Block {
    /// Create a heading block.
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading { text: text.into() }
    }

    /// Create a list block.
    pub fn list(items: Vec<String>) -> Self {
        Block::List { items }
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text } => text.clone(),
            Block::List { items } => items.join("\n"),
            Block::Paragraph(p) => p.text.clone(),
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Block::List { .. })
    }

    /// Check if this is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

/// A prose paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// The paragraph text
    pub text: String,

    /// Whether the paragraph spans an entire source section.
    ///
    /// Section paragraphs keep their inner line breaks and render inside the
    /// section container element. Fragments are flushed out of a mixed
    /// prose-and-list section with their lines joined by spaces, and render
    /// as bare paragraphs.
    pub standalone: bool,
}

impl Paragraph {
    /// Create a paragraph covering a whole source section.
    pub fn section(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            standalone: true,
        }
    }

    /// Create a paragraph fragment from within a mixed section.
    pub fn fragment(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            standalone: false,
        }
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
