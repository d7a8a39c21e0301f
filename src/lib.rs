//! # summark
//!
//! Formats AI-generated summary text into structured markup.
//!
//! Raw summaries arrive as plain text: paragraphs separated by blank lines,
//! with the occasional short heading line and bullet list mixed in. summark
//! classifies each section into headings, bullet lists, and prose
//! paragraphs, and renders the result as HTML, plain text, or JSON. A
//! two-state view toggle switches between the formatted markup and the
//! verbatim preformatted source.
//!
//! Segmentation is deterministic and never fails: malformed text degrades
//! into paragraph output, and non-empty input never renders blank.
//!
//! ## Quick Start
//!
//! ```
//! use summark::{format_str, render, RenderOptions};
//!
//! fn main() -> summark::Result<()> {
//!     let doc = format_str("Key Findings\n\n- Stress levels are moderate.\n- Sleep is consistent.");
//!     let html = render::to_html(&doc, &RenderOptions::default())?;
//!     assert!(html.contains("<h4>Key Findings</h4>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple output formats**: HTML, plain text, JSON
//! - **Structure recovery**: headings, bullet lists, prose paragraphs
//! - **Formatted/raw view toggle**: stateless, idempotent
//! - **Page logic**: quiz progress tiers, form validation state, booking
//!   date windows, password strength scoring

pub mod error;
pub mod model;
pub mod page;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, Document, Paragraph};
pub use render::{JsonFormat, RenderOptions, SummaryView};
pub use segment::{SegmentOptions, Segmenter};

use std::fs;
use std::path::Path;

/// Segment raw summary text into a structured document.
///
/// # Example
///
/// ```
/// use summark::format_str;
///
/// let doc = format_str("Recommendations\n\n- Sleep more.\n- Walk daily.");
/// assert_eq!(doc.heading_count(), 1);
/// assert_eq!(doc.list_item_count(), 2);
/// ```
pub fn format_str(raw: &str) -> Document {
    segment::segment(raw)
}

/// Read a summary text file and segment it into a structured document.
///
/// # Example
///
/// ```no_run
/// use summark::format_file;
///
/// let doc = format_file("summary.txt").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn format_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let raw = fs::read_to_string(path)?;
    Ok(format_str(&raw))
}

/// Convert a summary text file to HTML with default options.
///
/// # Example
///
/// ```no_run
/// use summark::to_html;
///
/// let html = to_html("summary.txt").unwrap();
/// std::fs::write("summary.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = format_file(path)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Convert a summary text file to plain text with default options.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = format_file(path)?;
    render::to_text(&doc, &RenderOptions::default())
}

/// Convert a summary text file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = format_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for segmenting and rendering summaries.
///
/// # Example
///
/// ```
/// use summark::{Summark, SummaryView};
///
/// fn main() -> summark::Result<()> {
///     let html = Summark::new()
///         .heading_level(3)
///         .section_class("prose")
///         .format("Overview\n\nAll signals look stable.")
///         .view(SummaryView::Formatted)?;
///     assert!(html.contains("<h3>Overview</h3>"));
///     Ok(())
/// }
/// ```
pub struct Summark {
    segment_options: SegmentOptions,
    render_options: RenderOptions,
}

impl Summark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            segment_options: SegmentOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the heading length cutoff, in characters.
    pub fn heading_max_chars(mut self, max: usize) -> Self {
        self.segment_options = self.segment_options.with_heading_max_chars(max);
        self
    }

    /// Set the recognized bullet marker characters.
    pub fn bullet_markers(mut self, markers: impl Into<Vec<char>>) -> Self {
        self.segment_options = self.segment_options.with_bullet_markers(markers);
        self
    }

    /// Set the heading tag level (1-6).
    pub fn heading_level(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_heading_level(level);
        self
    }

    /// Set the section container CSS class.
    pub fn section_class(mut self, class: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_section_class(class);
        self
    }

    /// Set the plain-text list marker character.
    pub fn list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Segment raw summary text and return a result wrapper.
    pub fn format(self, raw: impl Into<String>) -> SummarkResult {
        let raw = raw.into();
        let segmenter = Segmenter::with_options(self.segment_options);
        let document = segmenter.segment(&raw);
        SummarkResult {
            raw,
            document,
            segmenter,
            render_options: self.render_options,
        }
    }

    /// Read a summary text file, segment it, and return a result wrapper.
    pub fn format_file<P: AsRef<Path>>(self, path: P) -> Result<SummarkResult> {
        let raw = fs::read_to_string(path)?;
        Ok(self.format(raw))
    }
}

impl Default for Summark {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of segmenting a summary.
pub struct SummarkResult {
    raw: String,
    /// The segmented document
    pub document: Document,
    segmenter: Segmenter,
    render_options: RenderOptions,
}

impl SummarkResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Render in the given view state. The formatted view re-runs
    /// segmentation from the stored raw text, so toggling is stateless.
    pub fn view(&self, view: SummaryView) -> Result<String> {
        render::render_view_with(&self.raw, view, &self.segmenter, &self.render_options)
    }

    /// The raw source text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The segmented document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
