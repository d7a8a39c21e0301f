//! HTML rendering for formatted summaries.

use crate::error::Result;
use crate::model::{Block, Document, Paragraph};

use super::RenderOptions;

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML renderer.
///
/// Headings become `<hN>` tags, lists become `<ul>` with one `<li>` per
/// item, whole-section paragraphs render inside the section container, and
/// paragraph fragments render as bare `<p>` tags. All text content is
/// escaped. Blocks render in document order, one per line.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to HTML.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        for block in &doc.blocks {
            self.render_block(&mut output, block);
        }

        Ok(output.trim_end().to_string())
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading { text } => {
                let level = self.options.heading_level;
                output.push_str(&format!("<h{}>{}</h{}>\n", level, escape_html(text), level));
            }
            Block::List { items } => {
                output.push_str("<ul>");
                for item in items {
                    output.push_str(&format!("<li>{}</li>", escape_html(item)));
                }
                output.push_str("</ul>\n");
            }
            Block::Paragraph(p) => self.render_paragraph(output, p),
        }
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.standalone {
            output.push_str(&format!(
                "<div class=\"{}\"><p>{}</p></div>\n",
                self.options.section_class,
                escape_html(&para.text)
            ));
        } else {
            output.push_str(&format!("<p>{}</p>\n", escape_html(&para.text)));
        }
    }
}

/// Escape text for use in HTML element content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
