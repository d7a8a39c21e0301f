//! The two-state formatted/raw display toggle.

use crate::error::Result;
use crate::segment::Segmenter;

use super::html::escape_html;
use super::{to_html, RenderOptions};

/// Display state of a summary: formatted markup or the raw source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryView {
    /// Structured headings, lists, and paragraphs
    #[default]
    Formatted,
    /// The source text verbatim, preformatted
    Raw,
}

impl SummaryView {
    /// The other view state.
    pub fn toggled(self) -> Self {
        match self {
            SummaryView::Formatted => SummaryView::Raw,
            SummaryView::Raw => SummaryView::Formatted,
        }
    }

    /// Check if this is the raw view.
    pub fn is_raw(self) -> bool {
        self == SummaryView::Raw
    }
}

/// Render the summary in the given view state.
///
/// Stateless by contract: each call reads the raw text fresh and, for the
/// formatted view, re-runs segmentation from scratch, so toggling back and
/// forth reproduces identical output.
///
/// The formatted view never renders blank for non-empty input: if
/// segmentation yields no blocks, the trimmed source is emitted as one
/// escaped block instead.
pub fn render_view(raw: &str, view: SummaryView, options: &RenderOptions) -> Result<String> {
    render_view_with(raw, view, &Segmenter::new(), options)
}

/// [`render_view`] with a custom segmenter.
pub fn render_view_with(
    raw: &str,
    view: SummaryView,
    segmenter: &Segmenter,
    options: &RenderOptions,
) -> Result<String> {
    match view {
        SummaryView::Formatted => {
            let doc = segmenter.segment(raw);
            let html = to_html(&doc, options)?;
            if html.is_empty() {
                let text = raw.trim();
                if !text.is_empty() {
                    log::warn!("segmentation produced no blocks; rendering source verbatim");
                    return Ok(escape_html(text));
                }
            }
            Ok(html)
        }
        SummaryView::Raw => Ok(format!(
            "<div class=\"{}\"><pre>{}</pre></div>",
            options.raw_view_class,
            escape_html(raw)
        )),
    }
}
