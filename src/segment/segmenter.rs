//! The section classifier and line-level list machine.

use crate::model::{Block, Document, Paragraph};

use super::SegmentOptions;

/// Segment raw summary text into a document with default options.
pub fn segment(raw: &str) -> Document {
    Segmenter::new().segment(raw)
}

/// Splits raw summary text into sections and classifies each into a
/// heading, list, or paragraph block.
///
/// Sections are blank-line-delimited chunks. A section that opens with a
/// bullet marker is list content. Otherwise it is a heading when it is
/// shorter than the configured cutoff, does not start with a lowercase
/// letter, and contains no period. Failing that, a marker anywhere in the
/// section sends its lines through the list machine; anything else is a
/// single prose paragraph.
///
/// The heading test is intentionally naive: a short, period-free prose
/// sentence classifies as a heading. Output parity with the production
/// heuristics matters more than linguistic accuracy here.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    options: SegmentOptions,
}

/// State of the line machine inside a list-bearing section.
enum LineState {
    /// Collecting prose lines into a pending paragraph
    Accumulating { buffer: String },
    /// Collecting marker lines into an open list
    InList { items: Vec<String> },
}

impl Segmenter {
    /// Create a segmenter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with custom options.
    pub fn with_options(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// Segment raw summary text into a document.
    ///
    /// Deterministic and infallible: the same input always yields the same
    /// document, and malformed text degrades into paragraph blocks.
    pub fn segment(&self, raw: &str) -> Document {
        let text = raw.trim();
        let mut doc = Document::new();

        for section in text.split("\n\n") {
            let section = section.trim();
            if section.is_empty() {
                continue;
            }

            if self.is_marker_line(section) {
                // A section that opens with a bullet is list content no
                // matter how short or period-free it is.
                self.run_line_machine(section, &mut doc.blocks);
            } else if self.is_heading(section) {
                doc.add_block(Block::heading(section));
            } else if self.contains_marker(section) {
                self.run_line_machine(section, &mut doc.blocks);
            } else {
                doc.add_block(Paragraph::section(section).into());
            }
        }

        log::debug!(
            "segmented {} chars into {} blocks ({} headings, {} lists, {} paragraphs)",
            text.len(),
            doc.block_count(),
            doc.heading_count(),
            doc.list_count(),
            doc.paragraph_count()
        );

        doc
    }

    /// Heading test: short, no period, and the first character equals its
    /// own uppercase mapping (i.e. the section does not start with a
    /// lowercase letter; digits and symbols qualify).
    fn is_heading(&self, section: &str) -> bool {
        if section.chars().count() >= self.options.heading_max_chars {
            return false;
        }
        if section.contains('.') {
            return false;
        }
        match section.chars().next() {
            Some(c) => uppercases_to_itself(c),
            None => false,
        }
    }

    /// A marker anywhere in the section routes it through the line machine,
    /// even mid-word: a hyphenated phrase qualifies, and its lines then all
    /// accumulate into one flushed paragraph.
    fn contains_marker(&self, section: &str) -> bool {
        section.contains(self.options.bullet_markers.as_slice())
    }

    fn is_marker_line(&self, line: &str) -> bool {
        line.starts_with(self.options.bullet_markers.as_slice())
    }

    /// Walk the section's lines with two states: `Accumulating` prose and
    /// `InList`. A marker line flushes pending prose as a paragraph fragment
    /// and extends the open list; a non-empty prose line closes the open
    /// list. Lines that trim to empty change no state, so a stray blank line
    /// does not split a list in two.
    fn run_line_machine(&self, section: &str, blocks: &mut Vec<Block>) {
        let mut state = LineState::Accumulating {
            buffer: String::new(),
        };

        for line in section.lines() {
            let line = line.trim();

            if self.is_marker_line(line) {
                let item = strip_marker(line);
                state = match state {
                    LineState::Accumulating { buffer } => {
                        flush_fragment(&buffer, blocks);
                        LineState::InList { items: vec![item] }
                    }
                    LineState::InList { mut items } => {
                        items.push(item);
                        LineState::InList { items }
                    }
                };
            } else if !line.is_empty() {
                state = match state {
                    LineState::InList { items } => {
                        blocks.push(Block::list(items));
                        LineState::Accumulating {
                            buffer: line.to_string(),
                        }
                    }
                    LineState::Accumulating { mut buffer } => {
                        if !buffer.is_empty() {
                            buffer.push(' ');
                        }
                        buffer.push_str(line);
                        LineState::Accumulating { buffer }
                    }
                };
            }
        }

        match state {
            LineState::InList { items } => blocks.push(Block::list(items)),
            LineState::Accumulating { buffer } => flush_fragment(&buffer, blocks),
        }
    }
}

fn flush_fragment(buffer: &str, blocks: &mut Vec<Block>) {
    let text = buffer.trim();
    if !text.is_empty() {
        blocks.push(Paragraph::fragment(text).into());
    }
}

/// Strip exactly one marker character, then trim the remainder.
/// `"-- x"` becomes `"- x"`.
fn strip_marker(line: &str) -> String {
    let mut chars = line.chars();
    chars.next();
    chars.as_str().trim().to_string()
}

/// True when the character's full uppercase mapping is the character itself.
/// Characters with multi-character expansions (e.g. `ß` to `SS`) do not
/// qualify.
fn uppercases_to_itself(c: char) -> bool {
    let mut upper = c.to_uppercase();
    upper.next() == Some(c) && upper.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(raw: &str) -> Vec<Block> {
        segment(raw).blocks
    }

    #[test]
    fn test_heading_classification() {
        assert_eq!(blocks("Key Findings"), vec![Block::heading("Key Findings")]);
    }

    #[test]
    fn test_lowercase_start_is_not_heading() {
        let got = blocks("short but lowercase");
        assert_eq!(
            got,
            vec![Paragraph::section("short but lowercase").into()]
        );
    }

    #[test]
    fn test_period_disqualifies_heading() {
        let got = blocks("This is a summary of the results.");
        assert_eq!(
            got,
            vec![Paragraph::section("This is a summary of the results.").into()]
        );
    }

    #[test]
    fn test_long_section_is_not_heading() {
        let long = "A".repeat(100);
        let got = blocks(&long);
        assert_eq!(got, vec![Paragraph::section(long.as_str()).into()]);
    }

    #[test]
    fn test_length_cutoff_is_exclusive() {
        let just_under = "A".repeat(99);
        assert_eq!(blocks(&just_under), vec![Block::heading(just_under.clone())]);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 99 multibyte characters, well over 100 bytes
        let s = "\u{c9}".repeat(99);
        assert_eq!(blocks(&s), vec![Block::heading(s.clone())]);
    }

    #[test]
    fn test_digit_start_can_be_heading() {
        assert_eq!(
            blocks("1 Current Mental State"),
            vec![Block::heading("1 Current Mental State")]
        );
    }

    #[test]
    fn test_sharp_s_start_is_not_heading() {
        let got = blocks("\u{df}eta notes");
        assert!(got[0].is_paragraph());
    }

    #[test]
    fn test_bullet_initial_section_is_list() {
        // Short and period-free, but the leading bullet routes it to the
        // list machine before the heading test can claim it.
        let got = blocks("- Item one\n- Item two");
        assert_eq!(
            got,
            vec![Block::list(vec!["Item one".into(), "Item two".into()])]
        );
    }

    #[test]
    fn test_simple_list() {
        let got = blocks("Here are the items.\n- Item one\n- Item two");
        assert_eq!(
            got,
            vec![
                Paragraph::fragment("Here are the items.").into(),
                Block::list(vec!["Item one".into(), "Item two".into()]),
            ]
        );
    }

    #[test]
    fn test_list_without_lead_in() {
        // A period keeps the section out of the heading branch.
        let got = blocks("- Item one.\n- Item two.");
        assert_eq!(
            got,
            vec![Block::list(vec!["Item one.".into(), "Item two.".into()])]
        );
    }

    #[test]
    fn test_trailing_prose_after_list() {
        let got = blocks("- First.\n- Second.\nRemember to rest.");
        assert_eq!(
            got,
            vec![
                Block::list(vec!["First.".into(), "Second.".into()]),
                Paragraph::fragment("Remember to rest.").into(),
            ]
        );
    }

    #[test]
    fn test_prose_splits_list_in_two() {
        let got = blocks("- a.\nmeanwhile.\n- b.");
        assert_eq!(
            got,
            vec![
                Block::list(vec!["a.".into()]),
                Paragraph::fragment("meanwhile.").into(),
                Block::list(vec!["b.".into()]),
            ]
        );
    }

    #[test]
    fn test_blank_line_keeps_list_open() {
        // Only a full blank-line pair splits sections; a stray lone newline
        // with spaces trims to empty and must not close the list.
        let got = blocks("- a.\n \n- b.");
        assert_eq!(got, vec![Block::list(vec!["a.".into(), "b.".into()])]);
    }

    #[test]
    fn test_marker_stripping_is_single_char() {
        let got = blocks("-- double.\n- plain.");
        assert_eq!(
            got,
            vec![Block::list(vec!["- double.".into(), "plain.".into()])]
        );
    }

    #[test]
    fn test_hyphenated_prose_joins_lines() {
        let got = blocks("A well-known fact.\nIt spans two lines.");
        assert_eq!(
            got,
            vec![Paragraph::fragment("A well-known fact. It spans two lines.").into()]
        );
    }

    #[test]
    fn test_plain_paragraph_keeps_newlines() {
        let text = "No bullets here.\nStill the same section.";
        let got = blocks(text);
        assert_eq!(got, vec![Paragraph::section(text).into()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n  \n").is_empty());
    }

    #[test]
    fn test_mixed_document_order() {
        let raw = "Assessment Overview\n\nYour results show steady progress.\n\nRecommendations\n\nTry the following:\n- Sleep more.\n- Walk daily.";
        let doc = segment(raw);
        assert_eq!(doc.heading_count(), 2);
        assert_eq!(doc.list_count(), 1);
        assert_eq!(doc.paragraph_count(), 2);
        assert!(doc.blocks[0].is_heading());
        assert!(doc.blocks[1].is_paragraph());
        assert!(doc.blocks[2].is_heading());
        assert!(doc.blocks[3].is_paragraph());
        assert!(doc.blocks[4].is_list());
    }

    #[test]
    fn test_determinism() {
        let raw = "Overview\n\n- One.\n- Two.\nAnd prose.";
        assert_eq!(segment(raw), segment(raw));
    }

    #[test]
    fn test_custom_markers() {
        let seg = Segmenter::with_options(
            SegmentOptions::new().with_bullet_markers(['*']),
        );
        let doc = seg.segment("* starred.\n- dashed.");
        assert_eq!(
            doc.blocks,
            vec![
                Block::list(vec!["starred.".into()]),
                Paragraph::fragment("- dashed.").into(),
            ]
        );
    }
}
