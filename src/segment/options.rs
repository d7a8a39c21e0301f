//! Segmentation options and configuration.

/// Options controlling section classification.
///
/// The defaults reproduce the production heuristics; changing them trades
/// away output parity for flexibility.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Sections at or above this many characters never classify as headings
    pub heading_max_chars: usize,

    /// Characters recognized as bullet markers at the start of a line
    pub bullet_markers: Vec<char>,
}

impl SegmentOptions {
    /// Create new segment options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading length cutoff, in characters.
    pub fn with_heading_max_chars(mut self, max: usize) -> Self {
        self.heading_max_chars = max;
        self
    }

    /// Set the recognized bullet marker characters.
    pub fn with_bullet_markers(mut self, markers: impl Into<Vec<char>>) -> Self {
        self.bullet_markers = markers.into();
        self
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            heading_max_chars: 100,
            bullet_markers: vec!['\u{2022}', '-'],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_options_builder() {
        let options = SegmentOptions::new()
            .with_heading_max_chars(80)
            .with_bullet_markers(['*', '-']);

        assert_eq!(options.heading_max_chars, 80);
        assert_eq!(options.bullet_markers, vec!['*', '-']);
    }

    #[test]
    fn test_segment_options_defaults() {
        let options = SegmentOptions::default();
        assert_eq!(options.heading_max_chars, 100);
        assert_eq!(options.bullet_markers, vec!['\u{2022}', '-']);
    }
}
