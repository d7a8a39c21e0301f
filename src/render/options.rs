//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Heading tag level (1-6)
    pub heading_level: u8,

    /// CSS class of the container wrapping whole-section paragraphs
    pub section_class: String,

    /// CSS class of the container wrapping the raw view
    pub raw_view_class: String,

    /// Marker character prefixing list items in plain-text output
    pub list_marker: char,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading tag level (clamped to 1-6).
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Set the section container CSS class.
    pub fn with_section_class(mut self, class: impl Into<String>) -> Self {
        self.section_class = class.into();
        self
    }

    /// Set the raw-view container CSS class.
    pub fn with_raw_view_class(mut self, class: impl Into<String>) -> Self {
        self.raw_view_class = class.into();
        self
    }

    /// Set the plain-text list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_level: 4,
            section_class: "summary-section".to_string(),
            raw_view_class: "detailed-view".to_string(),
            list_marker: '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_heading_level(2)
            .with_section_class("prose")
            .with_list_marker('*');

        assert_eq!(options.heading_level, 2);
        assert_eq!(options.section_class, "prose");
        assert_eq!(options.list_marker, '*');
    }

    #[test]
    fn test_heading_level_is_clamped() {
        assert_eq!(RenderOptions::new().with_heading_level(0).heading_level, 1);
        assert_eq!(RenderOptions::new().with_heading_level(9).heading_level, 6);
    }
}
