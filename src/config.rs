//! Caller-supplied options for a conversion pass

use serde::Serialize;

/// Options recognized by the conversion engine and the document loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SvgOptions {
    /// Opaque layout style, passed through to the host untouched.
    pub style: Option<String>,

    /// Replaces the root svg element's own `width` when set.
    pub width: Option<String>,

    /// Replaces the root svg element's own `height` when set.
    pub height: Option<String>,

    /// Global fill override: recolors every `fill` in the tree except an
    /// explicit `fill="none"`.
    pub fill: Option<String>,
}

impl SvgOptions {
    /// Create options with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the passthrough layout style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the root width override. Accepts strings and numbers.
    pub fn with_width(mut self, width: impl ToString) -> Self {
        self.width = Some(width.to_string());
        self
    }

    /// Set the root height override. Accepts strings and numbers.
    pub fn with_height(mut self, height: impl ToString) -> Self {
        self.height = Some(height.to_string());
        self
    }

    /// Set the global fill override color.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SvgOptions::default();
        assert_eq!(options.style, None);
        assert_eq!(options.width, None);
        assert_eq!(options.height, None);
        assert_eq!(options.fill, None);
    }

    #[test]
    fn test_builder_pattern() {
        let options = SvgOptions::new()
            .with_style("flex:1")
            .with_width(200)
            .with_height("100%")
            .with_fill("#333333");

        assert_eq!(options.style, Some("flex:1".to_string()));
        assert_eq!(options.width, Some("200".to_string()));
        assert_eq!(options.height, Some("100%".to_string()));
        assert_eq!(options.fill, Some("#333333".to_string()));
    }
}
