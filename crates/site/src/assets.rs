//! Embedded assets for generated documentation pages.
//!
//! The stylesheet is compiled into the binary so a generated site is a set
//! of self-contained HTML files that work from `file://`.

/// The documentation site stylesheet.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_css_is_nonempty() {
        assert!(!STYLES_CSS.is_empty());
        assert!(STYLES_CSS.contains(":root"));
    }
}
