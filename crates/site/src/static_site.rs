//! Static documentation site generator
//!
//! Produces a flat set of self-contained HTML files (inlined CSS, no
//! scripts) that work with `file://` — no server needed. Content is
//! validated before anything is written: an invalid registry blocks
//! generation instead of producing broken pages.

use std::path::Path;

use thiserror::Error;

use hookform_content::data::API;
use hookform_content::{validate, ContentError, Registry};

use crate::render;

/// Error type for static site generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The registry has authoring defects; nothing was written.
    #[error("content validation failed ({} defects)", .0.len())]
    Invalid(Vec<ContentError>),

    /// Writing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct StaticSiteGenerator;

impl StaticSiteGenerator {
    /// Generate the static documentation site in `output_dir`.
    ///
    /// Layout is flat: `index.html`, one page per API entry
    /// (`<key>.html`), and one page per listing collection
    /// (`faq.html`, ...). Every page is a pure function of the registry,
    /// so generation order does not matter.
    pub fn generate(registry: &Registry, output_dir: &Path) -> Result<(), GenerateError> {
        validate(registry).map_err(GenerateError::Invalid)?;

        std::fs::create_dir_all(output_dir)?;

        std::fs::write(
            output_dir.join("index.html"),
            render::render_home_page(registry),
        )?;

        for collection in registry.collections() {
            if collection.key == API {
                for entry in &collection.entries {
                    let file = format!("{}.html", entry.key);
                    std::fs::write(
                        output_dir.join(file),
                        render::render_entry_page(registry, entry),
                    )?;
                }
            } else {
                let file = format!("{}.html", collection.key);
                std::fs::write(
                    output_dir.join(file),
                    render::render_listing_page(registry, &collection.key),
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookform_content::{CodeSample, ContentEntry, SampleStore};

    fn sample_registry() -> Registry {
        let mut store = SampleStore::new();
        store.add(
            CodeSample::new("clearError", "const cleared = clearErrors();")
                .with_sandbox("https://codesandbox.io/s/example"),
        );

        let mut registry = Registry::new(store);
        registry.add(
            "api",
            ContentEntry::new("clearErrors", "clearErrors", "Clear form errors")
                .with_signature("(name?: string | string[]) => void")
                .with_sample("clearError"),
        );
        registry.add(
            "faq",
            ContentEntry::new("faq-reset", "How to reset the form?", "Use the reset method."),
        );
        registry
    }

    #[test]
    fn generates_flat_site() {
        let registry = sample_registry();
        let dir = std::env::temp_dir().join("hookform_site_static_test");
        let _ = std::fs::remove_dir_all(&dir);

        StaticSiteGenerator::generate(&registry, &dir).expect("generate failed");

        assert!(dir.join("index.html").exists());
        assert!(dir.join("clearErrors.html").exists());
        assert!(dir.join("faq.html").exists());

        let html = std::fs::read_to_string(dir.join("clearErrors.html")).unwrap();
        assert!(html.contains("clearErrors"));
        assert!(html.contains("Clear form errors"));
        assert!(html.contains("const cleared = clearErrors();"));
        // Contains inlined CSS so the page works standalone
        assert!(html.contains(":root"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn invalid_registry_blocks_generation() {
        let mut registry = Registry::new(SampleStore::new());
        registry.add(
            "api",
            ContentEntry::new("clearErrors", "clearErrors", "Clear form errors")
                .with_sample("clearError"),
        );

        let dir = std::env::temp_dir().join("hookform_site_invalid_test");
        let _ = std::fs::remove_dir_all(&dir);

        let err = StaticSiteGenerator::generate(&registry, &dir).unwrap_err();
        match err {
            GenerateError::Invalid(defects) => {
                assert_eq!(defects.len(), 1);
                assert!(defects[0].is_validation());
            }
            GenerateError::Io(e) => panic!("expected validation failure, got {e}"),
        }
        // Nothing was written
        assert!(!dir.join("index.html").exists());
    }

    #[test]
    fn generated_pages_are_deterministic() {
        let registry = sample_registry();
        let dir_a = std::env::temp_dir().join("hookform_site_det_a");
        let dir_b = std::env::temp_dir().join("hookform_site_det_b");
        let _ = std::fs::remove_dir_all(&dir_a);
        let _ = std::fs::remove_dir_all(&dir_b);

        StaticSiteGenerator::generate(&registry, &dir_a).unwrap();
        StaticSiteGenerator::generate(&registry, &dir_b).unwrap();

        let a = std::fs::read_to_string(dir_a.join("clearErrors.html")).unwrap();
        let b = std::fs::read_to_string(dir_b.join("clearErrors.html")).unwrap();
        assert_eq!(a, b);

        let _ = std::fs::remove_dir_all(&dir_a);
        let _ = std::fs::remove_dir_all(&dir_b);
    }

    #[test]
    fn generates_full_site_content() {
        let registry = hookform_content::data::registry();
        let dir = std::env::temp_dir().join("hookform_site_full_test");
        let _ = std::fs::remove_dir_all(&dir);

        StaticSiteGenerator::generate(&registry, &dir).expect("generate failed");

        assert!(dir.join("register.html").exists());
        assert!(dir.join("get-started.html").exists());

        let faq = std::fs::read_to_string(dir.join("faq.html")).unwrap();
        // FAQ page preserves authored question order
        let perf = faq.find("Performance of React Hook Form").unwrap();
        let modal = faq.find("How to work with modal or tab forms?").unwrap();
        assert!(perf < modal);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
