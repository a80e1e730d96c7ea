//! Documentation content data model
//!
//! These types represent authored documentation content in a format suitable
//! for rendering. They are designed to be serializable for static site
//! generation and for the JSON dump API. All content is immutable once the
//! registry is built; nothing here is mutated at render time.

use serde::{Deserialize, Serialize};

/// One documented topic: an API member, a FAQ entry, or a guide section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Unique lookup key (e.g., "clearErrors")
    pub key: String,
    /// Page heading
    pub title: String,
    /// Prose description (markdown fragment, rendered at build time)
    pub description: String,
    /// Type signature shown under the heading, if any
    pub signature: Option<String>,
    /// Key into the code sample store, if the topic has an example
    pub code_sample: Option<String>,
    /// External links shown with the entry, in authored order
    pub links: Vec<ExternalLink>,
}

impl ContentEntry {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
            signature: None,
            code_sample: None,
            links: Vec::new(),
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn with_sample(mut self, sample_key: impl Into<String>) -> Self {
        self.code_sample = Some(sample_key.into());
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(ExternalLink {
            label: label.into(),
            url: url.into(),
        });
        self
    }
}

/// A labeled link to an external resource.
///
/// URLs are opaque strings; they are never validated or dereferenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

/// Literal source text shown for illustration, never executed.
///
/// A sample always has a default-language body; the typed variant and the
/// per-variant sandbox links are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSample {
    /// Unique key within the sample store
    pub key: String,
    /// Default-language source text
    pub body: String,
    /// Typed-variant source text, if authored
    pub typed_body: Option<String>,
    /// External sandbox link for the default variant
    pub sandbox_url: Option<String>,
    /// External sandbox link for the typed variant
    pub typed_sandbox_url: Option<String>,
}

impl CodeSample {
    pub fn new(key: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            body: body.into(),
            typed_body: None,
            sandbox_url: None,
            typed_sandbox_url: None,
        }
    }

    pub fn with_typed(mut self, body: impl Into<String>) -> Self {
        self.typed_body = Some(body.into());
        self
    }

    pub fn with_sandbox(mut self, url: impl Into<String>) -> Self {
        self.sandbox_url = Some(url.into());
        self
    }

    pub fn with_typed_sandbox(mut self, url: impl Into<String>) -> Self {
        self.typed_sandbox_url = Some(url.into());
        self
    }

    /// The source text for a variant, falling back to the default body when
    /// no typed variant was authored.
    pub fn text(&self, variant: SampleVariant) -> &str {
        match variant {
            SampleVariant::Default => &self.body,
            SampleVariant::Typed => self.typed_body.as_deref().unwrap_or(&self.body),
        }
    }
}

/// Which rendering of a code sample to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleVariant {
    Default,
    Typed,
}

impl SampleVariant {
    pub fn display_name(&self) -> &'static str {
        match self {
            SampleVariant::Default => "JS",
            SampleVariant::Typed => "TS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_builder_sets_optional_fields() {
        let entry = ContentEntry::new("clearErrors", "clearErrors", "Clear form errors")
            .with_signature("(name?: string | string[]) => void")
            .with_sample("clearError")
            .with_link("docs", "https://example.com");

        assert_eq!(entry.key, "clearErrors");
        assert_eq!(entry.signature.as_deref(), Some("(name?: string | string[]) => void"));
        assert_eq!(entry.code_sample.as_deref(), Some("clearError"));
        assert_eq!(entry.links.len(), 1);
        assert_eq!(entry.links[0].label, "docs");
    }

    #[test]
    fn sample_text_falls_back_to_default() {
        let plain = CodeSample::new("a", "js body");
        assert_eq!(plain.text(SampleVariant::Default), "js body");
        assert_eq!(plain.text(SampleVariant::Typed), "js body");

        let typed = CodeSample::new("b", "js body").with_typed("ts body");
        assert_eq!(typed.text(SampleVariant::Typed), "ts body");
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = ContentEntry::new("watch", "watch", "Watch input changes")
            .with_signature("(names?: string | string[]) => unknown");
        let json = serde_json::to_string(&entry).unwrap();
        let back: ContentEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
