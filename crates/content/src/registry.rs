//! Content registry: deterministic, ordered lookup of documentation content.
//!
//! The registry is built once at startup from the authored content and then
//! only read. Collections keep their declared order (FAQ list order, nav
//! order); lookups are linear over small, fixed content sets.

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::model::{CodeSample, ContentEntry, SampleVariant};

/// The code sample store, resolving sample keys to literal text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleStore {
    samples: Vec<CodeSample>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sample. Keys are expected to be unique; duplicates are
    /// reported by validation, and lookup always returns the first match.
    pub fn add(&mut self, sample: CodeSample) {
        self.samples.push(sample);
    }

    pub fn get(&self, key: &str) -> Result<&CodeSample> {
        self.samples
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| ContentError::not_found(key))
    }

    /// Resolve a sample key to source text.
    ///
    /// Requesting [`SampleVariant::Typed`] when no typed variant was authored
    /// falls back to the default body; only an unregistered key is an error.
    pub fn resolve(&self, key: &str, variant: SampleVariant) -> Result<&str> {
        self.get(key).map(|s| s.text(variant))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.samples.iter().any(|s| s.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A named, ordered collection of entries (e.g. "api", "faq").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub key: String,
    pub entries: Vec<ContentEntry>,
}

/// The read-only aggregate of all documentation content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    collections: Vec<Collection>,
    samples: SampleStore,
}

impl Registry {
    pub fn new(samples: SampleStore) -> Self {
        Self {
            collections: Vec::new(),
            samples,
        }
    }

    /// Append an entry to a collection, creating the collection on first
    /// use. Collection order and entry order are both insertion order.
    pub fn add(&mut self, collection: &str, entry: ContentEntry) {
        match self.collections.iter_mut().find(|c| c.key == collection) {
            Some(c) => c.entries.push(entry),
            None => self.collections.push(Collection {
                key: collection.to_string(),
                entries: vec![entry],
            }),
        }
    }

    /// Look up a single entry by its key, across all collections.
    pub fn get(&self, key: &str) -> Result<&ContentEntry> {
        self.entries()
            .find(|e| e.key == key)
            .ok_or_else(|| ContentError::not_found(key))
    }

    /// All entries of a collection, in declared order.
    ///
    /// An absent collection is "no content", not an error: the result is an
    /// empty slice.
    pub fn list(&self, collection: &str) -> &[ContentEntry] {
        self.collections
            .iter()
            .find(|c| c.key == collection)
            .map(|c| c.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Case-insensitive substring search over entry keys and titles.
    pub fn search(&self, query: &str) -> Vec<&ContentEntry> {
        let query_lower = query.to_lowercase();
        self.entries()
            .filter(|e| {
                e.key.to_lowercase().contains(&query_lower)
                    || e.title.to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    pub fn samples(&self) -> &SampleStore {
        &self.samples
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// All entries in collection-then-declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &ContentEntry> {
        self.collections.iter().flat_map(|c| c.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> Registry {
        let mut store = SampleStore::new();
        store.add(
            CodeSample::new("clearError", "const a = 1;")
                .with_sandbox("https://codesandbox.io/s/example"),
        );
        store.add(CodeSample::new("register", "js text").with_typed("ts text"));

        let mut registry = Registry::new(store);
        registry.add(
            "api",
            ContentEntry::new("clearErrors", "clearErrors", "Clear form errors")
                .with_sample("clearError"),
        );
        registry.add(
            "api",
            ContentEntry::new("watch", "watch", "Watch input changes"),
        );
        registry
    }

    #[test]
    fn get_round_trips_registered_entry() {
        let registry = sample_registry();
        let entry = registry.get("clearErrors").unwrap();
        assert_eq!(entry.title, "clearErrors");
        assert_eq!(entry.description, "Clear form errors");
        assert_eq!(entry.code_sample.as_deref(), Some("clearError"));
    }

    #[test]
    fn get_unregistered_key_is_not_found() {
        let registry = sample_registry();
        let err = registry.get("nope").unwrap_err();
        assert_eq!(err, ContentError::not_found("nope"));
    }

    #[test]
    fn list_preserves_registration_order() {
        let mut registry = Registry::new(SampleStore::new());
        registry.add("faq", ContentEntry::new("a", "A", "first"));
        registry.add("faq", ContentEntry::new("b", "B", "second"));
        registry.add("faq", ContentEntry::new("c", "C", "third"));

        let keys: Vec<_> = registry.list("faq").iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn list_absent_collection_is_empty_not_error() {
        let registry = Registry::new(SampleStore::new());
        assert!(registry.list("faq").is_empty());
    }

    #[test]
    fn resolve_typed_falls_back_to_default() {
        let registry = sample_registry();
        let samples = registry.samples();

        // No typed variant authored: typed resolves to the default text.
        assert_eq!(
            samples.resolve("clearError", SampleVariant::Typed).unwrap(),
            samples.resolve("clearError", SampleVariant::Default).unwrap(),
        );
        // Typed variant authored: typed resolves to it.
        assert_eq!(samples.resolve("register", SampleVariant::Typed).unwrap(), "ts text");
        assert_eq!(
            samples.resolve("register", SampleVariant::Default).unwrap(),
            "js text"
        );
    }

    #[test]
    fn resolve_unregistered_sample_is_not_found() {
        let registry = sample_registry();
        let err = registry
            .samples()
            .resolve("missing", SampleVariant::Default)
            .unwrap_err();
        assert_eq!(err, ContentError::not_found("missing"));
    }

    #[test]
    fn search_matches_keys_and_titles() {
        let registry = sample_registry();
        let hits = registry.search("clear");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "clearErrors");
        assert!(registry.search("zzz").is_empty());
    }

    #[test]
    fn collections_keep_insertion_order() {
        let mut registry = Registry::new(SampleStore::new());
        registry.add("api", ContentEntry::new("a", "A", "x"));
        registry.add("faq", ContentEntry::new("b", "B", "y"));
        registry.add("api", ContentEntry::new("c", "C", "z"));

        let keys: Vec<_> = registry.collections().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["api", "faq"]);
        assert_eq!(registry.list("api").len(), 2);
    }
}
