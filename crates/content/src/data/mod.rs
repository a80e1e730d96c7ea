//! The site's authored content, assembled into a registry.
//!
//! Content is grouped by topic the way it is displayed: the API reference,
//! the get-started guide, and the FAQ. The registry is constructed once and
//! passed by reference to every renderer; there is no ambient lookup.

mod api;
mod faq;
mod get_started;

use crate::registry::Registry;
use crate::samples;

/// Collection key for the API reference.
pub const API: &str = "api";
/// Collection key for the get-started guide.
pub const GET_STARTED: &str = "get-started";
/// Collection key for the FAQ.
pub const FAQ: &str = "faq";

/// Build the full site registry.
pub fn registry() -> Registry {
    let mut registry = Registry::new(samples::store());

    for entry in api::entries() {
        registry.add(API, entry);
    }
    for entry in get_started::entries() {
        registry.add(GET_STARTED, entry);
    }
    for entry in faq::entries() {
        registry.add(FAQ, entry);
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn site_registry_is_valid() {
        let registry = registry();
        if let Err(defects) = validate(&registry) {
            panic!("content defects: {defects:?}");
        }
    }

    #[test]
    fn collections_are_present_and_ordered() {
        let registry = registry();
        let keys: Vec<_> = registry.collections().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, [API, GET_STARTED, FAQ]);
        assert!(!registry.list(API).is_empty());
        assert!(!registry.list(FAQ).is_empty());
    }

    #[test]
    fn clear_errors_entry_is_wired_to_its_sample() {
        let registry = registry();
        let entry = registry.get("clearErrors").unwrap();
        assert_eq!(entry.title, "clearErrors");
        let sample_key = entry.code_sample.as_deref().unwrap();
        assert!(registry.samples().contains(sample_key));
    }
}
