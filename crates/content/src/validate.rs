//! Build-time content validation.
//!
//! Every defect in the content set is deterministic, so it is found here,
//! before anything renders, and reported in full rather than one at a time.
//! A registry that passes validation cannot make the renderer fail for
//! content reasons.

use std::collections::HashSet;

use crate::error::ContentError;
use crate::registry::Registry;

/// Check the whole registry for authoring defects.
///
/// Reports every defect found: empty required fields, references to code
/// samples that are not in the store, and duplicated entry keys.
pub fn validate(registry: &Registry) -> std::result::Result<(), Vec<ContentError>> {
    let mut defects = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for entry in registry.entries() {
        if !seen.insert(&entry.key) {
            defects.push(ContentError::DuplicateKey {
                key: entry.key.clone(),
            });
        }

        if entry.title.trim().is_empty() {
            defects.push(ContentError::MissingField {
                key: entry.key.clone(),
                field: "title",
            });
        }
        if entry.description.trim().is_empty() {
            defects.push(ContentError::MissingField {
                key: entry.key.clone(),
                field: "description",
            });
        }

        if let Some(sample) = &entry.code_sample {
            if !registry.samples().contains(sample) {
                defects.push(ContentError::DanglingSample {
                    key: entry.key.clone(),
                    sample: sample.clone(),
                });
            }
        }
    }

    if defects.is_empty() {
        Ok(())
    } else {
        Err(defects)
    }
}
