//! Error types for content lookup and validation.
//!
//! Two situations can go wrong: a lookup key that was never registered
//! (surfaced to the caller, which decides whether to omit a section or fail
//! the build), and a content-authoring defect (caught by [`crate::validate`]
//! at build time so it can never become a rendering crash).

use thiserror::Error;

/// The error type for registry and sample store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The requested key is not registered.
    #[error("no content registered for key '{key}'")]
    NotFound {
        /// The key that was looked up.
        key: String,
    },

    /// A required field on an entry is empty.
    #[error("entry '{key}': required field '{field}' is empty")]
    MissingField {
        /// Key of the defective entry.
        key: String,
        /// Name of the empty field.
        field: &'static str,
    },

    /// An entry references a code sample that is not in the store.
    #[error("entry '{key}' references unknown code sample '{sample}'")]
    DanglingSample {
        /// Key of the referencing entry.
        key: String,
        /// The missing sample key.
        sample: String,
    },

    /// The same entry key was registered more than once.
    #[error("entry key '{key}' is registered more than once")]
    DuplicateKey {
        /// The duplicated key.
        key: String,
    },
}

impl ContentError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Whether this error is a content-authoring defect (as opposed to a
    /// lookup miss).
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

/// A specialized Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ContentError::not_found("watch");
        assert_eq!(err.to_string(), "no content registered for key 'watch'");

        let err = ContentError::DanglingSample {
            key: "clearErrors".into(),
            sample: "clearError".into(),
        };
        assert!(err.to_string().contains("clearError"));
    }

    #[test]
    fn validation_classification() {
        assert!(!ContentError::not_found("x").is_validation());
        assert!(ContentError::MissingField {
            key: "x".into(),
            field: "title",
        }
        .is_validation());
        assert!(ContentError::DuplicateKey { key: "x".into() }.is_validation());
    }
}
