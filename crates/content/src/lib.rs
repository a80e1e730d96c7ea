//! Hookform documentation content
//!
//! This crate holds everything the documentation site knows: the content
//! data model, the keyed registry with ordered collections, the code sample
//! store, build-time validation, and the authored content itself.
//!
//! # Architecture
//!
//! - `model`: Data structures representing authored content
//! - `registry`: Ordered, keyed lookup over entries and samples
//! - `validate`: Build-time defect detection (run before any rendering)
//! - `samples`: Literal code sample text shown on pages
//! - `data`: The site's content, assembled into a [`Registry`]

pub mod data;
pub mod error;
pub mod model;
pub mod registry;
pub mod samples;
pub mod validate;

pub use error::{ContentError, Result};
pub use model::*;
pub use registry::{Collection, Registry, SampleStore};
pub use validate::validate;
