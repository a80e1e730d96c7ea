//! Hookform documentation site rendering
//!
//! This crate turns a validated content registry into displayable pages.
//! It supports static site generation and, behind the `serve` feature, a
//! small development server.
//!
//! # Architecture
//!
//! - `escape`: HTML and script-context escaping
//! - `markdown`: Markdown-to-HTML rendering for description fragments
//! - `render`: Leptos SSR page components and page entry points
//! - `assets`: Embedded stylesheet
//! - `static_site`: Static site generator (`hfdoc build`)
//! - `server`: Axum-based development server (behind the `serve` feature)

pub mod assets;
pub mod escape;
pub mod markdown;
pub mod render;
pub mod static_site;

#[cfg(feature = "serve")]
pub mod server;
