//! Rendering of retrieval results for the command line.
//!
//! # Submodules
//!
//! - [`json`]: Pretty JSON for stdout, plus file output for `export`
//! - [`markdown`]: Human-readable Markdown views of bundles, pages and articles

pub mod json;
pub mod markdown;
