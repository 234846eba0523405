//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "The Twelve Factors"
//! content = "content"         # markdown root, relative to project root
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Site metadata and content location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title shown in page headers and the `<title>` element.
    pub title: String,

    /// Content root directory. Documents live at
    /// `<content>/<locale>/<topic>.md`.
    pub content: PathBuf,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            content: PathBuf::from("content"),
        }
    }
}
