//! `[locale]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [locale]
//! default = "en"
//! available = ["en", "fr"]
//! ```
//!
//! The default locale is never represented by a URL path prefix; every other
//! available locale maps to a `/<locale>` prefix.

use serde::Deserialize;

use crate::config::ConfigError;

/// Available locales and the designated default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocaleSection {
    /// Default locale, used whenever no recognized prefix is present.
    pub default: String,

    /// All locales documents may be translated into, in switcher order.
    pub available: Vec<String>,
}

impl Default for LocaleSection {
    fn default() -> Self {
        Self {
            default: "en".to_string(),
            available: vec!["en".to_string(), "fr".to_string()],
        }
    }
}

impl LocaleSection {
    /// Check the invariants the rest of the system relies on: a non-empty,
    /// duplicate-free available set containing the default, with identifiers
    /// usable as single path segments.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.available.is_empty() {
            return Err(ConfigError::Validation(
                "locale.available must not be empty".to_string(),
            ));
        }

        for id in &self.available {
            if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(ConfigError::Validation(format!(
                    "locale identifier `{id}` is not a valid path segment"
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for id in &self.available {
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate locale `{id}` in locale.available"
                )));
            }
        }

        if !self.available.contains(&self.default) {
            return Err(ConfigError::Validation(format!(
                "default locale `{}` is not in locale.available",
                self.default
            )));
        }

        Ok(())
    }
}
