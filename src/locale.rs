//! Locale resolution from URL path prefixes.
//!
//! The effective locale for a request comes from an optional leading path
//! segment (`/fr/...`). Canonical URLs for the default locale carry no
//! prefix. Resolution never fails: an unrecognized segment simply falls back
//! to the default locale with the path left untouched.
//!
//! The resolved locale is a plain value threaded through request handling,
//! never shared mutable state.

/// Immutable set of available locales plus the designated default.
///
/// Built once from config at startup. Invariants (enforced by config
/// validation): no duplicates, default is a member of the set.
#[derive(Debug, Clone)]
pub struct LocaleSet {
    available: Vec<String>,
    default_index: usize,
}

/// Outcome of locale resolution for one request path.
#[derive(Debug, PartialEq, Eq)]
pub struct Resolved<'s, 'p> {
    /// Effective locale, always a member of the available set.
    pub locale: &'s str,
    /// Path remainder used for further routing, without leading slash.
    pub rest: &'p str,
}

impl LocaleSet {
    /// Build from validated config values.
    ///
    /// Panics if `default` is not in `available`; config validation rejects
    /// that before this is reached.
    pub fn new(available: &[String], default: &str) -> Self {
        let available: Vec<String> = available.to_vec();
        let default_index = available
            .iter()
            .position(|l| l == default)
            .expect("default locale must be in the available set");
        Self {
            available,
            default_index,
        }
    }

    /// The designated default locale.
    pub fn default_locale(&self) -> &str {
        &self.available[self.default_index]
    }

    /// Membership test. Resolution goes through `resolve`; this exists for
    /// tests that only care about the yes/no answer.
    #[cfg(test)]
    pub fn is_available(&self, id: &str) -> bool {
        self.available.iter().any(|l| l == id)
    }

    /// Whether `id` names the default locale.
    pub fn is_default(&self, id: &str) -> bool {
        id == self.default_locale()
    }

    /// All available locales, in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.available.iter().map(String::as_str)
    }

    /// Resolve the effective locale from a normalized request path
    /// (no leading/trailing slashes, no query string).
    ///
    /// A leading segment naming an available locale is consumed as the
    /// locale prefix, taking precedence over a topic of the same name.
    /// The default locale's own prefix is also consumed, so `/en/logs`
    /// and `/logs` route identically.
    pub fn resolve<'s, 'p>(&'s self, path: &'p str) -> Resolved<'s, 'p> {
        let (head, rest) = match path.split_once('/') {
            Some((head, rest)) => (head, rest),
            None => (path, ""),
        };

        match self.available.iter().find(|l| l.as_str() == head) {
            Some(locale) => Resolved {
                locale: locale.as_str(),
                rest,
            },
            None => Resolved {
                locale: self.default_locale(),
                rest: path,
            },
        }
    }

    /// Build the canonical href for a topic under a locale.
    ///
    /// The default locale carries no prefix; every other locale is prefixed
    /// with exactly `/<locale>`.
    pub fn href(&self, locale: &str, topic: Option<&str>) -> String {
        let prefix = if self.is_default(locale) {
            String::new()
        } else {
            format!("/{locale}")
        };
        match topic {
            Some(topic) => format!("{prefix}/{topic}"),
            None if prefix.is_empty() => "/".to_string(),
            None => prefix,
        }
    }
}
