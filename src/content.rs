//! Content document loading.
//!
//! Documents live at `<content-root>/<locale>/<topic>.md`, UTF-8 encoded.
//! A missing file is a normal condition (translation not yet written) and
//! yields `Ok(None)`; any other I/O failure is a `ContentError`.

use std::{fs, io::ErrorKind, path::PathBuf};

use thiserror::Error;

use crate::debug;

/// Content loading failures, distinct from "missing translation".
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("document `{0}` is not valid UTF-8")]
    Encoding(PathBuf),
}

/// Read-only lookup of markdown documents by (locale, topic).
///
/// Holds only the content root path; every load goes to the file system
/// with no caching layer, so concurrent reads need no coordination.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Conventional location for a (locale, topic) pair.
    ///
    /// Both components are validated identifiers before reaching this point
    /// and never contain path separators.
    fn document_path(&self, locale: &str, topic: &str) -> PathBuf {
        self.root.join(locale).join(format!("{topic}.md"))
    }

    /// Load the raw markdown for (locale, topic).
    ///
    /// Returns `Ok(None)` if no document exists for the pair.
    pub fn load(&self, locale: &str, topic: &str) -> Result<Option<String>, ContentError> {
        let path = self.document_path(locale, topic);
        match fs::read(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Ok(Some(text)),
                Err(_) => Err(ContentError::Encoding(path)),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("content"; "no document at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(ContentError::Read(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str, &str)]) -> (TempDir, ContentStore) {
        let dir = TempDir::new().unwrap();
        for (locale, topic, text) in files {
            let locale_dir = dir.path().join(locale);
            fs::create_dir_all(&locale_dir).unwrap();
            fs::write(locale_dir.join(format!("{topic}.md")), text).unwrap();
        }
        let store = ContentStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_existing_document() {
        let (_dir, store) = store_with(&[("en", "logs", "# Logs\n\nbody")]);
        let text = store.load("en", "logs").unwrap().unwrap();
        assert!(text.starts_with("# Logs"));
    }

    #[test]
    fn test_missing_translation_is_none_not_error() {
        let (_dir, store) = store_with(&[("en", "logs", "# Logs")]);
        assert!(store.load("fr", "logs").unwrap().is_none());
    }

    #[test]
    fn test_missing_locale_directory_is_none() {
        let (_dir, store) = store_with(&[]);
        assert!(store.load("en", "logs").unwrap().is_none());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let (dir, store) = store_with(&[]);
        let locale_dir = dir.path().join("en");
        fs::create_dir_all(&locale_dir).unwrap();
        fs::write(locale_dir.join("logs.md"), [0xff, 0xfe, 0x00]).unwrap();

        let err = store.load("en", "logs").unwrap_err();
        assert!(matches!(err, ContentError::Encoding(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, store) = store_with(&[("en", "logs", "# Logs")]);
        let path = dir.path().join("en").join("logs.md");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // Skip when running as root, which bypasses permission checks
        if fs::read(&path).is_ok() {
            return;
        }

        let err = store.load("en", "logs").unwrap_err();
        assert!(matches!(err, ContentError::Read(..)));
    }
}
