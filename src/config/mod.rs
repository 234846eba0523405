//! Site configuration management for `docsite.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                       |
//! |------------|-----------------------------------------------|
//! | `[site]`   | Site title and content root                   |
//! | `[locale]` | Default locale and the available-locale set   |
//! | `[serve]`  | HTTP server (port, interface)                 |
//!
//! Configuration is loaded once at startup, validated, and threaded through
//! as an immutable value for the lifetime of the process.

mod error;
pub mod section;

pub use error::ConfigError;

use section::{LocaleSection, ServeSection, SiteSection};

use crate::{
    cli::{Cli, Commands},
    content::ContentStore,
    debug,
    locale::LocaleSet,
    log,
};
use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata and content location
    pub site: SiteSection,

    /// Locale settings
    pub locale: LocaleSection,

    /// HTTP server settings
    pub serve: ServeSection,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSection::default(),
            locale: LocaleSection::default(),
            serve: ServeSection::default(),
        }
    }
}

// ============================================================================
// loading
// ============================================================================

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; a missing file is not
    /// an error — the defaults describe a usable site rooted at cwd.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

        self.apply_command_options(cli);

        // Normalize content root against the project root
        if self.site.content.is_relative() {
            self.site.content = root.join(&self.site.content);
        }
        self.root = root;
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Some(content) = &cli.content {
            self.site.content = content.clone();
        }

        match &cli.command {
            Commands::Serve {
                interface,
                port,
                verbose,
            } => {
                crate::logger::set_verbose(*verbose);
                if let Some(interface) = interface {
                    self.serve.interface = *interface;
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
            }
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> Result<()> {
        self.locale.validate()?;
        Ok(())
    }

    // ========================================================================
    // derived values
    // ========================================================================

    /// Build the immutable locale set from the validated `[locale]` section.
    pub fn locale_set(&self) -> LocaleSet {
        LocaleSet::new(&self.locale.available, &self.locale.default)
    }

    /// Content store rooted at the configured content directory.
    pub fn content_store(&self) -> ContentStore {
        ContentStore::new(&self.site.content)
    }
}

/// Search upward from cwd for the named config file.
fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
