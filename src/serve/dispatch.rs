//! Per-request page dispatch.
//!
//! Each request walks ResolveLocale → ValidateTopic → LoadContent → Render →
//! Respond, with two terminal outcomes: a rendered page or not-found. All
//! state is per-request; the only shared data (`Site`) is read-only.

use crate::{
    config::SiteConfig,
    content::ContentStore,
    locale::LocaleSet,
    log,
    page::PageContext,
    render::render_markdown,
    topics::TOPIC_INDEX,
};

use super::path::normalize_url;

/// Process-wide read-only serving state, built once at startup.
pub struct Site {
    pub title: String,
    pub locales: LocaleSet,
    pub store: ContentStore,
}

impl Site {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.site.title.clone(),
            locales: config.locale_set(),
            store: config.content_store(),
        }
    }
}

/// Terminal dispatch outcome for one request.
#[derive(Debug)]
pub enum Outcome {
    /// 200 with a rendered HTML document.
    Page(String),
    /// 404 with the static not-found body.
    NotFound,
}

/// Dispatch one request URL to its terminal outcome.
///
/// Root paths always succeed with the home view. Topic paths succeed iff the
/// remaining segment is a member of the topic index; a missing document for
/// a valid topic still yields a page (empty content region).
pub fn dispatch(site: &Site, raw_url: &str) -> Outcome {
    let path = normalize_url(raw_url);
    let resolved = site.locales.resolve(&path);

    let ctx = PageContext {
        site_title: &site.title,
        locales: &site.locales,
        topics: &TOPIC_INDEX,
        locale: resolved.locale,
    };

    if resolved.rest.is_empty() {
        let intro = load_body(site, resolved.locale, "index");
        return Outcome::Page(ctx.home_page(&intro));
    }

    // Unknown topics stop here: no content load is attempted.
    let Some(topic) = TOPIC_INDEX.get(resolved.rest) else {
        return Outcome::NotFound;
    };

    let body = load_body(site, resolved.locale, topic.slug);
    Outcome::Page(ctx.topic_page(topic, &body))
}

/// Load and render a document body, or an empty region if absent.
///
/// Loader errors (unreadable file, bad encoding) are logged and served as an
/// empty region too: content conditions never produce a 5xx here.
fn load_body(site: &Site, locale: &str, slug: &str) -> String {
    match site.store.load(locale, slug) {
        Ok(Some(markdown)) => render_markdown(&markdown),
        Ok(None) => String::new(),
        Err(e) => {
            log!("content"; "failed to load {}/{}: {:#}", locale, slug, anyhow::Error::new(e));
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_site(files: &[(&str, &str, &str)]) -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        for (locale, topic, text) in files {
            let locale_dir = dir.path().join(locale);
            fs::create_dir_all(&locale_dir).unwrap();
            fs::write(locale_dir.join(format!("{topic}.md")), text).unwrap();
        }
        let site = Site {
            title: "Docs".to_string(),
            locales: LocaleSet::new(&["en".to_string(), "fr".to_string()], "en"),
            store: ContentStore::new(dir.path()),
        };
        (dir, site)
    }

    fn page(outcome: Outcome) -> String {
        match outcome {
            Outcome::Page(html) => html,
            Outcome::NotFound => panic!("expected a page"),
        }
    }

    #[test]
    fn test_middle_topic_links_both_neighbors() {
        let (_dir, site) = test_site(&[("en", "dependencies", "# Deps")]);
        let html = page(dispatch(&site, "/dependencies"));
        assert!(html.contains("<h1>Deps</h1>"));
        assert!(html.contains("class=\"prev\" href=\"/codebase\""));
        assert!(html.contains("class=\"next\" href=\"/config\""));
    }

    #[test]
    fn test_first_topic_has_no_prev_link() {
        let (_dir, site) = test_site(&[("en", "codebase", "# Codebase")]);
        let html = page(dispatch(&site, "/codebase"));
        assert!(!html.contains("class=\"prev\""));
        assert!(html.contains("class=\"next\" href=\"/dependencies\""));
    }

    #[test]
    fn test_locale_prefixed_last_topic() {
        let (_dir, site) = test_site(&[("fr", "admin-processes", "# Admin")]);
        let html = page(dispatch(&site, "/fr/admin-processes"));
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(!html.contains("class=\"next\""));
        assert!(html.contains("class=\"prev\" href=\"/fr/logs\""));
    }

    #[test]
    fn test_unknown_topic_is_not_found() {
        let (_dir, site) = test_site(&[]);
        assert!(matches!(dispatch(&site, "/nonsense"), Outcome::NotFound));
    }

    #[test]
    fn test_root_always_succeeds() {
        let (_dir, site) = test_site(&[]);
        let html = page(dispatch(&site, "/"));
        assert!(html.contains("class=\"toc\""));
        assert!(html.contains("href=\"/codebase\""));
    }

    #[test]
    fn test_root_with_locale_prefix() {
        let (_dir, site) = test_site(&[]);
        let html = page(dispatch(&site, "/fr/"));
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("href=\"/fr/codebase\""));
    }

    #[test]
    fn test_home_intro_document_is_rendered() {
        let (_dir, site) = test_site(&[("en", "index", "Welcome *here*")]);
        let html = page(dispatch(&site, "/"));
        assert!(html.contains("<em>here</em>"));
    }

    #[test]
    fn test_unrecognized_locale_segment_falls_through_to_404() {
        let (_dir, site) = test_site(&[("en", "logs", "# Logs")]);
        // `xx` is not a locale, so `xx/logs` is treated as a (non-)topic.
        assert!(matches!(dispatch(&site, "/xx/logs"), Outcome::NotFound));
    }

    #[test]
    fn test_default_locale_prefix_routes_like_bare_path() {
        let (_dir, site) = test_site(&[("en", "logs", "# Logs")]);
        let bare = page(dispatch(&site, "/logs"));
        let prefixed = page(dispatch(&site, "/en/logs"));
        assert_eq!(bare, prefixed);
    }

    #[test]
    fn test_missing_translation_yields_empty_region_not_failure() {
        let (_dir, site) = test_site(&[("en", "logs", "# Logs")]);
        let html = page(dispatch(&site, "/fr/logs"));
        assert!(html.contains("<article class=\"content\"></article>"));
        assert!(html.contains("class=\"pager\""));
    }

    #[test]
    fn test_query_string_is_ignored_for_routing() {
        let (_dir, site) = test_site(&[("en", "logs", "# Logs")]);
        let html = page(dispatch(&site, "/logs?ref=toc"));
        assert!(html.contains("<h1>Logs</h1>"));
    }

    #[test]
    fn test_encoded_query_delimiter_is_part_of_the_path() {
        let (_dir, site) = test_site(&[("en", "logs", "# Logs")]);
        // `%3F` decodes to `?` inside the path; `logs?x` is not a topic.
        assert!(matches!(dispatch(&site, "/logs%3Fx"), Outcome::NotFound));
    }

    #[test]
    fn test_unreadable_document_still_serves_a_page() {
        let (_dir, site) = test_site(&[]);
        let invalid = _dir.path().join("en");
        fs::create_dir_all(&invalid).unwrap();
        fs::write(invalid.join("logs.md"), [0xff, 0xfe]).unwrap();

        let html = page(dispatch(&site, "/logs"));
        assert!(html.contains("<article class=\"content\"></article>"));
    }
}
