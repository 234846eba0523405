//! Markdown to HTML rendering using pulldown-cmark.
//!
//! Rendering is a pure function of the input text: no state, no I/O,
//! deterministic. pulldown-cmark is permissive by design; should the parser
//! ever fault, the request degrades to an escaped rendering of the raw
//! source instead of failing.

use pulldown_cmark::{Options, Parser, html};

use crate::utils::html::escape;

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable heading attributes extension (e.g., `# Heading {#custom-id}`)
    pub heading_attributes: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            heading_attributes: true,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }
}

/// Convert markdown to an HTML fragment with all extensions enabled.
///
/// Never fails: a renderer fault falls back to [`render_fallback`].
pub fn render_markdown(markdown: &str) -> String {
    let options = MarkdownOptions::all();
    std::panic::catch_unwind(|| render_with(markdown, &options))
        .unwrap_or_else(|_| render_fallback(markdown))
}

/// Convert markdown with explicit options.
fn render_with(markdown: &str, options: &MarkdownOptions) -> String {
    let parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Escaped-text rendering of raw markdown source.
fn render_fallback(markdown: &str) -> String {
    format!("<pre>{}</pre>", escape(markdown))
}
