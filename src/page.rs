//! HTML page assembly.
//!
//! Composes the rendered body with the chrome every page carries: a locale
//! switcher (one link per available locale, same topic) and, on topic pages,
//! prev/next pager links. Navigation absence at sequence boundaries renders
//! as omitted controls, not as errors.

use crate::locale::LocaleSet;
use crate::topics::{Topic, TopicIndex};
use crate::utils::html::escape;

/// Per-request page rendering context.
///
/// Owned by the request being served; carries the resolved locale as a plain
/// value and borrows the process-wide read-only configuration.
pub struct PageContext<'a> {
    pub site_title: &'a str,
    pub locales: &'a LocaleSet,
    pub topics: &'a TopicIndex,
    /// Effective locale for this request.
    pub locale: &'a str,
}

impl PageContext<'_> {
    /// Render a full topic page. `body` may be empty (missing translation);
    /// the navigation chrome is emitted either way.
    pub fn topic_page(&self, topic: &Topic, body: &str) -> String {
        let mut main = String::new();
        main.push_str(&format!("<article class=\"content\">{body}</article>\n"));
        main.push_str(&self.pager(topic));
        self.layout(topic.title, Some(topic.slug), &main)
    }

    /// Render the home view: optional intro content plus the topic TOC.
    pub fn home_page(&self, intro: &str) -> String {
        let mut main = String::new();
        main.push_str(&format!("<article class=\"content\">{intro}</article>\n"));

        main.push_str("<ol class=\"toc\">\n");
        for topic in self.topics.iter() {
            main.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                self.locales.href(self.locale, Some(topic.slug)),
                escape(topic.title),
            ));
        }
        main.push_str("</ol>\n");

        self.layout(self.site_title, None, &main)
    }

    /// Shared document shell.
    fn layout(&self, title: &str, current_topic: Option<&str>, main: &str) -> String {
        format!(
            "<!doctype html>\n\
             <html lang=\"{lang}\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title} · {site}</title>\n\
             </head>\n\
             <body>\n\
             <header>\n\
             <a class=\"home\" href=\"{home}\">{site}</a>\n\
             {locales}\
             </header>\n\
             <main>\n{main}</main>\n\
             </body>\n\
             </html>\n",
            lang = escape(self.locale),
            title = escape(title),
            site = escape(self.site_title),
            home = self.locales.href(self.locale, None),
            locales = self.locale_switcher(current_topic),
            main = main,
        )
    }

    /// One link per available locale, pointing at the same topic (or home)
    /// under that locale's path prefix convention.
    fn locale_switcher(&self, topic: Option<&str>) -> String {
        let mut nav = String::from("<nav class=\"locales\">\n");
        for locale in self.locales.iter() {
            let class = if locale == self.locale {
                " class=\"active\""
            } else {
                ""
            };
            nav.push_str(&format!(
                "<a{class} href=\"{}\">{}</a>\n",
                self.locales.href(locale, topic),
                escape(locale),
            ));
        }
        nav.push_str("</nav>\n");
        nav
    }

    /// Prev/next links within the fixed sequence. Boundary neighbors are
    /// simply omitted.
    fn pager(&self, topic: &Topic) -> String {
        let mut nav = String::from("<nav class=\"pager\">\n");
        if let Some(prev) = self.topics.prev(topic.slug) {
            nav.push_str(&format!(
                "<a class=\"prev\" href=\"{}\">{}</a>\n",
                self.locales.href(self.locale, Some(prev.slug)),
                escape(prev.title),
            ));
        }
        if let Some(next) = self.topics.next(topic.slug) {
            nav.push_str(&format!(
                "<a class=\"next\" href=\"{}\">{}</a>\n",
                self.locales.href(self.locale, Some(next.slug)),
                escape(next.title),
            ));
        }
        nav.push_str("</nav>\n");
        nav
    }
}
