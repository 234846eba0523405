//! The fixed ordered topic sequence and its neighbor queries.
//!
//! Topics ("factors") form a single hard-coded sequence defined at compile
//! time. Order is significant: it defines prev/next navigation adjacency.
//! There is no insertion or removal API; the index is process-wide read-only
//! state, safe for unsynchronized concurrent reads.

/// One entry in the documentation sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct Topic {
    /// URL path segment, e.g. `build-release-run`.
    pub slug: &'static str,
    /// Human-readable title used in page headings and nav links.
    pub title: &'static str,
}

/// The shipped documentation set, in reading order.
const TOPICS: &[Topic] = &[
    Topic { slug: "codebase", title: "Codebase" },
    Topic { slug: "dependencies", title: "Dependencies" },
    Topic { slug: "config", title: "Config" },
    Topic { slug: "backing-services", title: "Backing Services" },
    Topic { slug: "build-release-run", title: "Build, Release, Run" },
    Topic { slug: "processes", title: "Processes" },
    Topic { slug: "port-binding", title: "Port Binding" },
    Topic { slug: "concurrency", title: "Concurrency" },
    Topic { slug: "disposability", title: "Disposability" },
    Topic { slug: "dev-prod-parity", title: "Dev/Prod Parity" },
    Topic { slug: "logs", title: "Logs" },
    Topic { slug: "admin-processes", title: "Admin Processes" },
];

/// Ordered set of topics with membership and neighbor lookup.
///
/// An unknown slug is a typed outcome (`None`), not a silent fallthrough.
#[derive(Debug)]
pub struct TopicIndex {
    topics: &'static [Topic],
}

/// The process-wide topic index.
pub static TOPIC_INDEX: TopicIndex = TopicIndex::new();

impl Default for TopicIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicIndex {
    pub const fn new() -> Self {
        Self { topics: TOPICS }
    }

    #[cfg(test)]
    const fn with_topics(topics: &'static [Topic]) -> Self {
        Self { topics }
    }

    /// Position of a slug in the sequence.
    fn position(&self, slug: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.slug == slug)
    }

    /// Look up a topic by slug.
    pub fn get(&self, slug: &str) -> Option<&'static Topic> {
        self.position(slug).map(|i| &self.topics[i])
    }

    /// Membership test. Routing goes through `get`; this exists for tests
    /// that only care about the yes/no answer.
    #[cfg(test)]
    pub fn contains(&self, slug: &str) -> bool {
        self.position(slug).is_some()
    }

    /// Topic immediately before `slug`, absent for the first element.
    pub fn prev(&self, slug: &str) -> Option<&'static Topic> {
        let i = self.position(slug)?;
        i.checked_sub(1).map(|p| &self.topics[p])
    }

    /// Topic immediately after `slug`, absent for the last element.
    pub fn next(&self, slug: &str) -> Option<&'static Topic> {
        let i = self.position(slug)?;
        self.topics.get(i + 1)
    }

    /// All topics in document order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Topic> {
        self.topics.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.topics.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &[Topic] = &[
        Topic { slug: "a", title: "A" },
        Topic { slug: "b", title: "B" },
        Topic { slug: "c", title: "C" },
    ];

    #[test]
    fn test_no_duplicate_slugs() {
        let index = TopicIndex::new();
        let mut seen = std::collections::HashSet::new();
        for topic in index.iter() {
            assert!(seen.insert(topic.slug), "duplicate slug: {}", topic.slug);
        }
    }

    #[test]
    fn test_membership() {
        let index = TopicIndex::with_topics(ABC);
        assert!(index.contains("a"));
        assert!(index.contains("c"));
        assert!(!index.contains("d"));
        assert!(!index.contains(""));
    }

    #[test]
    fn test_prev_follows_sequence_order() {
        let index = TopicIndex::with_topics(ABC);
        assert!(index.prev("a").is_none());
        assert_eq!(index.prev("b").unwrap().slug, "a");
        assert_eq!(index.prev("c").unwrap().slug, "b");
    }

    #[test]
    fn test_next_follows_sequence_order() {
        let index = TopicIndex::with_topics(ABC);
        assert_eq!(index.next("a").unwrap().slug, "b");
        assert_eq!(index.next("b").unwrap().slug, "c");
        assert!(index.next("c").is_none());
    }

    #[test]
    fn test_neighbors_of_unknown_slug() {
        let index = TopicIndex::with_topics(ABC);
        assert!(index.prev("zzz").is_none());
        assert!(index.next("zzz").is_none());
    }

    #[test]
    fn test_shipped_sequence_boundaries() {
        let index = TopicIndex::new();
        let first = index.iter().next().unwrap();
        let last = index.iter().last().unwrap();
        assert!(index.prev(first.slug).is_none());
        assert!(index.next(last.slug).is_none());
        assert_eq!(index.len(), 12);
    }

    #[test]
    fn test_every_inner_topic_has_both_neighbors() {
        let index = TopicIndex::new();
        let slugs: Vec<_> = index.iter().map(|t| t.slug).collect();
        for window in slugs.windows(2) {
            assert_eq!(index.next(window[0]).unwrap().slug, window[1]);
            assert_eq!(index.prev(window[1]).unwrap().slug, window[0]);
        }
    }
}
