//! Request URL normalization.

/// Normalize URL: strip query string, decode, trim slashes.
///
/// The result is the path used for locale resolution and topic routing,
/// e.g. `/fr/logs?x=1` becomes `fr/logs`. The query split happens on the
/// raw URL so an encoded `?` stays part of the path.
pub fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;

    let path = url.split('?').next().unwrap_or(url);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    decoded.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        assert_eq!(normalize_url("/"), "");
    }

    #[test]
    fn test_trims_slashes() {
        assert_eq!(normalize_url("/logs/"), "logs");
        assert_eq!(normalize_url("/fr/logs"), "fr/logs");
    }

    #[test]
    fn test_strips_query_string() {
        assert_eq!(normalize_url("/logs?ref=nav"), "logs");
        assert_eq!(normalize_url("/?a=1"), "");
    }

    #[test]
    fn test_encoded_question_mark_stays_in_path() {
        assert_eq!(normalize_url("/logs%3Fx"), "logs?x");
    }

    #[test]
    fn test_query_is_stripped_before_decoding() {
        assert_eq!(normalize_url("/logs?next=%2Ffr%2Flogs"), "logs");
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(normalize_url("/fr/%6C%6F%67%73"), "fr/logs");
    }

    #[test]
    fn test_invalid_encoding_yields_empty() {
        assert_eq!(normalize_url("/%ff%fe"), "");
    }
}
