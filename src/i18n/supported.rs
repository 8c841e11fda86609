//! Supported language set: the server side of a negotiation.
//!
//! Holds the supported tags in their configured order together with two
//! lookup indexes: one for exact tag equality and one mapping each primary
//! language subtag to its variants. Both indexes store positions into the
//! ordered list so that expansions always come out in supported order.

use std::collections::HashMap;

use tracing::debug;

use crate::i18n::tag::primary_subtag;

/// An ordered, duplicate-free set of supported language tags.
#[derive(Debug, Clone, Default)]
pub struct SupportedLanguages {
    /// Tags in configured order
    tags: Vec<String>,

    /// Tag -> position in `tags`
    exact: HashMap<String, usize>,

    /// Primary subtag -> positions of every tag sharing it, in order
    generic: HashMap<String, Vec<usize>>,
}

impl SupportedLanguages {
    /// Build the set from an ordered list of tags.
    ///
    /// Repeated tags collapse to their first occurrence.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for tag in tags {
            set.push(tag.as_ref());
        }
        set
    }

    fn push(&mut self, tag: &str) {
        if self.exact.contains_key(tag) {
            debug!(tag, "Ignoring repeated supported language");
            return;
        }

        let index = self.tags.len();
        self.tags.push(tag.to_string());
        self.exact.insert(tag.to_string(), index);
        self.generic
            .entry(primary_subtag(tag).to_string())
            .or_default()
            .push(index);
    }

    /// Get the position of a tag that is supported verbatim.
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.exact.get(tag).copied()
    }

    /// Get the positions of every supported tag whose primary subtag is
    /// `language`, in supported order.
    pub fn variants(&self, language: &str) -> &[usize] {
        self.generic
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get the tag stored at a position.
    pub fn tag(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }

    /// Number of distinct supported tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tags are supported.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SupportedLanguages {
        SupportedLanguages::new(["en-US", "fr-CA", "en-GB", "fr", "fr-FR"])
    }

    fn tags(supported: &SupportedLanguages) -> Vec<&str> {
        (0..supported.len())
            .filter_map(|index| supported.tag(index))
            .collect()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_preserves_order() {
        let supported = sample();
        assert_eq!(tags(&supported), vec!["en-US", "fr-CA", "en-GB", "fr", "fr-FR"]);
        assert_eq!(supported.len(), 5);
    }

    #[test]
    fn test_new_collapses_repeats() {
        let supported = SupportedLanguages::new(["en-US", "fr-FR", "en-US"]);
        assert_eq!(tags(&supported), vec!["en-US", "fr-FR"]);
        assert_eq!(supported.variants("en"), &[0]);
    }

    #[test]
    fn test_empty() {
        let supported = SupportedLanguages::new(Vec::<String>::new());
        assert!(supported.is_empty());
        assert_eq!(supported.len(), 0);
        assert!(supported.variants("en").is_empty());
    }

    #[test]
    fn test_new_from_owned_strings() {
        let owned = vec!["de-DE".to_string(), "de-AT".to_string()];
        let supported = SupportedLanguages::new(&owned);
        assert_eq!(supported.len(), 2);
        assert_eq!(supported.position("de-AT"), Some(1));
    }

    // ==================== Exact Index Tests ====================

    #[test]
    fn test_position_is_case_sensitive() {
        let supported = sample();
        assert_eq!(supported.position("en-US"), Some(0));
        assert_eq!(supported.position("en-us"), None);
        assert_eq!(supported.position("EN-US"), None);
    }

    #[test]
    fn test_position() {
        let supported = sample();
        assert_eq!(supported.position("fr"), Some(3));
        assert_eq!(supported.position("de"), None);
    }

    #[test]
    fn test_tag_lookup() {
        let supported = sample();
        assert_eq!(supported.tag(1), Some("fr-CA"));
        assert_eq!(supported.tag(99), None);
    }

    // ==================== Generic Index Tests ====================

    #[test]
    fn test_variants_in_supported_order() {
        let supported = sample();
        assert_eq!(supported.variants("en"), &[0, 2]);
        assert_eq!(supported.variants("fr"), &[1, 3, 4]);
    }

    #[test]
    fn test_variants_unknown_language() {
        let supported = sample();
        assert!(supported.variants("ja").is_empty());
    }

    #[test]
    fn test_variants_case_sensitive() {
        let supported = sample();
        assert!(supported.variants("EN").is_empty());
    }
}
