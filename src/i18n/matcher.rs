//! Accept-Language matching.
//!
//! Tokens are processed strictly in header order. For each token exactly one
//! rule fires, in this priority:
//!
//! 1. `*` appends every supported tag not yet in the result.
//! 2. A token equal to a supported tag (byte-for-byte) appends that tag.
//! 3. A token without a hyphen appends every supported tag whose primary
//!    subtag equals it, in supported order.
//!
//! Anything else is ignored. A tag is never appended twice, so later tokens
//! can only add tags that earlier tokens did not.

use tracing::{debug, trace};

use crate::i18n::preference::{tokens, Preference};
use crate::i18n::stats::MatchStats;
use crate::i18n::supported::SupportedLanguages;
use crate::i18n::tag::is_generic;

/// Reusable matcher over a fixed supported language set.
///
/// Building the matcher indexes the supported tags once; each call to
/// [`LanguageMatcher::matches`] only allocates its own seen-set and result.
/// The matcher is immutable after construction and can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct LanguageMatcher {
    supported: SupportedLanguages,
}

impl LanguageMatcher {
    /// Create a matcher for an ordered list of supported tags.
    pub fn new<I, S>(supported: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            supported: SupportedLanguages::new(supported),
        }
    }

    /// Get the indexed supported set.
    pub fn supported(&self) -> &SupportedLanguages {
        &self.supported
    }

    /// Match a header against the supported set.
    ///
    /// # Returns
    /// The mutually acceptable tags, in client preference order, each at most
    /// once. Borrowed from the matcher.
    pub fn matches(&self, header: &str) -> Vec<&str> {
        self.matches_with_stats(header).0
    }

    /// Match a header and report what each rule contributed.
    pub fn matches_with_stats(&self, header: &str) -> (Vec<&str>, MatchStats) {
        let mut stats = MatchStats::default();

        if header.is_empty() || self.supported.is_empty() {
            return (Vec::new(), stats);
        }

        let mut selection = Selection::new(self.supported.len());

        for token in tokens(header) {
            stats.tokens += 1;
            self.apply(Preference::from_token(token), &mut selection, &mut stats);
        }

        let result: Vec<&str> = selection
            .order
            .iter()
            .filter_map(|&index| self.supported.tag(index))
            .collect();
        stats.matched = result.len();

        debug!(
            tokens = stats.tokens,
            matched = stats.matched,
            ignored = stats.ignored,
            "Matched Accept-Language header"
        );

        (result, stats)
    }

    fn apply(
        &self,
        preference: Preference<'_>,
        selection: &mut Selection,
        stats: &mut MatchStats,
    ) {
        let token = match preference {
            Preference::Wildcard => {
                stats.wildcard_expansions += 1;
                let added = selection.extend(0..self.supported.len(), stats);
                debug!(added, "Wildcard expanded");
                return;
            }
            Preference::Tag(token) => token,
        };

        let exact = self.supported.position(token);
        if let Some(index) = exact {
            if selection.insert(index) {
                stats.exact_hits += 1;
                debug!(token, "Exact match");
                return;
            }
        }

        if is_generic(token) {
            let variants = self.supported.variants(token);
            if !variants.is_empty() {
                stats.generic_expansions += 1;
                let added = selection.extend(variants.iter().copied(), stats);
                debug!(token, added, "Generic match expanded");
                return;
            }
        }

        if exact.is_some() {
            stats.duplicates_skipped += 1;
            trace!(token, "Already matched");
        } else {
            stats.ignored += 1;
            trace!(token, "No supported language for token");
        }
    }
}

/// Insertion-ordered result with a seen flag per supported position.
struct Selection {
    seen: Vec<bool>,
    order: Vec<usize>,
}

impl Selection {
    fn new(size: usize) -> Self {
        Self {
            seen: vec![false; size],
            order: Vec::new(),
        }
    }

    /// Append a position unless already selected. Returns whether it was added.
    fn insert(&mut self, index: usize) -> bool {
        match self.seen.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                self.order.push(index);
                true
            }
            _ => false,
        }
    }

    fn extend(&mut self, indexes: impl Iterator<Item = usize>, stats: &mut MatchStats) -> usize {
        let mut added = 0;
        for index in indexes {
            if self.insert(index) {
                added += 1;
            } else {
                stats.duplicates_skipped += 1;
            }
        }
        added
    }
}

/// Match an Accept-Language header against an ordered list of supported tags.
///
/// This is the one-shot form of [`LanguageMatcher`]: it indexes `supported`
/// on every call. Prefer building a `LanguageMatcher` once when matching many
/// headers against the same set.
///
/// # Arguments
/// * `header` - Raw header value, e.g. `"en-US, fr, *"`
/// * `supported` - Tags the server can serve, in the order expansions should use
///
/// # Example
/// ```
/// use accept_language::match_languages;
///
/// let result = match_languages("en-US, fr-CA, fr-FR", &["fr-FR", "en-US"]);
/// assert_eq!(result, vec!["en-US", "fr-FR"]);
/// ```
pub fn match_languages<S: AsRef<str>>(header: &str, supported: &[S]) -> Vec<String> {
    if header.is_empty() || supported.is_empty() {
        return Vec::new();
    }

    LanguageMatcher::new(supported)
        .matches(header)
        .into_iter()
        .map(str::to_string)
        .collect()
}
