//! Accept-Language header tokenization.
//!
//! The header is split on commas, each token is trimmed of surrounding
//! whitespace, and empty tokens are dropped. Quality values are not
//! interpreted: a token like `en;q=0.8` is kept verbatim and will simply not
//! match any supported tag.

use crate::i18n::tag::is_wildcard;

/// A single client preference taken from the header, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference<'a> {
    /// The `*` token.
    Wildcard,

    /// Any other non-empty token.
    Tag(&'a str),
}

impl<'a> Preference<'a> {
    /// Classify a trimmed, non-empty token.
    pub fn from_token(token: &'a str) -> Self {
        if is_wildcard(token) {
            Preference::Wildcard
        } else {
            Preference::Tag(token)
        }
    }
}

/// Iterate the tokens of a comma-separated list, trimmed, skipping empties.
///
/// # Example
/// ```
/// use accept_language::i18n::tokens;
///
/// let parsed: Vec<_> = tokens(" en-US , , *").collect();
/// assert_eq!(parsed, vec!["en-US", "*"]);
/// ```
pub fn tokens(header: &str) -> impl Iterator<Item = &str> {
    header
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
