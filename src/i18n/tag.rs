//! Language tag helpers.
//!
//! Tags are treated as opaque, case-sensitive strings. The only structure
//! interpreted is the split on the first hyphen, which separates the primary
//! language subtag (`en`) from whatever follows it (`US`).

/// The wildcard token that matches every supported language.
pub const WILDCARD: &str = "*";

/// Separator between the primary language subtag and the region.
pub const SUBTAG_SEPARATOR: char = '-';

/// Get the primary language subtag of a tag.
///
/// # Arguments
/// * `tag` - A language tag such as `en-US` or `en`
///
/// # Returns
/// Everything before the first hyphen, or the whole tag when it has none.
///
/// # Example
/// ```
/// use accept_language::i18n::primary_subtag;
///
/// assert_eq!(primary_subtag("en-US"), "en");
/// assert_eq!(primary_subtag("zh-Hant-TW"), "zh");
/// assert_eq!(primary_subtag("fr"), "fr");
/// ```
pub fn primary_subtag(tag: &str) -> &str {
    match tag.split_once(SUBTAG_SEPARATOR) {
        Some((primary, _)) => primary,
        None => tag,
    }
}

/// Check whether a tag is generic (a bare language code without a region).
pub fn is_generic(tag: &str) -> bool {
    !tag.contains(SUBTAG_SEPARATOR)
}

/// Check whether a token is the wildcard `*`.
pub fn is_wildcard(token: &str) -> bool {
    token == WILDCARD
}
