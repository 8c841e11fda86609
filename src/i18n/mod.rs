//! Accept-Language negotiation.
//!
//! Everything needed to turn a client's Accept-Language header and a server's
//! supported language list into the ordered list of languages both sides
//! accept.
//!
//! # Architecture
//!
//! - `tag`: Primary-subtag splitting and token classification
//! - `preference`: Header tokenization into ordered preferences
//! - `supported`: Ordered supported set with exact and generic indexes
//! - `matcher`: The matching rules (wildcard, exact, generic)
//! - `stats`: Per-call counters describing what each rule contributed
//!
//! # Example
//!
//! ```
//! use accept_language::i18n::LanguageMatcher;
//!
//! let matcher = LanguageMatcher::new(["en-US", "fr-CA", "fr-FR"]);
//! assert_eq!(matcher.matches("fr-FR, fr"), vec!["fr-FR", "fr-CA"]);
//! assert_eq!(matcher.matches("en-US, *"), vec!["en-US", "fr-CA", "fr-FR"]);
//! ```

mod matcher;
mod preference;
mod stats;
mod supported;
mod tag;

pub use matcher::{match_languages, LanguageMatcher};
pub use preference::{tokens, Preference};
pub use stats::MatchStats;
pub use supported::SupportedLanguages;
pub use tag::{is_generic, is_wildcard, primary_subtag, WILDCARD};
