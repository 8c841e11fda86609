//! Accept-Language matching against a supported language set.
//!
//! The core entry point is [`match_languages`]; [`LanguageMatcher`] is the
//! reusable form for matching many headers against one supported set.

pub mod config;
pub mod i18n;
pub mod scenario;

pub use i18n::{match_languages, LanguageMatcher, MatchStats};
