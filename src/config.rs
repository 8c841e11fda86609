use std::str::FromStr;

use thiserror::Error;

use crate::i18n::tokens;

/// Supported languages used when `SUPPORTED_LANGUAGES` is not set
pub const DEFAULT_SUPPORTED_LANGUAGES: &str = "en-US,fr-CA,fr-FR";

/// Errors that can occur when loading configuration from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),

    #[error("SUPPORTED_LANGUAGES contains no language tags")]
    NoSupportedLanguages,
}

/// How the demo CLI prints results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Matching
    pub supported_languages: Vec<String>,

    // Output
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let supported_raw = std::env::var("SUPPORTED_LANGUAGES")
            .unwrap_or_else(|_| DEFAULT_SUPPORTED_LANGUAGES.to_string());

        Ok(Self {
            // Matching - same tokenizer as headers, so stray commas are fine
            supported_languages: parse_supported_languages(&supported_raw)?,

            // Output
            output_format: match std::env::var("OUTPUT_FORMAT") {
                Ok(value) => value.parse()?,
                Err(_) => OutputFormat::default(),
            },
        })
    }
}

/// Split a comma-separated supported language list.
pub fn parse_supported_languages(raw: &str) -> Result<Vec<String>, ConfigError> {
    let languages: Vec<String> = tokens(raw).map(str::to_string).collect();
    if languages.is_empty() {
        return Err(ConfigError::NoSupportedLanguages);
    }
    Ok(languages)
}
