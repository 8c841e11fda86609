//! Named match scenarios for the demo CLI.
//!
//! A scenario pairs a header with a supported list and, optionally, the result
//! it should produce. Scenarios are loaded from JSON files or taken from the
//! built-in catalogue of worked examples.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::i18n::{LanguageMatcher, MatchStats};

/// Errors that can occur when loading scenario files
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse scenario JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// A single header/supported pair to run through the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    /// Section heading used when printing the catalogue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    pub header: String,

    pub supported: Vec<String>,

    /// Result the scenario should produce, if it is a check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Result of running a scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub header: String,
    pub supported: Vec<String>,
    pub result: Vec<String>,

    /// `None` when the scenario has no expectation
    pub passed: Option<bool>,

    pub stats: MatchStats,
}

impl Scenario {
    fn new(
        group: &str,
        name: &str,
        header: &str,
        supported: &[&str],
        expected: &[&str],
        note: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            group: Some(group.to_string()),
            header: header.to_string(),
            supported: supported.iter().map(|s| s.to_string()).collect(),
            expected: Some(expected.iter().map(|s| s.to_string()).collect()),
            note: (!note.is_empty()).then(|| note.to_string()),
        }
    }

    /// Run the scenario through a fresh matcher.
    pub fn run(&self) -> ScenarioOutcome {
        let matcher = LanguageMatcher::new(&self.supported);
        let (result, stats) = matcher.matches_with_stats(&self.header);
        let result: Vec<String> = result.into_iter().map(str::to_string).collect();
        let passed = self.expected.as_ref().map(|expected| *expected == result);

        ScenarioOutcome {
            name: self.name.clone(),
            header: self.header.clone(),
            supported: self.supported.clone(),
            result,
            passed,
            stats,
        }
    }

    /// The catalogue of worked examples shown by the demo CLI.
    pub fn builtin() -> Vec<Scenario> {
        const EXACT: &str = "Exact matching";
        const GENERIC: &str = "Generic tags";
        const COMBINED: &str = "Combined";
        const WILDCARD: &str = "Wildcard";

        vec![
            Scenario::new(
                EXACT,
                "Multiple preferences",
                "en-US, fr-CA, fr-FR",
                &["fr-FR", "en-US"],
                &["en-US", "fr-FR"],
                "Client prefers en-US, then fr-CA, then fr-FR",
            ),
            Scenario::new(
                EXACT,
                "Partial match",
                "fr-CA, fr-FR",
                &["en-US", "fr-FR"],
                &["fr-FR"],
                "fr-CA is not supported",
            ),
            Scenario::new(
                EXACT,
                "Single exact match",
                "en-US",
                &["en-US", "fr-CA"],
                &["en-US"],
                "",
            ),
            Scenario::new(
                GENERIC,
                "Generic with one variant",
                "en",
                &["en-US", "fr-CA", "fr-FR"],
                &["en-US"],
                "'en' matches 'en-US'",
            ),
            Scenario::new(
                GENERIC,
                "Generic with several variants",
                "fr",
                &["en-US", "fr-CA", "fr-FR"],
                &["fr-CA", "fr-FR"],
                "'fr' matches both French variants in supported order",
            ),
            Scenario::new(
                GENERIC,
                "Exact before generic",
                "fr-FR, fr",
                &["en-US", "fr-CA", "fr-FR"],
                &["fr-FR", "fr-CA"],
                "fr-FR matched exactly first, fr-CA added by 'fr'",
            ),
            Scenario::new(
                COMBINED,
                "Generics mixed with exact tags",
                "en-US, fr, es-ES, de",
                &["en-US", "en-GB", "fr-CA", "fr-FR", "es-ES", "es-MX", "de-DE"],
                &["en-US", "fr-CA", "fr-FR", "es-ES", "de-DE"],
                "",
            ),
            Scenario::new(
                COMBINED,
                "Ordering with duplicates",
                "fr, en-US, fr-CA, en",
                &["en-US", "en-GB", "fr-CA", "fr-FR", "fr-BE"],
                &["fr-CA", "fr-FR", "fr-BE", "en-US", "en-GB"],
                "",
            ),
            Scenario::new(
                COMBINED,
                "No matches",
                "zh, ko",
                &["en-US", "fr-FR", "es-ES"],
                &[],
                "No Chinese or Korean variants supported",
            ),
            Scenario::new(
                WILDCARD,
                "Wildcard fills the rest",
                "en-US, *",
                &["en-US", "fr-CA", "fr-FR"],
                &["en-US", "fr-CA", "fr-FR"],
                "'*' appends every supported language not yet matched",
            ),
            Scenario::new(
                WILDCARD,
                "Wildcard after generic",
                "fr, *",
                &["en-US", "fr-CA", "de-DE", "fr-FR"],
                &["fr-CA", "fr-FR", "en-US", "de-DE"],
                "",
            ),
        ]
    }
}

/// Load and validate scenarios from a JSON array file.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, ScenarioError> {
    let contents = fs::read_to_string(path)?;
    let scenarios: Vec<Scenario> = serde_json::from_str(&contents)?;

    for (i, scenario) in scenarios.iter().enumerate() {
        if scenario.name.trim().is_empty() {
            return Err(ScenarioError::Validation(format!(
                "scenario #{} has an empty name",
                i + 1
            )));
        }
    }

    info!(
        "Loaded {} scenarios from {}",
        scenarios.len(),
        path.display()
    );
    Ok(scenarios)
}
