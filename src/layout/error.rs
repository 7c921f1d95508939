//! Error types for the layout resolver

use thiserror::Error;

/// Errors raised when turning raw names into layout types
///
/// The resolver itself is total; these only occur at the parsing boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Scenario name outside the supported set pieces
    #[error("unknown scenario '{name}'{}", format_suggestions(suggestions))]
    UnknownScenario {
        name: String,
        suggestions: Vec<String>,
    },

    /// Zone key outside the fixed zone table
    #[error("unknown zone '{name}'{}", format_suggestions(suggestions))]
    UnknownZone {
        name: String,
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

impl LayoutError {
    /// Create an unknown scenario error with suggestions
    pub fn unknown_scenario(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownScenario {
            name: name.into(),
            suggestions,
        }
    }

    /// Create an unknown zone error with suggestions
    pub fn unknown_zone(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownZone {
            name: name.into(),
            suggestions,
        }
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::UnknownScenario { suggestions, .. } | Self::UnknownZone { suggestions, .. } => {
                suggestions
            }
        }
    }
}
