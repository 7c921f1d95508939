//! Error types for plan input and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::layout::{LayoutError, Zone};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Configuration errors caught at the input boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("invalid plan file: {message}")]
    Toml { message: String, span: Option<Span> },

    #[error("{source}")]
    Layout {
        source: LayoutError,
        span: Option<Span>,
    },

    #[error("player '{name}' for zone '{zone}' is not in the roster")]
    UnknownPlayer {
        name: String,
        zone: Zone,
        suggestions: Vec<String>,
        span: Option<Span>,
    },

    #[error("player '{name}' appears more than once in the roster")]
    DuplicatePlayer { name: String },

    #[error("roster contains an empty player name")]
    EmptyPlayerName,

    #[error("'{name}' is reserved for an empty zone and cannot name a player")]
    ReservedPlayerName { name: String },

    #[error("invalid assignment '{raw}', expected ZONE=PLAYER")]
    InvalidOverride { raw: String },
}

impl From<toml::de::Error> for PlanError {
    fn from(err: toml::de::Error) -> Self {
        PlanError::Toml {
            message: err.message().to_string(),
            span: err.span(),
        }
    }
}

impl From<LayoutError> for PlanError {
    fn from(source: LayoutError) -> Self {
        PlanError::Layout { source, span: None }
    }
}

impl PlanError {
    /// Attach a source location if the error does not carry one yet
    pub fn with_span(mut self, at: Span) -> Self {
        match &mut self {
            PlanError::Toml { span, .. }
            | PlanError::Layout { span, .. }
            | PlanError::UnknownPlayer { span, .. } => {
                if span.is_none() {
                    *span = Some(at);
                }
            }
            _ => {}
        }
        self
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            PlanError::Toml { span, .. }
            | PlanError::Layout { span, .. }
            | PlanError::UnknownPlayer { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> &[String] {
        match self {
            PlanError::Layout { source, .. } => source.suggestions(),
            PlanError::UnknownPlayer { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to the plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("{filename}: {self}");
        };

        let message = self.to_string();
        let hint = match self.suggestions() {
            [] => String::new(),
            names => format!("\nDid you mean: {}", names.join(", ")),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(format!("{}{}", message, hint))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{filename}: {message}"),
        }
    }
}
