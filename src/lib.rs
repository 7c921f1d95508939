//! Set-Piece Planner - assign players to set-piece zones and draw the plan
//!
//! This library provides the zone layout resolver, the plan input boundary
//! and an SVG renderer for corner and free-kick routines.
//!
//! # Example
//!
//! ```rust
//! use set_piece_planner::{render_plan_source, RenderConfig};
//!
//! let rendered = render_plan_source(
//!     r#"
//!     scenario = "corner-left"
//!     [assignments]
//!     near-post = "Pedro"
//!     "#,
//!     &RenderConfig::default(),
//! )
//! .unwrap();
//! assert!(rendered.svg.contains("<svg"));
//! assert!(rendered.summary.to_string().contains("Pedro"));
//! ```

pub mod error;
pub mod layout;
pub mod logging;
pub mod plan;
pub mod renderer;
pub mod stylesheet;

pub use error::PlanError;
pub use layout::{
    pitch_geometry, resolve_layout, Assignment, LayoutError, PlacedPlayer, Point, ScenarioKind,
    StaticGeometry, Zone,
};
pub use plan::{Plan, PlanFile, Roster};
pub use renderer::{
    render_svg, Background, BackgroundMode, BackgroundProvider, FlatBackground, PlanSummary,
    ProvidedBackground, RemoteTexture, SvgConfig,
};

use std::path::Path;

use thiserror::Error;

pub use stylesheet::{Stylesheet, StylesheetError};

/// Errors that can occur before a plan is rendered
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Invalid plan input
    #[error("{0}")]
    Plan(#[from] PlanError),

    /// Unreadable or malformed stylesheet
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration, including the background mode
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Load the stylesheet from a TOML file
    pub fn with_stylesheet_file(self, path: &Path) -> Result<Self, PlannerError> {
        let stylesheet = Stylesheet::from_file(path)?;
        tracing::debug!(
            path = %path.display(),
            name = stylesheet.name.as_deref().unwrap_or("unnamed"),
            description = stylesheet.description.as_deref().unwrap_or(""),
            colors = stylesheet.colors.len(),
            "stylesheet loaded"
        );
        Ok(self.with_stylesheet(stylesheet))
    }

    /// Set the background mode
    pub fn with_background(mut self, background: BackgroundMode) -> Self {
        self.svg.background = background;
        self
    }
}

/// A drawn plan and its text summary
#[derive(Debug, Clone)]
pub struct RenderedPlan {
    pub svg: String,
    pub summary: PlanSummary,
}

/// Render a validated plan with an explicit background provider
pub fn render_plan(
    plan: &Plan,
    provider: &dyn BackgroundProvider,
    config: &RenderConfig,
) -> RenderedPlan {
    let placed = resolve_layout(plan.scenario(), plan.assignment());
    for player in &placed {
        tracing::debug!(
            zone = %player.zone,
            player = %player.name,
            x = player.position.x,
            y = player.position.y,
            "placed player"
        );
    }

    let provided = provider.provide();
    let svg = render_svg(
        &placed,
        &pitch_geometry(),
        &provided.background,
        &config.svg,
        &config.stylesheet,
    );

    let mut summary = PlanSummary::new(plan.scenario(), &placed, plan.note());
    if let Some(notice) = provided.notice {
        summary = summary.with_notice(notice);
    }

    RenderedPlan { svg, summary }
}

/// Render a validated plan using the background mode from `config`
pub fn render_plan_with_config(plan: &Plan, config: &RenderConfig) -> RenderedPlan {
    let provider = renderer::provider_for(&config.svg.background, &config.stylesheet);
    render_plan(plan, provider.as_ref(), config)
}

/// Parse, validate and render a TOML plan
pub fn render_plan_source(
    source: &str,
    config: &RenderConfig,
) -> Result<RenderedPlan, PlannerError> {
    let plan = PlanFile::parse(source)?.into_plan()?;
    Ok(render_plan_with_config(&plan, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_plan() {
        let rendered = render_plan_with_config(&Plan::default(), &RenderConfig::default());
        assert!(rendered.svg.contains("<svg"));
        assert!(rendered.svg.contains("</svg>"));
        assert!(rendered.summary.entries.is_empty());
        assert!(rendered.summary.notices.is_empty());
    }

    #[test]
    fn test_render_plan_source_places_players() {
        let rendered = render_plan_source(
            r#"
scenario = "lateral-free-kick"
[assignments]
kicker = "Mateus"
far-post = "Tiago"
"#,
            &RenderConfig::default(),
        )
        .unwrap();
        assert!(rendered.svg.contains(r#"id="player-kicker""#));
        assert!(rendered.svg.contains(r#"cx="20" cy="-25""#));
        assert_eq!(rendered.summary.entries.len(), 2);
    }

    #[test]
    fn test_render_plan_source_rejects_bad_input() {
        let err = render_plan_source("scenario = \"penalty\"", &RenderConfig::default())
            .unwrap_err();
        assert!(matches!(err, PlannerError::Plan(PlanError::Layout { .. })));
    }

    #[test]
    fn test_provider_notice_reaches_summary() {
        struct Noisy;
        impl BackgroundProvider for Noisy {
            fn provide(&self) -> ProvidedBackground {
                ProvidedBackground {
                    background: Background::Color("#00ff00".to_string()),
                    notice: Some("offline".to_string()),
                }
            }
        }

        let rendered = render_plan(&Plan::default(), &Noisy, &RenderConfig::default());
        assert_eq!(rendered.summary.notices, vec!["offline".to_string()]);
        assert!(rendered.svg.contains(r##"fill="#00ff00""##));
    }

    #[test]
    fn test_missing_stylesheet_file() {
        let err = RenderConfig::new()
            .with_stylesheet_file(Path::new("does/not/exist.toml"))
            .unwrap_err();
        assert!(matches!(err, PlannerError::Stylesheet(_)));
    }
}
