//! Diagram renderer for set-piece plans
//!
//! This module turns pitch geometry and placed players into an SVG string,
//! and produces the text summary shown next to it.

pub mod background;
pub mod config;
pub mod summary;
pub mod svg;

pub use background::{
    provider_for, Background, BackgroundProvider, FlatBackground, ProvidedBackground,
    RemoteTexture, TextureError, DEFAULT_MAX_TEXTURE_BYTES,
};
pub use config::{BackgroundMode, SvgConfig, DEFAULT_TEXTURE_URL};
pub use summary::PlanSummary;
pub use svg::render_svg;
