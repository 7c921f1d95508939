//! Configuration for SVG rendering

use std::time::Duration;

use crate::layout::Rect;

/// Texture used when `--background textured` is requested without a URL
pub const DEFAULT_TEXTURE_URL: &str = "https://images.unsplash.com/photo-1529900748604-07564a03e7a6?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";

/// How the grass behind the markings is painted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackgroundMode {
    /// Solid `pitch-grass` color
    #[default]
    Flat,
    /// Remote grass image, solid color if it cannot be fetched
    Textured { url: String, timeout: Duration },
}

impl BackgroundMode {
    /// Textured background with the default timeout
    pub fn textured(url: impl Into<String>) -> Self {
        BackgroundMode::Textured {
            url: url.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Configuration options for SVG output
///
/// Lengths are in normalized pitch units.
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Visible part of the pitch
    pub viewport: Rect,

    /// Area covered by a texture image
    pub texture_extent: Rect,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "sp-" for "sp-player")
    pub class_prefix: Option<String>,

    /// Stroke width of pitch markings
    pub line_width: f64,

    /// Radius of a player marker
    pub marker_radius: f64,

    /// Offset of the drop shadow from the marker center
    pub shadow_offset: (f64, f64),

    /// Distance from the marker center to the label baseline
    pub label_offset: f64,

    /// Label font size
    pub font_size: f64,

    /// Background selection
    pub background: BackgroundMode,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewport: Rect::new(-10.0, -10.0, 120.0, 70.0),
            texture_extent: Rect::new(-10.0, -10.0, 120.0, 120.0),
            standalone: true,
            pretty_print: true,
            class_prefix: Some("sp-".to_string()),
            line_width: 0.6,
            marker_radius: 3.0,
            shadow_offset: (1.0, -1.0),
            label_offset: 4.5,
            font_size: 3.0,
            background: BackgroundMode::Flat,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visible part of the pitch
    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the player marker radius
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Set the label distance above the marker
    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    /// Set the background mode
    pub fn with_background(mut self, background: BackgroundMode) -> Self {
        self.background = background;
        self
    }
}
