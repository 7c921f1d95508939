//! Background providers for the pitch
//!
//! The only fallible I/O in the planner lives here. Providers always hand
//! back something drawable: a failed texture fetch degrades to the flat
//! grass color and leaves a notice for the summary.

use std::io::Read;
use std::time::Duration;

use base64::Engine;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::stylesheet::Stylesheet;

use super::config::BackgroundMode;

/// What to paint behind the pitch markings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// Solid fill
    Color(String),
    /// Embedded image as a `data:` URI
    Image { data_uri: String },
}

/// A background plus an optional message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidedBackground {
    pub background: Background,
    pub notice: Option<String>,
}

impl ProvidedBackground {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            background: Background::Color(color.into()),
            notice: None,
        }
    }
}

/// Source of the pitch background
pub trait BackgroundProvider {
    fn provide(&self) -> ProvidedBackground;
}

/// Always paints a single color
#[derive(Debug, Clone)]
pub struct FlatBackground {
    pub color: String,
}

impl FlatBackground {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl BackgroundProvider for FlatBackground {
    fn provide(&self) -> ProvidedBackground {
        ProvidedBackground::color(self.color.clone())
    }
}

/// Reasons a texture could not be used
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("expected an image, got '{content_type}'")]
    NotAnImage { content_type: String },

    #[error("reading the response failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("response body is empty")]
    Empty,

    #[error("texture is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
}

/// Largest texture embedded in a diagram
pub const DEFAULT_MAX_TEXTURE_BYTES: u64 = 8 * 1024 * 1024;

/// Grass texture downloaded over HTTP, with a flat fallback
#[derive(Debug, Clone)]
pub struct RemoteTexture {
    pub url: String,
    pub fallback_color: String,
    pub timeout: Duration,
    pub max_bytes: u64,
}

impl RemoteTexture {
    pub fn new(url: impl Into<String>, fallback_color: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fallback_color: fallback_color.into(),
            timeout: Duration::from_secs(10),
            max_bytes: DEFAULT_MAX_TEXTURE_BYTES,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    fn check_size(&self, size: u64) -> Result<(), TextureError> {
        if size > self.max_bytes {
            return Err(TextureError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    /// Download the texture and encode it as a `data:` URI
    pub fn fetch(&self) -> Result<String, TextureError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client.get(&self.url).send()?.error_for_status()?;

        // Servers that omit the header usually serve JPEG textures
        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_ascii_lowercase())
            .unwrap_or_else(|| "image/jpeg".to_string());
        if !mime.starts_with("image/") {
            return Err(TextureError::NotAnImage { content_type: mime });
        }

        if let Some(size) = response.content_length() {
            self.check_size(size)?;
        }
        // Chunked responses carry no length; stop one byte past the limit
        let mut bytes = Vec::new();
        response
            .take(self.max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)?;
        self.check_size(bytes.len() as u64)?;
        if bytes.is_empty() {
            return Err(TextureError::Empty);
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        Ok(format!("data:{mime};base64,{encoded}"))
    }
}

impl BackgroundProvider for RemoteTexture {
    fn provide(&self) -> ProvidedBackground {
        match self.fetch() {
            Ok(data_uri) => {
                tracing::debug!(url = %self.url, bytes = data_uri.len(), "texture loaded");
                ProvidedBackground {
                    background: Background::Image { data_uri },
                    notice: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    url = %self.url,
                    error = %err,
                    "texture unavailable, using flat grass"
                );
                ProvidedBackground {
                    background: Background::Color(self.fallback_color.clone()),
                    notice: Some(format!(
                        "Grass texture unavailable ({err}); drawing a flat pitch instead."
                    )),
                }
            }
        }
    }
}

/// Pick the provider for a background mode, using the stylesheet grass color
pub fn provider_for(
    mode: &BackgroundMode,
    stylesheet: &Stylesheet,
) -> Box<dyn BackgroundProvider> {
    let grass = stylesheet.resolve_or_default("pitch-grass");
    match mode {
        BackgroundMode::Flat => Box::new(FlatBackground::new(grass)),
        BackgroundMode::Textured { url, timeout } => {
            Box::new(RemoteTexture::new(url.clone(), grass).with_timeout(*timeout))
        }
    }
}
