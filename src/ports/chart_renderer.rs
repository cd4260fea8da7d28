//! ChartRenderer port - turns a prediction pattern into an image artifact.
//!
//! Rendering is a presentation side effect, not part of the predictive data
//! model. Each call produces its own in-memory artifact; there is no shared
//! drawing surface, so concurrent predictions for different users cannot
//! interfere.

use crate::domain::ledger::PredictionPattern;

/// Port for chart rendering.
pub trait ChartRenderer: Send + Sync {
    /// Renders the pattern's AM and PM series into an image.
    fn render(&self, pattern: &PredictionPattern) -> Result<ChartImage, ChartError>;
}

/// A rendered chart held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    bytes: Vec<u8>,
    media_type: &'static str,
}

impl ChartImage {
    /// Wraps rendered bytes with their media type.
    pub fn new(bytes: Vec<u8>, media_type: &'static str) -> Self {
        Self { bytes, media_type }
    }

    /// The encoded image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// IANA media type of the encoding.
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }
}

/// Chart rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The drawing backend failed.
    #[error("chart rendering failed: {message}")]
    Render {
        /// Error details.
        message: String,
    },
}

impl ChartError {
    /// Creates a render error.
    pub fn render(message: impl Into<String>) -> Self {
        ChartError::Render {
            message: message.into(),
        }
    }
}
