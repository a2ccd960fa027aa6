/// Convenience result type used across chromatext.
pub type ChromaResult<T> = Result<T, ChromaError>;

/// Top-level error taxonomy used by the effect and viewer APIs.
///
/// `MissingResource`, `Decode` and `Network` are recoverable: the asset loaders
/// log them and substitute a generated fallback instead of returning them.
#[derive(thiserror::Error, Debug)]
pub enum ChromaError {
    /// Invalid user-provided parameters (sizes, font sizes, config values).
    #[error("validation error: {0}")]
    Validation(String),

    /// A font or texture file that does not exist.
    #[error("missing resource: {0}")]
    MissingResource(String),

    /// Corrupt or unreadable image/font data.
    #[error("decode error: {0}")]
    Decode(String),

    /// Remote texture fetch failure.
    #[error("network error: {0}")]
    Network(String),

    /// Errors raised while rasterizing or compositing surfaces.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, usually IO with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChromaError {
    /// Build [`ChromaError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`ChromaError::MissingResource`].
    pub fn missing(msg: impl Into<String>) -> Self {
        Self::MissingResource(msg.into())
    }

    /// Build [`ChromaError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build [`ChromaError::Network`].
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Build [`ChromaError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build [`ChromaError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for the error kinds that loaders answer with a generated fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingResource(_) | Self::Decode(_) | Self::Network(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
