/// Convenience result type used across wishcraft.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by generator and compositor APIs.
///
/// Photo decode failures are not part of this taxonomy: the compositor absorbs them and draws a
/// placeholder frame instead.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid template, theme, or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface could not be created or driven.
    #[error("render error: {0}")]
    Render(String),

    /// The finished raster could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing templates and theme tables.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
