/// Convenience result type used across levelup.
pub type LevelupResult<T> = Result<T, LevelupError>;

/// Top-level error taxonomy used by library APIs.
///
/// The animation core itself never fails once it holds a validated
/// [`RevealText`](crate::RevealText); these variants cover the edges around it
/// (input validation, glyph sheets, configuration, encoding).
#[derive(thiserror::Error, Debug)]
pub enum LevelupError {
    /// Invalid user-provided text or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or slicing a glyph sprite sheet.
    #[error("glyph error: {0}")]
    Glyph(String),

    /// Errors while streaming frames to an encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LevelupError {
    /// Build a [`LevelupError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LevelupError::Glyph`] value.
    pub fn glyph(msg: impl Into<String>) -> Self {
        Self::Glyph(msg.into())
    }

    /// Build a [`LevelupError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LevelupError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
