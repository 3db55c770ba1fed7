/// Convenience result type used across Spotlight.
pub type SpotlightResult<T> = Result<T, SpotlightError>;

/// Top-level error taxonomy.
///
/// Per-frame evaluation is infallible; only construction of inputs (viewports, configs,
/// sessions) can fail.
#[derive(thiserror::Error, Debug)]
pub enum SpotlightError {
    /// Invalid host-provided data (viewport sizes, handles).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration values outside their accepted domain.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpotlightError {
    /// Build a [`SpotlightError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpotlightError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SpotlightError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
