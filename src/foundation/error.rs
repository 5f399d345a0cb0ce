/// Convenience result type used across the crate.
pub type GlowResult<T> = Result<T, GlowError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Root finding never produces one of these: a trajectory that fails to converge simply
/// contributes no root.
#[derive(thiserror::Error, Debug)]
pub enum GlowError {
    /// Invalid user-provided configuration (viewport, dimensions, heights, fps).
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal failures while generating points (worker panics, closed queues).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors while writing images or driving the external video encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlowError {
    /// Build a [`GlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlowError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`GlowError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`GlowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
