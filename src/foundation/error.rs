/// Convenience result type used across Loopforge.
pub type LoopforgeResult<T> = Result<T, LoopforgeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LoopforgeError {
    /// Invalid user-provided style or render configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors from a style provider (e.g. no JSON object in generated text).
    #[error("provider error: {0}")]
    Provider(String),

    /// Errors while encoding frames to PNG or MP4.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoopforgeError {
    /// Build a [`LoopforgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoopforgeError::Provider`] value.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Build a [`LoopforgeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LoopforgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
