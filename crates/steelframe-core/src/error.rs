use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrameError>;

/// Reasons a rebuild is refused. Generation itself is deterministic, so every
/// variant describes bad input rather than a transient condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("too many primitives: {count} (max: {max})")]
    TooManyPrimitives { count: usize, max: usize },

    #[error("scene has no group tagged `{0}`")]
    MissingGroup(String),
}

impl FrameError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
