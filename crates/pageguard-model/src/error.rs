use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown notice kind: {0}")]
    UnknownNoticeKind(String),

    #[error("unknown form method: {0}")]
    UnknownMethod(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
