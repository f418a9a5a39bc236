use thiserror::Error;

/// Operation failures. The Display text of `Validation`, `Conflict` and
/// `NotFound` is the exact message sent to clients, so no prefixes here.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn validation(msg: &str) -> Self {
        Self::Validation(msg.to_string())
    }

    pub fn conflict(msg: &str) -> Self {
        Self::Conflict(msg.to_string())
    }

    pub fn not_found(msg: &str) -> Self {
        Self::NotFound(msg.to_string())
    }
}
