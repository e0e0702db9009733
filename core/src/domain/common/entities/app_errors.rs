use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("All confirmed ingredients were excluded")]
    AllIngredientsExcluded,

    #[error("Unparseable AI response: {0}")]
    UpstreamParseFailure(String),

    #[error("AI service call failed: {0}")]
    UpstreamCallFailure(String),

    #[error("Not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Errors raised by the AI collaborator rather than by the request itself.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CoreError::UpstreamParseFailure(_) | CoreError::UpstreamCallFailure(_)
        )
    }
}
