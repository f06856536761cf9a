use thiserror::Error;

/// Failure of a single REST call to the backend collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// True when the backend answered but rejected the request, as opposed
    /// to the request never completing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}
