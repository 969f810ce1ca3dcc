use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrendsError>;

#[derive(Debug, Error)]
pub enum TrendsError {
    /// Caller error: empty keyword or unsupported time window.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The trends service answered with a body we could not interpret.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Network failure, timeout or non-success status.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl TrendsError {
    /// Whether repeating the whole lookup could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TrendsError::Transport(_))
    }
}

impl From<reqwest::Error> for TrendsError {
    fn from(err: reqwest::Error) -> Self {
        TrendsError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for TrendsError {
    fn from(err: serde_json::Error) -> Self {
        TrendsError::MalformedResponse(err.to_string())
    }
}
