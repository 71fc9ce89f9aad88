use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed.
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response body: {0}")]
    Decode(String),
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Backend-supplied explanation, if the response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
