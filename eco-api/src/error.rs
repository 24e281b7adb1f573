/// Error types for the EcoVision API client
use crate::response::ResponseBody;
use thiserror::Error;

/// Main error type for API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure: the backend could not be reached or the body could not be read
    #[error("Network error connecting to API: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Request {
        status: u16,
        message: String,
        body: ResponseBody,
    },

    /// The envelope's `data` field did not have the expected shape
    #[error("Failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for `Request` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
