//! Client error types.

use casa_shared::AppError;
use thiserror::Error;

/// Errors talking to the household API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or protocol failure.
    #[error("Household API unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Household API returned {status}: {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// The envelope `mensagem`, or the status reason when absent.
        message: String,
    },

    /// The body was not the expected envelope.
    #[error("Invalid household API payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Upstream {
                status: 404,
                message,
            } => Self::NotFound(message),
            ClientError::Upstream { status, message } if (400..500).contains(&status) => {
                Self::Validation(message)
            }
            other => Self::ExternalService(other.to_string()),
        }
    }
}
