//! Error handling for the backend module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("Decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The auth collaborator reported no authenticated user.
    #[error("no authenticated user")]
    NoSession,

    /// The row query matched nothing.
    #[error("no agent row found")]
    NoRows,

    /// The row query matched more than the single row it expects.
    #[error("expected a single agent row, found {0}")]
    MultipleRows(usize),
}

impl BackendError {
    pub async fn from_response(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        BackendError::Http { status, message }
    }
}
