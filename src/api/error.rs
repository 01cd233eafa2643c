//! API Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or did not complete
    #[error("Network error: {0}")]
    Network(String),
    /// The service answered with a non-success status
    #[error("{}", server_message(.status, .message))]
    Server { status: u16, message: Option<String> },
    /// The response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
    #[error("{0}")]
    Unknown(String),
}

fn server_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.clone(),
        _ => format!("Request failed with status code {}", status),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Server {
                status: status.as_u16(),
                message: None,
            }
        } else if err.is_request() || err.is_timeout() || err.is_body() {
            ApiError::Network(err.to_string())
        } else {
            ApiError::Unknown(err.to_string())
        }
    }
}
