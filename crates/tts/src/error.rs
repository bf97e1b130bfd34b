use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Failures of a single speech request
///
/// The display text of each variant is exactly the plain-text body sent back
/// to the caller. Details carried by upstream variants are for logs only.
#[derive(Debug, Error)]
pub enum TtsError {
    /// Anything other than `POST`
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Body is not JSON of the speech request shape
    #[error("Invalid JSON")]
    InvalidJson,

    /// `input` or `voice` absent or empty
    #[error("Missing required fields: input, voice")]
    MissingFields,

    /// Body exceeded the configured limit
    #[error("Request body is too large")]
    PayloadTooLarge,

    /// Workers AI could not be reached
    #[error("Error contacting Workers AI")]
    ConnectionError(String),

    /// Workers AI answered with a non-success status; `message` is its raw body
    #[error("Workers AI error: {message}")]
    ProviderApiError { status: u16, message: String },

    /// Workers AI answered 2xx but the body lacks usable audio
    #[error("Invalid response from Workers AI")]
    InvalidProviderResponse(String),
}

impl TtsError {
    /// Get the appropriate HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson | Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ConnectionError(_) | Self::ProviderApiError { .. } | Self::InvalidProviderResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Whether the caller, rather than Workers AI, caused the failure
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!("Rejecting speech request: {self}");
        } else {
            tracing::warn!("Speech request failed upstream: {self:?}");
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
