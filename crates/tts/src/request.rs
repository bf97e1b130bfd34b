use std::sync::Arc;

use axum::body::Body;

use crate::{
    error::TtsError,
    server::Server,
    types::{SpeechRequest, SpeechRequestBody},
};

/// Extractor for validated speech requests
///
/// Rejects non-`POST` methods before touching the body, then enforces the
/// server's body limit, parses JSON, and checks required fields.
pub struct ExtractPayload(pub SpeechRequest);

impl axum::extract::FromRequest<Arc<Server>> for ExtractPayload {
    type Rejection = TtsError;

    async fn from_request(request: http::Request<Body>, server: &Arc<Server>) -> Result<Self, Self::Rejection> {
        if request.method() != http::Method::POST {
            tracing::debug!("Rejecting {} {}", request.method(), request.uri().path());
            return Err(TtsError::MethodNotAllowed);
        }

        let limit = server.body_limit();

        let bytes = axum::body::to_bytes(request.into_body(), limit).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                tracing::debug!("Request body exceeds {limit} bytes");
                TtsError::PayloadTooLarge
            } else {
                tracing::debug!("Failed to read request body: {err}");
                TtsError::InvalidJson
            }
        })?;

        let body = serde_json::from_slice::<SpeechRequestBody>(&bytes).map_err(|e| {
            tracing::debug!("Failed to parse request body: {e}");
            TtsError::InvalidJson
        })?;

        SpeechRequest::try_from(body).map(Self)
    }
}
