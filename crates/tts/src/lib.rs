#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod model;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Router, extract::State, response::IntoResponse};

pub use error::{Result, TtsError};
pub use model::{BackendPayload, DEFAULT_MIME_TYPE, DEFAULT_MODEL, ModelProfile};
pub use provider::TtsProvider;
pub use server::{Server, TtsServerBuilder};
pub use types::{AudioEnvelope, ProviderAudio, ResponseFormat, SpeechRequest, SpeechResponse};
use request::ExtractPayload;

/// Build the TTS server from configuration
pub fn build_server(config: &voxbridge_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TtsServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for TTS
///
/// Every path and method lands on [`synthesize`].
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().fallback(synthesize)
}

/// Handle speech synthesis requests
pub async fn synthesize(
    State(server): State<Arc<Server>>,
    ExtractPayload(request): ExtractPayload,
) -> Result<axum::response::Response> {
    tracing::debug!(
        "TTS speech handler called for model: {}",
        request.model.as_deref().unwrap_or(DEFAULT_MODEL)
    );

    let response = server.synthesize(request).await?;

    tracing::debug!("Speech synthesis complete");

    Ok(response.into_response())
}
