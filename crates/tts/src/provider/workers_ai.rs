use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    error::TtsError,
    model::{BackendPayload, ModelProfile},
    types::ProviderAudio,
};

use super::TtsProvider;

/// Cloudflare Workers AI text-to-speech provider
pub struct WorkersAiProvider {
    client: Client,
    base_url: Url,
    account_id: String,
    api_token: SecretString,
}

impl WorkersAiProvider {
    pub fn new(client: Client, base_url: Url, account_id: String, api_token: SecretString) -> Self {
        Self {
            client,
            base_url,
            account_id,
            api_token,
        }
    }

    fn run_url(&self, model: &str) -> String {
        format!(
            "{}/{}/ai/run/{model}",
            self.base_url.as_str().trim_end_matches('/'),
            self.account_id
        )
    }
}

/// `POST /ai/run` response envelope; nothing in it is trusted
#[derive(Debug, Default, Deserialize)]
struct RunResponse {
    result: Option<RunResult>,
}

#[derive(Debug, Default, Deserialize)]
struct RunResult {
    audio: Option<String>,
    mime_type: Option<String>,
}

fn extract_audio(profile: ModelProfile, response: RunResponse) -> crate::error::Result<ProviderAudio> {
    let result = response.result.unwrap_or_default();

    let audio = result
        .audio
        .filter(|audio| !audio.is_empty())
        .ok_or_else(|| TtsError::InvalidProviderResponse("result.audio is missing or empty".to_string()))?;

    let mime_type = profile.mime_type(result.mime_type.as_deref());
    if mime_type.is_empty() {
        return Err(TtsError::InvalidProviderResponse("mime type is empty".to_string()));
    }

    Ok(ProviderAudio {
        audio,
        mime_type: mime_type.to_string(),
    })
}

#[async_trait]
impl TtsProvider for WorkersAiProvider {
    async fn run(
        &self,
        profile: ModelProfile,
        payload: &BackendPayload<'_>,
    ) -> crate::error::Result<ProviderAudio> {
        let url = self.run_url(profile.backend_model());

        tracing::debug!("Workers AI TTS request: model={}", profile.backend_model());

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_token.expose_secret())
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Workers AI request failed: {e}");
                TtsError::ConnectionError(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            tracing::error!("Workers AI API error ({status}): {message}");

            return Err(TtsError::ProviderApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read Workers AI response body: {e}");
            TtsError::ConnectionError(e.to_string())
        })?;

        let parsed = serde_json::from_slice::<RunResponse>(&body).map_err(|e| {
            tracing::warn!("Workers AI returned an unexpected body: {e}");
            TtsError::InvalidProviderResponse(e.to_string())
        })?;

        let audio = extract_audio(profile, parsed).inspect_err(|e| {
            tracing::warn!("Workers AI response rejected: {e:?}");
        })?;

        tracing::debug!("Workers AI TTS synthesis complete, mime_type={}", audio.mime_type);

        Ok(audio)
    }

    fn name(&self) -> &str {
        "workers-ai"
    }
}
