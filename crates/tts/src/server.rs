use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use http::HeaderValue;
use secrecy::SecretString;
use voxbridge_config::Config;

use crate::{
    error::TtsError,
    http_client::http_client,
    model::ModelProfile,
    provider::{TtsProvider, workers_ai::WorkersAiProvider},
    types::{AudioEnvelope, ProviderAudio, ResponseFormat, SpeechRequest, SpeechResponse},
};

/// Standard alphabet, padding optional, stray trailing bits tolerated
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Translates `OpenAI`-style speech requests into provider calls
pub struct Server {
    provider: Box<dyn TtsProvider>,
    body_limit: usize,
}

impl Server {
    pub fn new(provider: Box<dyn TtsProvider>, body_limit: usize) -> Self {
        Self { provider, body_limit }
    }

    /// Maximum accepted request body size in bytes
    pub const fn body_limit(&self) -> usize {
        self.body_limit
    }

    /// Synthesize text to speech
    ///
    /// Resolves the model profile, makes exactly one provider call, then
    /// shapes the audio according to the requested response format.
    pub async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let profile = ModelProfile::resolve(request.model.as_deref());
        let payload = profile.payload(&request.input, &request.voice);

        tracing::debug!(
            "{} TTS request: profile={profile:?}, voice={}, input_len={}",
            self.provider.name(),
            request.voice,
            request.input.len(),
        );

        let ProviderAudio { audio, mime_type } = self.provider.run(profile, &payload).await?;

        match request.response_format {
            ResponseFormat::Json => Ok(SpeechResponse::Json(AudioEnvelope { audio, mime_type })),
            ResponseFormat::Binary => {
                let content_type = HeaderValue::from_str(&mime_type).map_err(|_| {
                    tracing::warn!("Workers AI returned an unusable mime type: {mime_type:?}");
                    TtsError::InvalidProviderResponse(format!("mime type {mime_type:?} is not a valid header"))
                })?;

                let bytes = decode_audio(&audio)?;

                tracing::debug!("Speech synthesis complete, {} bytes of {mime_type}", bytes.len());

                Ok(SpeechResponse::Audio { bytes, content_type })
            }
        }
    }
}

/// Decode base64 audio the way a browser `atob` would accept it
fn decode_audio(audio: &str) -> crate::error::Result<Vec<u8>> {
    let compact: String = audio.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    LENIENT_BASE64.decode(compact).map_err(|e| {
        tracing::warn!("Workers AI audio is not valid base64: {e}");
        TtsError::InvalidProviderResponse(format!("audio is not valid base64: {e}"))
    })
}

/// Builder for constructing the TTS server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> anyhow::Result<Server> {
        let backend = &self.config.backend;

        let account_id = backend.account_id.clone().unwrap_or_else(|| {
            tracing::warn!("No Workers AI account id configured, backend calls will fail");
            String::new()
        });

        let api_token = backend.api_token.clone().unwrap_or_else(|| {
            tracing::warn!("No Workers AI API token configured, backend calls will fail");
            SecretString::from(String::new())
        });

        let client = http_client(backend.request_timeout()?)
            .map_err(|e| anyhow::anyhow!("failed to build Workers AI HTTP client: {e}"))?;

        let provider = WorkersAiProvider::new(client, backend.base_url.clone(), account_id, api_token);

        tracing::debug!("TTS server initialized with Workers AI at {}", backend.base_url);

        Ok(Server::new(Box::new(provider), self.config.server.body_limit))
    }
}
