use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::HeaderValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TtsError;

/// Speech request body as sent by `OpenAI` TTS clients
///
/// Every field is optional at this stage so that missing fields surface as
/// [`TtsError::MissingFields`] rather than as a parse failure. `response_format`
/// and `speed` accept any JSON value; a non-string format means binary.
#[derive(Debug, Default, Deserialize)]
pub struct SpeechRequestBody {
    pub model: Option<String>,
    pub input: Option<String>,
    pub voice: Option<String>,
    pub response_format: Option<Value>,
    pub speed: Option<Value>,
}

/// Validated speech request
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Text to synthesize, never empty
    pub input: String,
    /// Voice name, never empty
    pub voice: String,
    /// Caller-facing model key (e.g. "aura-1"), resolved later
    pub model: Option<String>,
    pub response_format: ResponseFormat,
    /// Accepted for client compatibility; Workers AI TTS models take no speed
    pub speed: Option<f64>,
}

impl TryFrom<SpeechRequestBody> for SpeechRequest {
    type Error = TtsError;

    fn try_from(body: SpeechRequestBody) -> Result<Self, Self::Error> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        let (Some(input), Some(voice)) = (non_empty(body.input), non_empty(body.voice)) else {
            return Err(TtsError::MissingFields);
        };

        Ok(Self {
            input,
            voice,
            model: body.model,
            response_format: ResponseFormat::from_requested(body.response_format.as_ref().and_then(Value::as_str)),
            speed: body.speed.as_ref().and_then(Value::as_f64),
        })
    }
}

/// How audio is returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Decoded audio bytes with the audio mime type as `Content-Type`
    #[default]
    Binary,
    /// `{"audio": <base64>, "mime_type": ...}`
    Json,
}

impl ResponseFormat {
    /// Only the exact string `json` selects the JSON envelope
    pub fn from_requested(requested: Option<&str>) -> Self {
        match requested {
            Some("json") => Self::Json,
            _ => Self::Binary,
        }
    }
}

/// Audio extracted from a Workers AI response, still base64-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAudio {
    pub audio: String,
    pub mime_type: String,
}

/// JSON envelope returned for `response_format: "json"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioEnvelope {
    pub audio: String,
    pub mime_type: String,
}

/// Successful speech response
#[derive(Debug)]
pub enum SpeechResponse {
    Json(AudioEnvelope),
    Audio { bytes: Vec<u8>, content_type: HeaderValue },
}

impl IntoResponse for SpeechResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Json(envelope) => Json(envelope).into_response(),
            Self::Audio { bytes, content_type } => {
                ([(http::header::CONTENT_TYPE, content_type)], bytes).into_response()
            }
        }
    }
}
