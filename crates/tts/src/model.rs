use serde::Serialize;
use strum::EnumString;

/// Model key assumed when the request does not name one
pub const DEFAULT_MODEL: &str = "aura-2";

/// Mime type reported when Workers AI does not state one
pub const DEFAULT_MIME_TYPE: &str = "audio/mpeg";

/// Workers AI model a caller-facing model key maps onto
///
/// Keys are matched case-insensitively. Unknown keys resolve to the default
/// profile through [`ModelProfile::resolve`], never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ModelProfile {
    /// Deepgram Aura 1
    #[strum(serialize = "aura-1")]
    Aura1,
    /// Deepgram Aura 2 (English)
    #[default]
    #[strum(serialize = "aura-2", serialize = "aura-2-en")]
    Aura2,
    /// `MyShell` `MeloTTS`
    #[strum(serialize = "melo", serialize = "melotts")]
    MeloTts,
}

/// Request body sent to `/ai/run/<model>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BackendPayload<'a> {
    /// Aura models: text plus a speaker name
    Speaker { text: &'a str, speaker: &'a str },
    /// `MeloTTS`: a prompt in a fixed language; the voice is not used
    Prompt { prompt: &'a str, lang: &'static str },
}

enum PayloadShape {
    Speaker { default_speaker: &'static str },
    Prompt { lang: &'static str },
}

enum MimeRule {
    /// Use `result.mime_type`, or the default when absent or empty
    Reported,
    /// Ignore whatever the backend reports
    Fixed(&'static str),
}

struct ProfileEntry {
    backend_model: &'static str,
    payload: PayloadShape,
    mime: MimeRule,
}

impl ModelProfile {
    const fn entry(self) -> ProfileEntry {
        match self {
            Self::Aura1 => ProfileEntry {
                backend_model: "@cf/deepgram/aura-1",
                payload: PayloadShape::Speaker { default_speaker: "angus" },
                mime: MimeRule::Reported,
            },
            Self::Aura2 => ProfileEntry {
                backend_model: "@cf/deepgram/aura-2-en",
                payload: PayloadShape::Speaker { default_speaker: "luna" },
                mime: MimeRule::Reported,
            },
            Self::MeloTts => ProfileEntry {
                backend_model: "@cf/myshell-ai/melotts",
                payload: PayloadShape::Prompt { lang: "en" },
                mime: MimeRule::Fixed(DEFAULT_MIME_TYPE),
            },
        }
    }

    /// Select the profile for a request's `model` field
    pub fn resolve(model: Option<&str>) -> Self {
        let key = model.filter(|key| !key.is_empty()).unwrap_or(DEFAULT_MODEL);

        key.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown TTS model '{key}', using {DEFAULT_MODEL}");
            Self::default()
        })
    }

    /// Workers AI model identifier, e.g. `@cf/deepgram/aura-1`
    pub const fn backend_model(self) -> &'static str {
        self.entry().backend_model
    }

    /// Build the Workers AI request body
    ///
    /// An empty `voice` falls back to the profile's default speaker.
    pub fn payload<'a>(self, input: &'a str, voice: &'a str) -> BackendPayload<'a> {
        match self.entry().payload {
            PayloadShape::Speaker { default_speaker } => BackendPayload::Speaker {
                text: input,
                speaker: if voice.is_empty() { default_speaker } else { voice },
            },
            PayloadShape::Prompt { lang } => BackendPayload::Prompt { prompt: input, lang },
        }
    }

    /// Mime type to report for the audio, given what Workers AI returned
    pub fn mime_type<'a>(self, reported: Option<&'a str>) -> &'a str {
        match self.entry().mime {
            MimeRule::Reported => reported.filter(|mime| !mime.is_empty()).unwrap_or(DEFAULT_MIME_TYPE),
            MimeRule::Fixed(mime) => mime,
        }
    }
}
