use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use super::TtsProvider;
use crate::{
    error::{Result, TtsError},
    model::{BackendPayload, ModelProfile},
    types::ProviderAudio,
};

/// What the fake answers with
#[derive(Clone)]
pub enum Outcome {
    Audio { audio: &'static str, mime_type: &'static str },
    Unreachable,
    Status(u16, &'static str),
    Invalid,
}

#[derive(Default)]
pub struct Calls {
    count: AtomicUsize,
    last: Mutex<Option<(ModelProfile, serde_json::Value)>>,
}

impl Calls {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<(ModelProfile, serde_json::Value)> {
        self.last.lock().unwrap().clone()
    }
}

/// In-memory provider that records what it was asked to run
pub struct FakeProvider {
    outcome: Outcome,
    calls: Arc<Calls>,
}

impl FakeProvider {
    pub fn new(outcome: Outcome) -> (Self, Arc<Calls>) {
        let calls = Arc::new(Calls::default());
        let provider = Self {
            outcome,
            calls: Arc::clone(&calls),
        };
        (provider, calls)
    }
}

#[async_trait]
impl TtsProvider for FakeProvider {
    async fn run(&self, profile: ModelProfile, payload: &BackendPayload<'_>) -> Result<ProviderAudio> {
        self.calls.count.fetch_add(1, Ordering::SeqCst);
        *self.calls.last.lock().unwrap() = Some((profile, serde_json::to_value(payload).unwrap()));

        match self.outcome.clone() {
            Outcome::Audio { audio, mime_type } => Ok(ProviderAudio {
                audio: audio.to_string(),
                mime_type: mime_type.to_string(),
            }),
            Outcome::Unreachable => Err(TtsError::ConnectionError("connection refused".to_string())),
            Outcome::Status(status, message) => Err(TtsError::ProviderApiError {
                status,
                message: message.to_string(),
            }),
            Outcome::Invalid => Err(TtsError::InvalidProviderResponse("no audio".to_string())),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}
