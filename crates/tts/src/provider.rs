pub mod workers_ai;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::{
    model::{BackendPayload, ModelProfile},
    types::ProviderAudio,
};

/// Backend that turns a model payload into base64 audio
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Run one synthesis call; implementations must not retry
    async fn run(&self, profile: ModelProfile, payload: &BackendPayload<'_>) -> crate::error::Result<ProviderAudio>;

    /// Get the provider name
    fn name(&self) -> &str;
}
