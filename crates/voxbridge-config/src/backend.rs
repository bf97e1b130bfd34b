use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Cloudflare REST endpoint that account-scoped Workers AI runs hang off
pub const DEFAULT_WORKERS_AI_URL: &str = "https://api.cloudflare.com/client/v4/accounts";

/// Workers AI backend configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL; requests go to `<base_url>/<account_id>/ai/run/<model>`
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Cloudflare account identifier
    #[serde(default)]
    pub account_id: Option<String>,
    /// Bearer token for the Workers AI REST API
    #[serde(default)]
    pub api_token: Option<SecretString>,
    /// Outbound request timeout, as a duration string (e.g. "120s", "2m")
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            account_id: None,
            api_token: None,
            timeout: default_timeout(),
        }
    }
}

impl BackendConfig {
    /// Parse the configured timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is not a valid duration string
    pub fn request_timeout(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid backend timeout '{}': {e}", self.timeout))
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_WORKERS_AI_URL).expect("default Workers AI URL must be valid")
}

fn default_timeout() -> String {
    "120s".to_string()
}
