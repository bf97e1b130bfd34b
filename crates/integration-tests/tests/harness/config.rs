//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use voxbridge_config::{BackendConfig, Config, ServerConfig};

pub const ACCOUNT_ID: &str = "test-account";
pub const API_TOKEN: &str = "test-token";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Loopback listener with test credentials
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                backend: BackendConfig {
                    account_id: Some(ACCOUNT_ID.to_owned()),
                    api_token: Some(SecretString::from(API_TOKEN)),
                    timeout: "5s".to_owned(),
                    ..BackendConfig::default()
                },
                telemetry: None,
            },
        }
    }

    /// Point the backend at a mock Workers AI
    pub fn with_backend(mut self, base_url: &str) -> Self {
        self.config.backend.base_url = base_url.parse().expect("valid URL");
        self
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.config.server.body_limit = limit;
        self
    }

    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
