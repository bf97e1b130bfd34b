#![allow(clippy::must_use_candidate)]

pub mod backend;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use backend::*;
pub use health::*;
pub use server::*;
pub use telemetry::{ExportProtocol, ExporterConfig, LogFormat, TelemetryConfig};

/// Top-level voxbridge configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Inbound HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Workers AI backend configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Logging and trace export configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
