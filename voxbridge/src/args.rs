use std::path::PathBuf;

use clap::Parser;
use secrecy::SecretString;
use voxbridge_config::Config;

/// voxbridge: OpenAI TTS API in front of Cloudflare Workers AI
#[derive(Debug, Parser)]
#[command(name = "voxbridge", about = "Serve OpenAI-style speech requests from Workers AI TTS models")]
pub struct Args {
    /// Path to a TOML configuration file; built-in defaults apply without one
    #[arg(short, long, env = "VOXBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "VOXBRIDGE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Cloudflare account id
    #[arg(long, env = "ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Workers AI API token
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Log filter in `tracing` directive syntax
    #[arg(long, default_value = "info", env = "VOXBRIDGE_LOG")]
    pub log_filter: String,
}

impl Args {
    /// Apply command-line and environment overrides on top of the file config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.server.listen_address = Some(listen);
        }

        if let Some(account_id) = &self.account_id {
            config.backend.account_id = Some(account_id.clone());
        }

        if let Some(api_token) = &self.api_token {
            config.backend.api_token = Some(SecretString::from(api_token.clone()));
        }
    }
}
