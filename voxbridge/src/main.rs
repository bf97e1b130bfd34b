#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use voxbridge_config::Config;
use voxbridge_server::Server;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    args.apply_to(&mut config);
    config.validate()?;

    let _telemetry_guard = voxbridge_telemetry::init(config.telemetry.as_ref(), &args.log_filter)?;

    match &args.config {
        Some(path) => tracing::info!(config_path = %path.display(), "starting voxbridge"),
        None => tracing::info!("starting voxbridge with built-in defaults"),
    }

    let server = Server::new(&config)?;

    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        trigger.cancel();
    });

    server.serve(shutdown).await?;

    tracing::info!("voxbridge stopped");
    Ok(())
}

/// Resolve once `SIGINT` or `SIGTERM` arrives
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
