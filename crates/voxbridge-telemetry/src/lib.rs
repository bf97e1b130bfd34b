//! Logging and trace export for voxbridge
//!
//! Log lines always go to stdout through `tracing-subscriber`. When an OTLP
//! exporter is configured, spans are additionally exported through
//! `tracing-opentelemetry`.

use opentelemetry::{KeyValue, global, trace::TracerProvider as _};
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use opentelemetry_semantic_conventions::resource as semconv;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};
use voxbridge_config::{ExportProtocol, ExporterConfig, LogFormat, TelemetryConfig};

/// Keeps the tracer provider alive and flushes it on drop
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to shutdown tracer provider: {e}");
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber
///
/// `log_filter` uses `EnvFilter` directive syntax; an unparsable filter
/// falls back to `info`. The returned guard must be held until shutdown.
///
/// # Errors
///
/// Returns an error if the OTLP exporter cannot be built or a global
/// subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, log_filter: &str) -> anyhow::Result<TelemetryGuard> {
    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = config.map(|c| c.log_format).unwrap_or_default();

    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(log_format)];
    let mut guard = TelemetryGuard { tracer_provider: None };

    if let Some(config) = config
        && let Some(exporter) = &config.exporter
    {
        let provider = init_tracer(config, exporter)?;
        let tracer = provider.tracer("voxbridge");

        global::set_tracer_provider(provider.clone());
        layers.push(tracing_opentelemetry::layer().with_tracer(tracer).boxed());
        guard.tracer_provider = Some(provider);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}

fn fmt_layer(format: LogFormat) -> BoxedLayer {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn init_tracer(config: &TelemetryConfig, exporter: &ExporterConfig) -> anyhow::Result<SdkTracerProvider> {
    let span_exporter = match exporter.protocol {
        ExportProtocol::Grpc => SpanExporter::builder()
            .with_tonic()
            .with_endpoint(exporter.endpoint.as_str())
            .build(),
        ExportProtocol::HttpProto => SpanExporter::builder()
            .with_http()
            .with_endpoint(exporter.endpoint.as_str())
            .build(),
    }
    .map_err(|e| anyhow::anyhow!("failed to build OTLP span exporter for {}: {e}", exporter.endpoint))?;

    Ok(SdkTracerProvider::builder()
        .with_resource(build_resource(config))
        .with_batch_exporter(span_exporter)
        .build())
}

fn build_resource(config: &TelemetryConfig) -> Resource {
    Resource::builder()
        .with_attributes([
            KeyValue::new(semconv::SERVICE_NAME, config.service_name.clone()),
            KeyValue::new(semconv::SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use opentelemetry::{Key, Value};

    use super::*;

    #[test]
    fn resource_carries_service_name() {
        let config = TelemetryConfig {
            service_name: "tts-edge".to_string(),
            ..TelemetryConfig::default()
        };

        let resource = build_resource(&config);

        assert_eq!(
            resource.get(&Key::new(semconv::SERVICE_NAME)),
            Some(Value::from("tts-edge"))
        );
    }
}
