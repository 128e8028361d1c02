//! Observability: logging and metrics.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured log level applies.
pub fn init(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logging {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    Ok(())
}

/// Install the Prometheus recorder and register metric descriptions.
///
/// The returned handle renders the exposition text for the `/metrics`
/// endpoint.
pub fn install_metrics_recorder() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    metrics::register_metrics();
    Ok(handle)
}

/// Metrics registry and helpers.
pub mod metrics {
    use metrics::{counter, describe_counter, describe_histogram, histogram};

    /// Register all metric descriptions.
    pub fn register_metrics() {
        describe_counter!(
            "vantage_fetch_total",
            "Total info-endpoint fetches attempted"
        );
        describe_counter!(
            "vantage_fetch_failed",
            "Total info-endpoint fetches that failed, by kind"
        );
        describe_histogram!(
            "vantage_fetch_duration_seconds",
            "Latency of successful info-endpoint fetches in seconds"
        );
    }

    /// Record a successful cell fetch.
    pub fn record_fetch_success(duration_secs: f64) {
        counter!("vantage_fetch_total").increment(1);
        histogram!("vantage_fetch_duration_seconds").record(duration_secs);
    }

    /// Record a failed cell fetch.
    pub fn record_fetch_failed(kind: &'static str) {
        counter!("vantage_fetch_total").increment(1);
        counter!("vantage_fetch_failed", "kind" => kind).increment(1);
    }
}
