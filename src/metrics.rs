use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub mod http;
pub mod process;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Register the metrics for the application
pub fn register_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Metrics recorder already installed"))?;

    describe_counter!(
        "alerts_served_total",
        "Total number of alert records returned to clients"
    );

    http::register_metrics();
    process::register_metrics();

    Ok(())
}

/// The installed Prometheus handle, if `register_metrics` has run
pub fn handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Record the number of alert records returned in a response
pub fn record_alerts_served(count: usize) {
    counter!("alerts_served_total").increment(count as u64);
}
