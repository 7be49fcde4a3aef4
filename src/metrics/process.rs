use metrics::{describe_gauge, gauge};
use std::time::{SystemTime, UNIX_EPOCH};

/// Register the metrics for the application
pub(super) fn register_metrics() {
    describe_gauge!(
        "process_start_time_seconds",
        "Start time of the process in seconds since the Unix epoch"
    );

    describe_gauge!(
        "build_info",
        "Build information of the application, labeled by version"
    );

    record_process_start_time();
    record_build_info();
}

/// Record the process start time in seconds since the Unix epoch
fn record_process_start_time() {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => gauge!("process_start_time_seconds").set(elapsed.as_secs_f64()),
        Err(e) => tracing::warn!("System clock is before the Unix epoch: {}", e),
    }
}

/// Record the build information of the application
fn record_build_info() {
    let version = env!("CARGO_PKG_VERSION");

    gauge!("build_info", "version" => version).set(1.0);
}
