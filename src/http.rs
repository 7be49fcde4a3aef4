use crate::{
    alerts::{self, record::AlertRecord},
    config::Config,
};
use axum::{Json, Router, http::Method, response::IntoResponse, routing::get};
use axum_server::Handle;
use hyper::StatusCode;
use std::net::SocketAddr;

/// Creates an Axum Web Server
pub async fn create_server(config: Config) -> anyhow::Result<()> {
    serve(config, Handle::new()).await
}

/// Serve the application until the handle is shut down
pub async fn serve(config: Config, handle: Handle) -> anyhow::Result<()> {
    tracing::info!("Starting the web server");

    let app = create_router(&config);
    let addr = config.http.socket_addr()?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Serving alerts on {}/", config.alerts.prefix);

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}

/// Create the router for the application
pub fn create_router(config: &Config) -> Router {
    let router = Router::new()
        .route("/alive", get(alive))
        .route("/metrics", get(metrics));

    // Answer with and without the trailing slash
    match config.alerts.prefix.as_str() {
        "" => router.route("/", get(list_alerts)),
        prefix => router
            .route(prefix, get(list_alerts))
            .route(&format!("{prefix}/"), get(list_alerts)),
    }
}

/// This is the handler for the /alive path
async fn alive() -> StatusCode {
    crate::metrics::http::record_http_request("/alive");
    let _timer = crate::metrics::http::http_request_timer("/alive");

    StatusCode::OK
}

/// This is the handler for the /metrics path
#[tracing::instrument]
async fn metrics() -> impl IntoResponse {
    crate::metrics::http::record_http_request("/metrics");
    let _timer = crate::metrics::http::http_request_timer("/metrics");

    match crate::metrics::handle() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to get the metrics handle".to_string(),
        ),
    }
}

/// This is the handler for the alerts listing
#[tracing::instrument]
async fn list_alerts(method: Method) -> Json<Vec<AlertRecord>> {
    crate::metrics::http::record_http_request("alerts");
    let _timer = crate::metrics::http::http_request_timer("alerts");

    let alerts = alerts::list();
    tracing::debug!("Returning {} alerts", alerts.len());

    // HEAD responses carry no body
    if method == Method::GET {
        crate::metrics::record_alerts_served(alerts.len());
    }

    Json(alerts)
}
