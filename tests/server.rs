use axum_server::Handle;
use pretty_assertions::assert_eq;
use std::{net::SocketAddr, time::Duration};
use stream_alerts::{
    alerts::{
        self,
        record::{AlertMessage, AlertRecord},
    },
    config::Config,
    http,
};

/// Start the server on an ephemeral port and return its address
async fn start(mut config: Config) -> (SocketAddr, Handle) {
    config.http.host = "127.0.0.1".to_string();
    config.http.port = 0;

    let handle = Handle::new();
    tokio::spawn(http::serve(config, handle.clone()));

    let addr = tokio::time::timeout(Duration::from_secs(5), handle.listening())
        .await
        .expect("server did not start in time")
        .expect("server failed to bind");

    (addr, handle)
}

#[tokio::test]
async fn serves_alerts_over_http() {
    let (addr, handle) = start(Config::default()).await;

    let response = reqwest::get(format!("http://{addr}/alerts/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Vec<AlertRecord> = response.json().await.unwrap();
    assert_eq!(body, alerts::list());
    assert_eq!(
        body.first(),
        Some(&AlertRecord::new(1, AlertMessage::LowConfidenceDefect))
    );
    assert_eq!(
        body.last(),
        Some(&AlertRecord::new(7, AlertMessage::LowConfidenceDefect))
    );

    handle.shutdown();
}

#[tokio::test]
async fn consecutive_requests_return_identical_bodies() {
    let (addr, handle) = start(Config::default()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/alerts");

    let first = client.get(&url).send().await.unwrap().text().await.unwrap();
    let second = client
        .get(format!("{url}/?page=2"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(first, second);

    handle.shutdown();
}

#[tokio::test]
async fn liveness_probe_answers() {
    let (addr, handle) = start(Config::default()).await;

    let response = reqwest::get(format!("http://{addr}/alive")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    handle.shutdown();
}
