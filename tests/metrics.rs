use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use stream_alerts::{config::Config, http::create_router, metrics};
use tower::ServiceExt;

async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// The recorder is process-wide, so everything runs in a single test
#[tokio::test]
async fn alerts_requests_are_exported() {
    metrics::register_metrics().unwrap();
    assert!(metrics::register_metrics().is_err());

    let router = create_router(&Config::default());

    let (status, _) = send(&router, Method::GET, "/alerts/").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, Method::HEAD, "/alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, exposition) = send(&router, Method::GET, "/metrics").await;
    assert_eq!(status, StatusCode::OK);

    let lines: Vec<&str> = exposition.lines().collect();
    assert!(lines.contains(&"alerts_served_total 7"), "{exposition}");
    assert!(
        lines.contains(&r#"http_requests_total{endpoint="alerts"} 2"#),
        "{exposition}"
    );
    assert!(
        exposition.contains("http_request_duration_seconds"),
        "{exposition}"
    );
    assert!(
        exposition.contains(&format!(
            r#"build_info{{version="{}"}}"#,
            env!("CARGO_PKG_VERSION")
        )),
        "{exposition}"
    );
}
