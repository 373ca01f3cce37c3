use axum::http::{Request, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::test_app_state;

#[test]
fn upstream_url_joins_without_double_slashes() {
    assert_eq!(upstream_url("https://api.example.com/v1/", "/drivers", None), "https://api.example.com/v1/drivers");
    assert_eq!(upstream_url("https://api.example.com", "drivers/d1/verify", None), "https://api.example.com/drivers/d1/verify");
}

#[test]
fn upstream_url_keeps_query() {
    assert_eq!(
        upstream_url("http://localhost:5000", "trips/admin/all-trips", Some("status=scheduled&page=2")),
        "http://localhost:5000/trips/admin/all-trips?status=scheduled&page=2"
    );
    assert_eq!(upstream_url("http://localhost:5000", "trips", Some("")), "http://localhost:5000/trips");
}

#[test]
fn proxied_path_keeps_percent_encoding() {
    let uri: Uri = "/api/drivers/a%2Fb%3Fx?page=2".parse().unwrap();
    assert_eq!(proxied_path(&uri), "/drivers/a%2Fb%3Fx");
}

/// One-shot upstream that answers `{"success":true}` and hands back the
/// request line it received.
async fn recording_upstream() -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }
        let body = r#"{"success":true}"#;
        let reply = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
        let text = String::from_utf8_lossy(&received).into_owned();
        text.lines().next().unwrap_or_default().to_owned()
    });
    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn encoded_path_segments_reach_upstream_unchanged() {
    let (upstream, request_line) = recording_upstream().await;
    let app = crate::routes::api_routes(test_app_state(&upstream));
    let response = app
        .oneshot(Request::builder().uri("/api/drivers/a%2Fb%3Fx?page=2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(request_line.await.unwrap(), "GET /drivers/a%2Fb%3Fx?page=2 HTTP/1.1");
}

#[tokio::test]
async fn unreachable_upstream_yields_bad_gateway_envelope() {
    // Port 9 (discard) is closed on test hosts, so the connect is refused.
    let app = crate::routes::api_routes(test_app_state("http://127.0.0.1:9"));
    let response = app
        .oneshot(Request::builder().uri("/api/drivers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = crate::routes::api_routes(test_app_state("http://127.0.0.1:9"));
    let response = app.oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
