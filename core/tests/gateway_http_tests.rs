//! HTTP gateway tests against a local one-shot server
//!
//! These tests exercise the real reqwest path of `HttpGateway`: success
//! decoding, non-success status mapping, transport failure, and malformed
//! body handling. Each test spins up a minimal one-shot HTTP responder on
//! a loopback port, so no external service is needed.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use wayfare_core::{GatewayError, HttpGateway, ResourceGateway};

/// Serve exactly one request with a fixed response, then close.
async fn serve_once(status_line: &str, body: &str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            // Drain the request head; the path is irrelevant for a
            // one-shot responder.
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    addr
}

#[tokio::test]
async fn test_success_response_decodes_collection() {
    let addr = serve_once(
        "200 OK",
        r#"[{"name":"Bali","image":"images/bali.jpg","rating":4.8}]"#,
    )
    .await;

    let gateway = HttpGateway::new(format!("http://{addr}/api"));
    let destinations = gateway.get_destinations().await.unwrap();

    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0].name, "Bali");
}

#[tokio::test]
async fn test_success_response_decodes_profile_record() {
    let addr = serve_once("200 OK", r#"{"name":"Jane Doe","avatar":"jane.png"}"#).await;

    let gateway = HttpGateway::new(format!("http://{addr}/api"));
    let profile = gateway.get_profile().await.unwrap();

    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(profile.avatar.as_deref(), Some("jane.png"));
}

#[tokio::test]
async fn test_non_success_status_surfaces_as_http_error() {
    let addr = serve_once("500 Internal Server Error", "[]").await;

    let gateway = HttpGateway::new(format!("http://{addr}/api"));
    let err = gateway.get_categories().await.unwrap_err();

    assert!(matches!(err, GatewayError::Http { status: 500 }));
}

#[tokio::test]
async fn test_connection_refused_surfaces_as_network_error() {
    // Bind to learn a free port, then drop the listener so nothing is
    // accepting there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpGateway::new(format!("http://{addr}/api"));
    let err = gateway.get_recommended().await.unwrap_err();

    assert!(matches!(err, GatewayError::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_malformed_body_surfaces_as_network_error() {
    let addr = serve_once("200 OK", "this is not json").await;

    let gateway = HttpGateway::new(format!("http://{addr}/api"));
    let err = gateway.get_destinations().await.unwrap_err();

    assert!(matches!(err, GatewayError::Network(_)));
}
