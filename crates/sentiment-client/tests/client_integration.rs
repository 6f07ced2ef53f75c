//! Tests for the sentiment client against a live server on an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use sentiment_client::{ClientError, SentimentClient};
use sentiment_core::{analyze, Intensity};
use sentiment_server::config::ServerConfig;
use sentiment_server::server;

/// Spawns the server on `127.0.0.1:0` and returns its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        server::serve(listener, &ServerConfig::default())
            .await
            .expect("serve");
    });
    format!("http://{}", addr)
}

/// Returns an address nothing is listening on.
async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    listener.local_addr().expect("local addr")
}

#[tokio::test]
async fn health_reports_ok() {
    let client = SentimentClient::new(spawn_server().await).expect("client");
    assert!(client.health().await.expect("health"));
}

#[tokio::test]
async fn analyze_matches_local_heuristic() {
    let client = SentimentClient::new(spawn_server().await).expect("client");

    for text in ["great!", "fine", "", "what?! no way"] {
        let remote = client.analyze(text).await.expect("analyze");
        assert_eq!(remote, analyze(text), "text: {text}");
    }
}

#[tokio::test]
async fn try_analyze_returns_analysis() {
    let client = SentimentClient::new(spawn_server().await).expect("client");
    let analysis = client.try_analyze("hello!").await.expect("analysis");
    assert_eq!(analysis.intensity, Intensity::EMPHATIC);
}

#[tokio::test]
async fn unreachable_service_is_request_error() {
    let addr = closed_addr().await;
    let client =
        SentimentClient::with_timeout(format!("http://{}", addr), Duration::from_secs(1))
            .expect("client");

    let err = client.analyze("hi").await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
}

#[tokio::test]
async fn try_analyze_swallows_failure() {
    let addr = closed_addr().await;
    let client =
        SentimentClient::with_timeout(format!("http://{}", addr), Duration::from_secs(1))
            .expect("client");

    assert!(client.try_analyze("hi").await.is_none());
}

#[tokio::test]
async fn unknown_route_is_status_error() {
    let base = spawn_server().await;
    let client = SentimentClient::new(format!("{}/v2", base)).expect("client");

    let err = client.analyze("hi").await.unwrap_err();
    match err {
        ClientError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
}
