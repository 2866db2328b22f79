// Integration tests against a local plain-TCP listener.

use std::time::Duration;

use mcforge_core::{wire, CommandBatch, DeliveryPayload, EndpointConfig};
use mcforge_delivery::{DeliveryClient, DeliveryError};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

fn payload() -> DeliveryPayload {
    DeliveryPayload::new(
        "world",
        "pw",
        CommandBatch::from_commands(["say a", "say b", "say c"]),
    )
}

fn endpoint(port: u16) -> EndpointConfig {
    EndpointConfig {
        address: "127.0.0.1".to_string(),
        port,
        secure: false,
        reject_unauthorized: false,
    }
}

#[tokio::test]
async fn listener_observes_exact_sentinel_terminated_frame() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        // The client half-closes its write side, so read runs to EOF.
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let client = DeliveryClient::new(endpoint(port));
    let receipt = client.send(payload()).await.unwrap();

    let received = server.await.unwrap();
    assert_eq!(received.len(), receipt.bytes_sent);
    assert!(received.ends_with(wire::SENTINEL.as_bytes()));

    let decoded = wire::decode_frame(&received).unwrap();
    assert_eq!(decoded.world, "world");
    assert_eq!(decoded.password.expose(), "pw");
    assert_eq!(decoded.commands, receipt.commands);
}

#[tokio::test]
async fn success_echoes_the_transmitted_batch() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut sink = Vec::new();
        let _ = socket.read_to_end(&mut sink).await;
    });

    let sent = payload();
    let expected = sent.commands.clone();
    let receipt = DeliveryClient::new(endpoint(port)).send(sent).await.unwrap();
    assert_eq!(receipt.commands, expected);
}

#[tokio::test]
async fn unreachable_endpoint_reports_connect_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client =
        DeliveryClient::new(endpoint(port)).with_timeout(Duration::from_secs(2));
    let err = client.send(payload()).await.unwrap_err();

    match err {
        DeliveryError::Connect { address, port: p, .. } => {
            assert_eq!(address, "127.0.0.1");
            assert_eq!(p, port);
        }
        DeliveryError::Timeout { .. } => {}
        other => panic!("expected Connect or Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn sentinel_collision_fails_before_any_connection() {
    // Port with nothing listening: an encode failure must surface, not a
    // connection error, because framing is checked first.
    let client = DeliveryClient::new(endpoint(1));
    let sneaky = DeliveryPayload::new(
        "world",
        "pw",
        CommandBatch::from_text(&format!("say {}", wire::SENTINEL)),
    );

    let err = client.send(sneaky).await.unwrap_err();
    assert!(matches!(err, DeliveryError::Encode(_)));
}
