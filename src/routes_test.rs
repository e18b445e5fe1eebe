use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::*;

/// Serve `router` on an ephemeral port and return the raw response to `GET path`.
async fn get_raw(router: Router, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    server.abort();
    response
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    let response = get_raw(base_routes(), "/healthz").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
}

#[tokio::test]
async fn unknown_path_is_not_found_without_leptos() {
    let response = get_raw(base_routes(), "/nope").await;
    assert!(response.starts_with("HTTP/1.1 404"), "unexpected response: {response}");
}
