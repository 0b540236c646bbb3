// ═══════════════════════════════════════════════════════════════════
// Transport Tests — ReqwestTransport against a loopback HTTP server
// ═══════════════════════════════════════════════════════════════════

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use nexus_core::auth::MemoryCredentialStore;
use nexus_core::config::ApiConfig;
use nexus_core::errors::CoreError;
use nexus_core::http::{ApiRequest, HttpTransport, ReqwestTransport};
use nexus_core::models::source::NewSource;
use nexus_core::NexusClient;

// ═══════════════════════════════════════════════════════════════════
// One-shot server
// ═══════════════════════════════════════════════════════════════════

/// Serves exactly one HTTP/1.1 exchange. Returns the base URL and a handle
/// resolving to the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/api", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (base, handle)
}

/// Read head and body (per `content-length`) of one request.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8(buf).unwrap()
}

fn request_line(raw: &str) -> &str {
    raw.lines().next().unwrap_or_default()
}

fn request_body(raw: &str) -> &str {
    raw.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or_default()
}

/// A loopback address nothing listens on.
async fn closed_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

// ═══════════════════════════════════════════════════════════════════
// Request shaping on the wire
// ═══════════════════════════════════════════════════════════════════

mod on_the_wire {
    use super::*;

    #[tokio::test]
    async fn search_query_and_auth_headers_are_sent() {
        let (base, server) = serve_once("200 OK", r#"{"items":[],"total":0}"#).await;
        let nexus = NexusClient::new(
            ApiConfig::new(&base).with_api_key("k"),
            Arc::new(MemoryCredentialStore::with_token("t")),
        )
        .unwrap();

        let page = nexus.news().search_news("a&b c/é", 10, 0).await.unwrap();
        assert!(page.is_empty());

        let raw = server.await.unwrap();
        assert_eq!(
            request_line(&raw),
            "GET /api/news/search?query=a%26b+c%2F%C3%A9&limit=10&offset=0 HTTP/1.1"
        );
        let head = raw.to_lowercase();
        assert!(head.contains("\r\nx-api-key: k\r\n"));
        assert!(head.contains("\r\nauthorization: bearer t\r\n"));
        assert!(head.contains("\r\naccept: application/json\r\n"));
        assert!(head.contains("\r\ncontent-type: application/json\r\n"));
    }

    #[tokio::test]
    async fn json_body_is_sent() {
        let (base, server) = serve_once(
            "201 Created",
            r#"{"id":5,"codename":"wsj","name":"WSJ","website":"https://wsj.com"}"#,
        )
        .await;
        let nexus =
            NexusClient::new(ApiConfig::new(&base), Arc::new(MemoryCredentialStore::new())).unwrap();

        let created = nexus
            .sources()
            .create_source(&NewSource::new("wsj", "WSJ", "https://wsj.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 5);

        let raw = server.await.unwrap();
        assert_eq!(request_line(&raw), "POST /api/sources HTTP/1.1");
        assert!(!raw.to_lowercase().contains("\r\nauthorization:"));
        let body: serde_json::Value = serde_json::from_str(request_body(&raw)).unwrap();
        assert_eq!(
            body,
            json!({"codename": "wsj", "name": "WSJ", "website": "https://wsj.com"})
        );
    }

    #[tokio::test]
    async fn encoded_path_segment_is_sent_verbatim() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"id":4,"codename":"ft ny","name":"FT","website":"https://ft.com"}"#,
        )
        .await;
        let nexus =
            NexusClient::new(ApiConfig::new(&base), Arc::new(MemoryCredentialStore::new())).unwrap();

        nexus.sources().get_source_by_codename("ft ny").await.unwrap();

        let raw = server.await.unwrap();
        assert_eq!(request_line(&raw), "GET /api/sources/codename/ft%20ny HTTP/1.1");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Responses and failures
// ═══════════════════════════════════════════════════════════════════

mod responses {
    use super::*;

    #[tokio::test]
    async fn non_success_status_is_a_response_not_an_error() {
        let (base, server) = serve_once("404 Not Found", r#"{"detail":"News not found"}"#).await;

        let response = ReqwestTransport::new()
            .send(ApiRequest::new(Method::GET, format!("{base}/news/missing")))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, r#"{"detail":"News not found"}"#);
        assert_eq!(request_line(&server.await.unwrap()), "GET /api/news/missing HTTP/1.1");
    }

    #[tokio::test]
    async fn client_turns_404_into_not_found() {
        let (base, server) = serve_once("404 Not Found", r#"{"detail":"News not found"}"#).await;
        let nexus =
            NexusClient::new(ApiConfig::new(&base), Arc::new(MemoryCredentialStore::new())).unwrap();

        let err = nexus.news().get_news_by_id("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: News not found");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_port_is_a_network_error() {
        let base = closed_base().await;

        let err = ReqwestTransport::new()
            .send(ApiRequest::new(Method::GET, format!("{base}/news")))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Network(ref msg) if msg.starts_with("Could not connect")));
    }

    #[tokio::test]
    async fn dot_segment_fails_before_connecting() {
        let base = closed_base().await;
        let nexus =
            NexusClient::new(ApiConfig::new(&base), Arc::new(MemoryCredentialStore::new())).unwrap();

        let err = nexus.sources().get_source_by_codename("..").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn silent_server_hits_the_deadline() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/api", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let nexus = NexusClient::new(
            ApiConfig::new(&base).with_timeout(Duration::from_millis(200)),
            Arc::new(MemoryCredentialStore::new()),
        )
        .unwrap();

        let err = nexus.news().get_latest_news(5).await.unwrap_err();
        assert!(matches!(err, CoreError::Timeout { after, .. } if after == Duration::from_millis(200)));
    }
}
