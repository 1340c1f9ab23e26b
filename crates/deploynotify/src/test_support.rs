//! One-shot HTTP responder for delivery tests.

use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub(crate) struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Accept a single connection, record the request and answer with `status`.
pub(crate) async fn respond_once(status: u16) -> (Url, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = Url::parse(&format!("http://{addr}/")).unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let captured = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            if let Some(req) = parse_complete(&buf) {
                break req;
            }
            assert!(n > 0, "connection closed before request completed");
        };

        let reply = format!(
            "HTTP/1.1 {status} Test\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
        );
        stream.write_all(reply.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        captured
    });

    (url, handle)
}

/// URL of a local port nothing is listening on.
pub(crate) async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/")).unwrap()
}

fn parse_complete(buf: &[u8]) -> Option<CapturedRequest> {
    let text = String::from_utf8_lossy(buf);
    let split = text.find("\r\n\r\n")?;
    let head = text[..split].to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let body = &text[split + 4..];
    if body.len() < content_length {
        return None;
    }
    Some(CapturedRequest {
        head,
        body: body[..content_length].to_string(),
    })
}
