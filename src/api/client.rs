//! HTTP client for the registration endpoint
//!
//! Sends the form as a JSON body in a single POST. No retries and no
//! request timeout are applied.

use super::traits::RegistrationClientTrait;
use crate::state::FormData;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Default registration endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/submitForm";

/// Body returned by the endpoint on success
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Reasons a submission can fail. All of them surface to the user as a
/// single generic failure.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for posting registrations
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: Client,
    endpoint: String,
}

impl RegistrationClient {
    /// Create a client targeting `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http(Client::new(), endpoint)
    }

    /// Create a client reusing a configured `reqwest::Client`
    pub fn with_http(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationClientTrait for RegistrationClient {
    async fn submit_form(&self, form: &FormData) -> Result<SubmitResponse, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }

        response
            .json::<SubmitResponse>()
            .await
            .map_err(SubmitError::Decode)
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Minimal loopback HTTP server answering a single request

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// A request as seen by the server
    #[derive(Debug)]
    pub struct CapturedRequest {
        pub head: String,
        pub body: String,
    }

    impl CapturedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.head.lines().skip(1).find_map(|line| {
                let (key, value) = line.split_once(':')?;
                key.trim()
                    .eq_ignore_ascii_case(name)
                    .then(|| value.trim())
            })
        }

        pub fn request_line(&self) -> &str {
            self.head.lines().next().unwrap_or_default()
        }
    }

    /// Client that talks to the loopback server directly, ignoring proxy settings
    pub fn direct_client(endpoint: impl Into<String>) -> super::RegistrationClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        super::RegistrationClient::with_http(http, endpoint)
    }

    /// Serve one response; returns the endpoint URL and the captured request
    pub async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let (head_end, content_length) = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                    let length = head
                        .lines()
                        .filter_map(|line| line.split_once(':'))
                        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
                        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    break (pos + 4, length);
                }
            };

            while buf.len() < head_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let captured = CapturedRequest {
                head: String::from_utf8_lossy(&buf[..head_end - 4]).to_string(),
                body: String::from_utf8_lossy(&buf[head_end..]).to_string(),
            };

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(captured);
        });

        (format!("http://{addr}/submitForm"), rx)
    }
}
