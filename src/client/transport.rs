/// The network seam: a request goes in, status and body text come out.
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::errors::ClientError;

/// HTTP methods the pipeline can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Upper-case method name, as it appears on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully built request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body. Always `None` for GET.
    pub body: Option<Value>,
}

/// Whatever the server answered, before any status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in `200..=299`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns the raw response.
///
/// Any HTTP response, including 4xx/5xx, is `Ok`. Only failures that never
/// produce a complete response are `Err`.
pub trait Transport {
    /// Send `request` and wait for the full response body.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` when no complete response was
    /// received. The status is kept on the error if it had already arrived.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Blocking `reqwest` client with its default timeout and redirect policy.
#[derive(Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let transport_err = |status| {
            move |source| ClientError::Transport {
                url: request.url.clone(),
                status,
                source,
            }
        };

        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => {
                let builder = self
                    .client
                    .post(&request.url)
                    .header(CONTENT_TYPE, "application/json");
                match &request.body {
                    Some(body) => builder.json(body),
                    None => builder,
                }
            }
        };

        let response = builder.send().map_err(transport_err(None))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_err(Some(status)))?;
        Ok(HttpResponse { status, body })
    }
}
