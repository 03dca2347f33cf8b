/// Request pipeline: build, send, check status, decode.
use std::io::{self, Write};

use serde_json::Value;

use super::errors::ClientError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Public demo API used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix every endpoint is appended to, verbatim.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join base URL and endpoint. No escaping, no slash normalization.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

/// One request, one response, one decoded JSON value.
pub struct RequestPipeline<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> RequestPipeline<T> {
    #[must_use]
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Build the request without touching the network.
    ///
    /// `raw_data` is ignored for GET. For POST it must be present, non-empty
    /// and parse as JSON.
    ///
    /// # Errors
    ///
    /// `MissingPayload` or `InvalidPayload` for a bad POST body.
    pub fn build(
        &self,
        method: Method,
        endpoint: &str,
        raw_data: Option<&str>,
    ) -> Result<HttpRequest, ClientError> {
        let body = match method {
            Method::Get => None,
            Method::Post => {
                let raw = raw_data
                    .filter(|raw| !raw.is_empty())
                    .ok_or(ClientError::MissingPayload)?;
                Some(serde_json::from_str(raw).map_err(ClientError::InvalidPayload)?)
            }
        };
        Ok(HttpRequest {
            method,
            url: self.config.url_for(endpoint),
            body,
        })
    }

    /// Issue the request and return the decoded response body, reporting
    /// the status on stderr.
    ///
    /// # Errors
    ///
    /// See [`RequestPipeline::execute_with`].
    pub fn execute(
        &self,
        method: Method,
        endpoint: &str,
        raw_data: Option<&str>,
    ) -> Result<Value, ClientError> {
        let stderr = io::stderr();
        self.execute_with(&mut stderr.lock(), method, endpoint, raw_data)
    }

    /// Issue the request and return the decoded response body.
    ///
    /// `HTTP Status Code: <n>` is written to `diag` as soon as a status is
    /// known, whether or not it indicates success, and even when the body
    /// cannot be read afterwards.
    ///
    /// # Errors
    ///
    /// - `MissingPayload` / `InvalidPayload` before any network I/O.
    /// - `Transport` when no complete response arrives.
    /// - `HttpError` on a non-2xx status.
    /// - `MalformedResponse` when a 2xx body is not JSON.
    pub fn execute_with<W: Write>(
        &self,
        diag: &mut W,
        method: Method,
        endpoint: &str,
        raw_data: Option<&str>,
    ) -> Result<Value, ClientError> {
        let request = self.build(method, endpoint, raw_data)?;
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let response = match self.transport.send(&request) {
            Ok(response) => response,
            Err(err) => {
                if let Some(status) = err.status() {
                    report_status(diag, status);
                }
                return Err(err);
            }
        };
        report_status(diag, response.status);
        tracing::debug!(status = response.status, bytes = response.body.len(), "response received");

        decode(response)
    }
}

fn report_status<W: Write>(diag: &mut W, status: u16) {
    let _ = writeln!(diag, "HTTP Status Code: {status}");
}

/// Status check, then JSON decode.
fn decode(response: HttpResponse) -> Result<Value, ClientError> {
    if !response.is_success() {
        return Err(ClientError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(ClientError::MalformedResponse)
}
