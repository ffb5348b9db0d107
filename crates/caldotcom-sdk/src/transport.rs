//! Transport seam between the request engine and the wire.
//!
//! The engine talks to a [`Transport`] rather than to reqwest directly so
//! that retry, timeout and classification logic can be exercised against an
//! in-memory implementation. Faults are a closed set: the engine decides
//! retry eligibility from the [`TransportFault`] variant, never from an
//! error's name or message.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use thiserror::Error;

/// Boxed future type used by the [`Transport`] trait.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// HTTP methods supported by the Cal.com v2 API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// HTTP GET (the default).
    #[default]
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
}

impl Method {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully prepared outgoing request.
///
/// Built fresh for every attempt, so a retried call replays an identical
/// request rather than a partially consumed one.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: Method,
    /// The absolute URL including encoded query parameters.
    pub url: String,
    /// Headers in the order they were computed.
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, absent for GET requests.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Returns the first header value with the given name,
    /// case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A raw response as seen on the wire, before classification.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns the first header value with the given name,
    /// case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The closed set of transport-level failures.
///
/// All variants are transient from the engine's point of view and therefore
/// retry-eligible.
#[derive(Debug, Error)]
pub enum TransportFault {
    /// The request did not complete before the deadline.
    #[error("request timed out")]
    Timeout,
    /// The connection could not be established or was dropped.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    /// Host name resolution failed.
    #[error("DNS resolution failed: {0}")]
    Dns(String),
    /// Any other I/O-level failure.
    #[error("transport I/O error: {0}")]
    Io(String),
}

/// Executes prepared requests against the wire.
///
/// The default implementation is [`ReqwestTransport`]; tests substitute an
/// in-memory double.
pub trait Transport: Send + Sync {
    /// Executes a single request attempt.
    ///
    /// Implementations must not retry internally; the engine owns the
    /// retry loop and arms a fresh timeout per attempt.
    fn execute(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<TransportResponse, TransportFault>>;
}

/// [`Transport`] implementation backed by a shared [`reqwest::Client`].
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with connection reuse enabled.
    ///
    /// The per-request deadline is enforced by the engine, so no timeout is
    /// configured on the underlying client.
    pub fn new(connect_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }

    fn map_fault(err: reqwest::Error) -> TransportFault {
        if err.is_timeout() {
            TransportFault::Timeout
        } else if err.is_connect() {
            TransportFault::ConnectionFailed(err.to_string())
        } else {
            TransportFault::Io(err.to_string())
        }
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<TransportResponse, TransportFault>> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(Self::map_fault)?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportFault::Io(format!("failed to read response: {}", e)))?
                .to_vec();

            Ok(TransportResponse {
                status,
                headers,
                body,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::default(), Method::Get);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = TransportResponse {
            status: 429,
            headers: vec![("retry-after".into(), "5".into())],
            body: Vec::new(),
        };
        assert_eq!(response.header("Retry-After"), Some("5"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn success_statuses() {
        let mut response = TransportResponse {
            status: 200,
            headers: Vec::new(),
            body: Vec::new(),
        };
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 304;
        assert!(!response.is_success());
        response.status = 500;
        assert!(!response.is_success());
    }
}
