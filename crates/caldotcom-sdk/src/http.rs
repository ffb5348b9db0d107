//! The request engine shared by every resource.
//!
//! [`HttpClient`] turns a [`RequestSpec`] plus the instance's
//! [`AuthConfig`]/[`ClientOptions`] into exactly one logical outcome: a
//! decoded response body, or a classified [`CalError`]. It enforces a
//! per-attempt timeout and a bounded exponential-backoff retry loop.
//!
//! Retries are invisible to the caller except as latency. Only transient
//! outcomes (transport faults, upstream 5xx) are retried; every attempt
//! rebuilds the request from the same spec, so a replay is byte-identical.
//! There is no idempotency-key mechanism: callers retrying non-GET
//! operations must know the upstream operation is safe to repeat.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::auth::AuthConfig;
use crate::config::ClientOptions;
use crate::error::{CalError, CalResult};
use crate::transport::{Method, ReqwestTransport, Transport, TransportRequest, TransportResponse};

/// Ordered query parameters.
///
/// Insertion order is preserved on the wire; values are percent-encoded
/// when the URL is built. Absent optional values are omitted entirely.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Appends a parameter when the value is present.
    pub fn push_opt(&mut self, key: impl Into<String>, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Returns true when no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the parameters in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Description of a single outbound call.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Query,
    body: Option<Value>,
    headers: Vec<(String, String)>,
}

impl RequestSpec {
    /// Creates a spec for the given method and relative path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Creates a GET spec.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Creates a POST spec.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Creates a PUT spec.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Creates a PATCH spec.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// Creates a DELETE spec.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Sets the query parameters.
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Sets the JSON body. Serialized on the wire only for non-GET methods.
    ///
    /// # Errors
    ///
    /// Returns [`CalError::Config`] when the value cannot be represented as
    /// JSON.
    pub fn body<B: Serialize>(mut self, body: &B) -> CalResult<Self> {
        self.body = Some(
            serde_json::to_value(body)
                .map_err(|e| CalError::Config(format!("unserializable request body: {}", e)))?,
        );
        Ok(self)
    }

    /// Adds a header override. Overrides win over computed headers.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Error envelope returned by the API on failure:
/// `{ "status": "error", "error": { "message", "code"?, "details"? } }`.
#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
    details: Option<Value>,
}

/// The request engine.
///
/// Holds no mutable cross-call state; any number of calls may be in flight
/// concurrently from the same instance.
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    auth: AuthConfig,
    base_url: String,
    api_version: String,
    timeout: Duration,
    max_retries: u32,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("auth", &self.auth.kind())
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates an engine backed by a real HTTP transport.
    pub fn new(options: ClientOptions) -> Self {
        let connect_timeout = options.timeout.min(Duration::from_secs(10));
        Self::with_transport(options, Arc::new(ReqwestTransport::new(connect_timeout)))
    }

    /// Creates an engine with a caller-supplied transport.
    pub fn with_transport(options: ClientOptions, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            auth: options.auth,
            base_url: options.base_url,
            api_version: options.api_version,
            timeout: options.timeout,
            max_retries: options.max_retries,
        }
    }

    /// Read-only access to the active credentials.
    ///
    /// Lets callers branch on the auth variant (platform resources need
    /// the OAuth client id for their path segments) without duplicating
    /// credential storage.
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Executes a request and decodes the JSON response.
    ///
    /// The response shape is not validated beyond JSON decoding; an empty
    /// 2xx body decodes as JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`CalError`] for the final attempt.
    pub async fn request<T: DeserializeOwned>(&self, spec: RequestSpec) -> CalResult<T> {
        let url = self.build_url(&spec.path, &spec.query)?;
        let headers = self.build_headers(&spec.headers);
        // GET requests never carry a body.
        let body = match (spec.method, &spec.body) {
            (Method::Get, _) | (_, None) => None,
            (_, Some(value)) => Some(serde_json::to_vec(value).map_err(|e| {
                CalError::Config(format!("unserializable request body: {}", e))
            })?),
        };

        let mut attempt: u32 = 0;
        loop {
            match self
                .execute_once(spec.method, &url, &headers, body.clone())
                .await
            {
                Ok(response) => return decode_body(&response.body),
                Err(err) if attempt < self.max_retries && err.is_retryable() => {
                    let delay = Duration::from_millis(1000u64.saturating_mul(
                        2u64.saturating_pow(attempt),
                    ));
                    debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying {} {}",
                        spec.method,
                        spec.path
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    warn!(error = %err, "{} {} failed", spec.method, spec.path);
                    return Err(err);
                }
            }
        }
    }

    /// Convenience GET without query parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> CalResult<T> {
        self.request(RequestSpec::get(path)).await
    }

    /// Convenience GET with query parameters.
    pub async fn get_query<T: DeserializeOwned>(&self, path: &str, query: Query) -> CalResult<T> {
        self.request(RequestSpec::get(path).query(query)).await
    }

    /// Convenience POST with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> CalResult<T> {
        self.request(RequestSpec::post(path).body(body)?).await
    }

    /// Convenience PUT with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> CalResult<T> {
        self.request(RequestSpec::put(path).body(body)?).await
    }

    /// Convenience PATCH with a JSON body.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> CalResult<T> {
        self.request(RequestSpec::patch(path).body(body)?).await
    }

    /// Convenience DELETE.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> CalResult<T> {
        self.request(RequestSpec::delete(path)).await
    }

    /// Convenience DELETE with query parameters.
    pub async fn delete_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Query,
    ) -> CalResult<T> {
        self.request(RequestSpec::delete(path).query(query)).await
    }

    /// Runs a single attempt: arms a fresh timeout, executes, classifies.
    async fn execute_once(
        &self,
        method: Method,
        url: &Url,
        headers: &[(String, String)],
        body: Option<Vec<u8>>,
    ) -> CalResult<TransportResponse> {
        let request = TransportRequest {
            method,
            url: url.to_string(),
            headers: headers.to_vec(),
            body,
        };

        let response = match tokio::time::timeout(self.timeout, self.transport.execute(request))
            .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(fault)) => return Err(CalError::Network(fault.to_string())),
            Err(_) => {
                return Err(CalError::Network(format!(
                    "request timed out after {}ms",
                    self.timeout.as_millis()
                )));
            }
        };

        if !response.is_success() {
            return Err(classify_failure(&response));
        }
        Ok(response)
    }

    /// Joins base URL and path, then appends defined query pairs in
    /// insertion order.
    ///
    /// Plain concatenation rather than RFC 3986 join: joining would drop
    /// the `/v2` base segment for absolute paths.
    fn build_url(&self, path: &str, query: &Query) -> CalResult<Url> {
        let base = self.base_url.trim_end_matches('/');
        let full = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };

        let mut url = Url::parse(&full)
            .map_err(|e| CalError::Config(format!("invalid request URL {}: {}", full, e)))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Computes the final header list: content type, protocol version,
    /// auth headers, then caller overrides (overrides win on name
    /// conflicts, case-insensitively).
    fn build_headers(&self, overrides: &[(String, String)]) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("cal-api-version".to_string(), self.api_version.clone()),
        ];
        for (name, value) in self.auth.headers() {
            headers.push((name.to_string(), value));
        }

        for (name, value) in overrides {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }
        headers
    }
}

/// Decodes a success body; an empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> CalResult<T> {
    let bytes = if body.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        body
    };
    serde_json::from_slice(bytes)
        .map_err(|e| CalError::InvalidResponse(format!("failed to decode response body: {}", e)))
}

/// Maps a non-success response to exactly one [`CalError`] variant.
fn classify_failure(response: &TransportResponse) -> CalError {
    let envelope: Option<ErrorEnvelope> = serde_json::from_slice(&response.body).ok();
    let body = envelope.and_then(|e| e.error);
    let message = body
        .as_ref()
        .and_then(|b| b.message.clone())
        .unwrap_or_else(|| reason_phrase(response.status));

    match response.status {
        400 => CalError::Validation {
            message,
            details: body.and_then(|b| b.details),
        },
        401 | 403 => CalError::Auth(message),
        404 => CalError::NotFound(message),
        429 => CalError::RateLimited {
            message,
            retry_after: response
                .header("Retry-After")
                .and_then(|v| v.trim().parse().ok()),
        },
        status @ (500 | 502 | 503 | 504) => CalError::Server { status, message },
        status => CalError::Http { status, message },
    }
}

fn reason_phrase(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("unknown error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(base_url: &str, auth: AuthConfig) -> HttpClient {
        HttpClient::new(ClientOptions::new(auth).with_base_url(base_url))
    }

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = client_with("https://example.test/v2", AuthConfig::api_key("k"));
        let url = client.build_url("/bookings", &Query::new()).unwrap();
        assert_eq!(url.as_str(), "https://example.test/v2/bookings");

        // Trailing/leading slashes normalize to a single separator.
        let client = client_with("https://example.test/v2/", AuthConfig::api_key("k"));
        let url = client.build_url("bookings", &Query::new()).unwrap();
        assert_eq!(url.as_str(), "https://example.test/v2/bookings");
    }

    #[test]
    fn query_preserves_insertion_order_and_encodes() {
        let client = client_with("https://example.test", AuthConfig::api_key("k"));
        let mut query = Query::new();
        query.push("b", 2);
        query.push("a", "x y");
        query.push("c", true);
        let url = client.build_url("/slots", &query).unwrap();
        assert_eq!(url.as_str(), "https://example.test/slots?b=2&a=x+y&c=true");
    }

    #[test]
    fn absent_query_values_are_omitted() {
        let mut query = Query::new();
        query.push("a", 1);
        query.push_opt("b", None::<u32>);
        query.push_opt("c", Some("z"));
        let client = client_with("https://example.test", AuthConfig::api_key("k"));
        let url = client.build_url("/x", &query).unwrap();
        assert_eq!(url.as_str(), "https://example.test/x?a=1&c=z");
    }

    #[test]
    fn computed_headers_include_auth_and_version() {
        let client = client_with("https://example.test", AuthConfig::api_key("k"));
        let headers = client.build_headers(&[]);
        assert_eq!(
            headers,
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("cal-api-version".to_string(), "2024-08-13".to_string()),
                ("Authorization".to_string(), "Bearer k".to_string()),
            ]
        );
    }

    #[test]
    fn caller_overrides_win() {
        let client = client_with("https://example.test", AuthConfig::api_key("k"));
        let headers = client.build_headers(&[(
            "content-type".to_string(),
            "application/vnd.test+json".to_string(),
        )]);
        let content_types: Vec<_> = headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(content_types[0].1, "application/vnd.test+json");
    }

    #[test]
    fn classify_validation_with_details() {
        let err = classify_failure(&response(
            400,
            r#"{"status":"error","error":{"message":"start is required","details":{"field":"start"}}}"#,
        ));
        match err {
            CalError::Validation { message, details } => {
                assert_eq!(message, "start is required");
                assert_eq!(details.unwrap()["field"], "start");
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn classify_auth_and_not_found() {
        assert!(matches!(
            classify_failure(&response(401, r#"{"error":{"message":"bad key"}}"#)),
            CalError::Auth(m) if m == "bad key"
        ));
        assert!(matches!(
            classify_failure(&response(403, "{}")),
            CalError::Auth(m) if m == "Forbidden"
        ));
        assert!(matches!(
            classify_failure(&response(404, "not json at all")),
            CalError::NotFound(m) if m == "Not Found"
        ));
    }

    #[test]
    fn classify_rate_limited_with_retry_after() {
        let err = classify_failure(&TransportResponse {
            status: 429,
            headers: vec![("Retry-After".into(), "5".into())],
            body: br#"{"error":{"message":"slow down"}}"#.to_vec(),
        });
        match err {
            CalError::RateLimited {
                message,
                retry_after,
            } => {
                assert_eq!(message, "slow down");
                assert_eq!(retry_after, Some(5));
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn classify_server_and_generic() {
        for status in [500u16, 502, 503, 504] {
            match classify_failure(&response(status, "")) {
                CalError::Server { status: s, .. } => assert_eq!(s, status),
                other => panic!("unexpected classification: {:?}", other),
            }
        }
        assert!(matches!(
            classify_failure(&response(418, "")),
            CalError::Http { status: 418, .. }
        ));
        // 501 is not in the retryable server set.
        assert!(matches!(
            classify_failure(&response(501, "")),
            CalError::Http { status: 501, .. }
        ));
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let value: serde_json::Value = decode_body(b"").unwrap();
        assert!(value.is_null());
        let value: Option<u32> = decode_body(b"  ").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn malformed_success_body_is_invalid_response() {
        let result: CalResult<serde_json::Value> = decode_body(b"<html>oops</html>");
        assert!(matches!(result, Err(CalError::InvalidResponse(_))));
    }
}
