//! End-to-end engine behavior against an in-memory transport: header
//! construction, retry/backoff timing, per-attempt timeouts and error
//! classification as observed by a caller.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use caldotcom_sdk::{
    AuthConfig, CalError, ClientOptions, HttpClient, Method, Query, RequestSpec, Transport,
    TransportFault, TransportRequest, TransportResponse,
};

/// Scripted transport: answers requests in order and records each one.
#[derive(Default)]
struct MockTransport {
    requests: Mutex<Vec<TransportRequest>>,
    script: Mutex<VecDeque<Result<TransportResponse, TransportFault>>>,
}

impl MockTransport {
    fn scripted(
        script: impl IntoIterator<Item = Result<TransportResponse, TransportFault>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            script: Mutex::new(script.into_iter().collect()),
        })
    }

    fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> caldotcom_sdk::BoxFuture<'_, Result<TransportResponse, TransportFault>> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more times than scripted");
        Box::pin(async move { next })
    }
}

/// Transport whose requests never complete; exercises the timeout path.
struct StalledTransport {
    calls: Mutex<u32>,
}

impl Transport for StalledTransport {
    fn execute(
        &self,
        _request: TransportRequest,
    ) -> caldotcom_sdk::BoxFuture<'_, Result<TransportResponse, TransportFault>> {
        *self.calls.lock().unwrap() += 1;
        Box::pin(std::future::pending())
    }
}

fn ok(body: &str) -> Result<TransportResponse, TransportFault> {
    Ok(TransportResponse {
        status: 200,
        headers: Vec::new(),
        body: body.as_bytes().to_vec(),
    })
}

fn status(code: u16, body: &str) -> Result<TransportResponse, TransportFault> {
    Ok(TransportResponse {
        status: code,
        headers: Vec::new(),
        body: body.as_bytes().to_vec(),
    })
}

fn options(auth: AuthConfig) -> ClientOptions {
    ClientOptions::new(auth).with_base_url("https://example.test")
}

#[tokio::test]
async fn builds_url_and_api_key_headers() {
    let transport = MockTransport::scripted([ok("{}")]);
    let client = HttpClient::with_transport(options(AuthConfig::api_key("k")), transport.clone());

    let spec = RequestSpec::get("/x").query(Query::new().with("a", 1));
    let _: serde_json::Value = client.request(spec).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "https://example.test/x?a=1");
    assert_eq!(request.header("Authorization"), Some("Bearer k"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header("cal-api-version"), Some("2024-08-13"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn oauth_client_sends_paired_headers() {
    let transport = MockTransport::scripted([ok("{}")]);
    let client = HttpClient::with_transport(
        options(AuthConfig::oauth_client("cid", "sk")),
        transport.clone(),
    );

    let _: serde_json::Value = client.get("/x").await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.header("x-cal-client-id"), Some("cid"));
    assert_eq!(request.header("x-cal-secret-key"), Some("sk"));
    assert_eq!(request.header("Authorization"), None);
}

#[tokio::test]
async fn managed_user_sends_bearer_access_token() {
    let transport = MockTransport::scripted([ok("{}")]);
    let client = HttpClient::with_transport(
        options(AuthConfig::managed_user("at", Some("rt".into()))),
        transport.clone(),
    );

    let _: serde_json::Value = client.get("/x").await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.header("Authorization"), Some("Bearer at"));
    // The refresh token never leaves the client.
    assert!(!request.headers.iter().any(|(_, v)| v.contains("rt")));
}

#[tokio::test]
async fn caller_header_overrides_reach_the_wire() {
    let transport = MockTransport::scripted([ok("{}")]);
    let client = HttpClient::with_transport(options(AuthConfig::api_key("k")), transport.clone());

    let spec = RequestSpec::get("/x").header("CAL-API-VERSION", "2024-06-14");
    let _: serde_json::Value = client.request(spec).await.unwrap();

    let request = &transport.requests()[0];
    let versions: Vec<&str> = request
        .headers
        .iter()
        .filter(|(k, _)| k.eq_ignore_ascii_case("cal-api-version"))
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(versions, vec!["2024-06-14"]);
}

#[tokio::test]
async fn post_carries_body_and_get_drops_it() {
    let transport = MockTransport::scripted([ok("{}"), ok("{}")]);
    let client = HttpClient::with_transport(options(AuthConfig::api_key("k")), transport.clone());

    let body = serde_json::json!({"name": "x"});
    let _: serde_json::Value = client
        .request(RequestSpec::post("/a").body(&body).unwrap())
        .await
        .unwrap();
    let _: serde_json::Value = client
        .request(RequestSpec::get("/b").body(&body).unwrap())
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[0].body.as_deref(),
        Some(br#"{"name":"x"}"#.as_slice())
    );
    assert!(requests[1].body.is_none());
}

#[tokio::test(start_paused = true)]
async fn retries_server_errors_with_exponential_backoff() {
    let transport = MockTransport::scripted([
        status(500, ""),
        status(503, ""),
        ok(r#"{"ok":true}"#),
    ]);
    let client = HttpClient::with_transport(options(AuthConfig::api_key("k")), transport.clone());

    let started = tokio::time::Instant::now();
    let value: serde_json::Value = client.get("/x").await.unwrap();
    assert_eq!(value["ok"], true);

    // Two backoffs: 1000ms then 2000ms.
    assert_eq!(started.elapsed(), Duration::from_millis(3000));
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn retry_budget_exhaustion_returns_last_error() {
    let transport = MockTransport::scripted([status(500, ""), status(502, ""), status(504, "")]);
    let client = HttpClient::with_transport(
        options(AuthConfig::api_key("k")).with_max_retries(2),
        transport.clone(),
    );

    let result: Result<serde_json::Value, _> = client.get("/x").await;
    match result {
        Err(CalError::Server { status, .. }) => assert_eq!(status, 504),
        other => panic!("expected server error, got {:?}", other),
    }
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn network_faults_are_retried() {
    let transport = MockTransport::scripted([
        Err(TransportFault::ConnectionFailed("refused".into())),
        ok("42"),
    ]);
    let client = HttpClient::with_transport(options(AuthConfig::api_key("k")), transport.clone());

    let started = tokio::time::Instant::now();
    let value: u32 = client.get("/x").await.unwrap();
    assert_eq!(value, 42);
    assert_eq!(started.elapsed(), Duration::from_millis(1000));
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    for (code, body) in [
        (400, r#"{"error":{"message":"bad"}}"#),
        (401, "{}"),
        (404, "{}"),
        (429, "{}"),
        (418, "{}"),
    ] {
        let transport = MockTransport::scripted([status(code, body)]);
        let client =
            HttpClient::with_transport(options(AuthConfig::api_key("k")), transport.clone());

        let result: Result<serde_json::Value, _> = client.get("/x").await;
        assert!(result.is_err());
        assert_eq!(transport.requests().len(), 1, "status {} was retried", code);
    }
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let transport = MockTransport::scripted([Ok(TransportResponse {
        status: 429,
        headers: vec![("Retry-After".into(), "5".into())],
        body: br#"{"error":{"message":"slow down"}}"#.to_vec(),
    })]);
    let client = HttpClient::with_transport(options(AuthConfig::api_key("k")), transport);

    let result: Result<serde_json::Value, _> = client.get("/x").await;
    match result {
        Err(CalError::RateLimited {
            retry_after,
            message,
        }) => {
            assert_eq!(retry_after, Some(5));
            assert_eq!(message, "slow down");
        }
        other => panic!("expected rate limit error, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn each_attempt_gets_a_fresh_timeout() {
    let transport = Arc::new(StalledTransport {
        calls: Mutex::new(0),
    });
    let client = HttpClient::with_transport(
        options(AuthConfig::api_key("k"))
            .with_timeout(Duration::from_millis(50))
            .with_max_retries(1),
        transport.clone(),
    );

    let started = tokio::time::Instant::now();
    let result: Result<serde_json::Value, _> = client.get("/x").await;
    match result {
        Err(CalError::Network(message)) => assert!(message.contains("timed out")),
        other => panic!("expected network error, got {:?}", other),
    }

    // 50ms attempt, 1000ms backoff, 50ms attempt.
    assert_eq!(started.elapsed(), Duration::from_millis(1100));
    assert_eq!(*transport.calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn malformed_success_body_is_not_retried() {
    let transport = MockTransport::scripted([ok("<html>oops</html>")]);
    let client = HttpClient::with_transport(options(AuthConfig::api_key("k")), transport.clone());

    let result: Result<serde_json::Value, _> = client.get("/x").await;
    assert!(matches!(result, Err(CalError::InvalidResponse(_))));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn empty_success_body_decodes_as_null() {
    let transport = MockTransport::scripted([ok("")]);
    let client = HttpClient::with_transport(options(AuthConfig::api_key("k")), transport);

    let value: serde_json::Value = client.delete("/x").await.unwrap();
    assert!(value.is_null());
}
