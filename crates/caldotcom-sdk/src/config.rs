//! Client construction options.
//!
//! Options are fixed at construction time; the engine never mutates them.
//! `from_env` mirrors the conventional `CALDOTCOM_*` environment variables:
//!
//! - `CALDOTCOM_API_KEY` - API key auth
//! - `CALDOTCOM_CLIENT_ID` + `CALDOTCOM_SECRET_KEY` - OAuth client auth
//! - `CALDOTCOM_ACCESS_TOKEN` (+ `CALDOTCOM_REFRESH_TOKEN`) - managed user
//! - `CALDOTCOM_BASE_URL`, `CALDOTCOM_API_VERSION`, `CALDOTCOM_TIMEOUT`
//!   (milliseconds), `CALDOTCOM_MAX_RETRIES` - optional overrides
//!
//! Detection tries the auth variants in the order listed above.

use std::time::Duration;

use crate::auth::AuthConfig;
use crate::error::{CalError, CalResult};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.cal.com/v2";

/// Protocol version sent in the `cal-api-version` header.
pub const DEFAULT_API_VERSION: &str = "2024-08-13";

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default maximum number of retry attempts after the initial one.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Options for constructing a client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Authentication credentials.
    pub auth: AuthConfig,
    /// Base URL the request path is appended to.
    pub base_url: String,
    /// Value of the `cal-api-version` header.
    pub api_version: String,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for transient failures.
    pub max_retries: u32,
}

impl ClientOptions {
    /// Creates options with the given credentials and all defaults.
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Builder method to set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder method to set the API version header value.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Builder method to set the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method to set the maximum retry attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Loads options from `CALDOTCOM_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`CalError::Config`] when no credential set is present.
    pub fn from_env() -> CalResult<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Loads options through an injected variable lookup.
    ///
    /// Exists so the detection logic is testable without touching the
    /// process environment.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> CalResult<Self> {
        let auth = auth_from_lookup(&lookup)?;
        let mut options = Self::new(auth);

        if let Some(base_url) = lookup("CALDOTCOM_BASE_URL") {
            options.base_url = base_url;
        }
        if let Some(api_version) = lookup("CALDOTCOM_API_VERSION") {
            options.api_version = api_version;
        }
        if let Some(timeout) = lookup("CALDOTCOM_TIMEOUT")
            && let Ok(millis) = timeout.trim().parse::<u64>()
        {
            options.timeout = Duration::from_millis(millis);
        }
        if let Some(retries) = lookup("CALDOTCOM_MAX_RETRIES")
            && let Ok(max_retries) = retries.trim().parse::<u32>()
        {
            options.max_retries = max_retries;
        }

        Ok(options)
    }
}

fn auth_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> CalResult<AuthConfig> {
    if let Some(api_key) = lookup("CALDOTCOM_API_KEY") {
        return Ok(AuthConfig::api_key(api_key));
    }

    if let (Some(client_id), Some(secret_key)) = (
        lookup("CALDOTCOM_CLIENT_ID"),
        lookup("CALDOTCOM_SECRET_KEY"),
    ) {
        return Ok(AuthConfig::oauth_client(client_id, secret_key));
    }

    if let Some(access_token) = lookup("CALDOTCOM_ACCESS_TOKEN") {
        return Ok(AuthConfig::managed_user(
            access_token,
            lookup("CALDOTCOM_REFRESH_TOKEN"),
        ));
    }

    Err(CalError::Config(
        "no Cal.com credentials found; set CALDOTCOM_API_KEY, \
         CALDOTCOM_CLIENT_ID + CALDOTCOM_SECRET_KEY, or CALDOTCOM_ACCESS_TOKEN"
            .into(),
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let options = ClientOptions::new(AuthConfig::api_key("cal_x"));
        assert_eq!(options.base_url, DEFAULT_BASE_URL);
        assert_eq!(options.api_version, DEFAULT_API_VERSION);
        assert_eq!(options.timeout, Duration::from_millis(30_000));
        assert_eq!(options.max_retries, 3);
    }

    #[test]
    fn api_key_takes_precedence() {
        let vars = env(&[
            ("CALDOTCOM_API_KEY", "cal_key"),
            ("CALDOTCOM_CLIENT_ID", "cid"),
            ("CALDOTCOM_SECRET_KEY", "sk"),
        ]);
        let options = ClientOptions::from_env_with(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(options.auth, AuthConfig::api_key("cal_key"));
    }

    #[test]
    fn oauth_client_requires_both_vars() {
        let vars = env(&[
            ("CALDOTCOM_CLIENT_ID", "cid"),
            ("CALDOTCOM_ACCESS_TOKEN", "tok"),
        ]);
        let options = ClientOptions::from_env_with(|k| vars.get(k).cloned()).unwrap();
        // Secret key missing, so detection falls through to managed user.
        assert_eq!(options.auth, AuthConfig::managed_user("tok", None));
    }

    #[test]
    fn managed_user_with_refresh_token() {
        let vars = env(&[
            ("CALDOTCOM_ACCESS_TOKEN", "tok"),
            ("CALDOTCOM_REFRESH_TOKEN", "ref"),
        ]);
        let options = ClientOptions::from_env_with(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(
            options.auth,
            AuthConfig::managed_user("tok", Some("ref".into()))
        );
    }

    #[test]
    fn missing_credentials() {
        let result = ClientOptions::from_env_with(|_| None);
        assert!(matches!(result, Err(CalError::Config(_))));
    }

    #[test]
    fn numeric_overrides() {
        let vars = env(&[
            ("CALDOTCOM_API_KEY", "cal_key"),
            ("CALDOTCOM_BASE_URL", "https://staging.cal.test/v2"),
            ("CALDOTCOM_TIMEOUT", "5000"),
            ("CALDOTCOM_MAX_RETRIES", "1"),
        ]);
        let options = ClientOptions::from_env_with(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(options.base_url, "https://staging.cal.test/v2");
        assert_eq!(options.timeout, Duration::from_millis(5000));
        assert_eq!(options.max_retries, 1);
    }

    #[test]
    fn invalid_numeric_overrides_keep_defaults() {
        let vars = env(&[
            ("CALDOTCOM_API_KEY", "cal_key"),
            ("CALDOTCOM_TIMEOUT", "not-a-number"),
            ("CALDOTCOM_MAX_RETRIES", "-3"),
        ]);
        let options = ClientOptions::from_env_with(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(options.timeout, DEFAULT_TIMEOUT);
        assert_eq!(options.max_retries, DEFAULT_MAX_RETRIES);
    }
}
