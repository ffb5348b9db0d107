//! Authentication configuration for the Cal.com v2 API.
//!
//! Three mutually exclusive credential shapes exist:
//!
//! - API key - regular users, sent as a bearer token
//! - OAuth client - platform tenants, sent as an id/secret header pair
//! - Managed user - platform-managed users, sent as a bearer access token
//!
//! The active variant is fixed for the lifetime of a client.

use serde::{Deserialize, Serialize};

use crate::error::{CalError, CalResult};

/// Authentication credentials, one variant active per client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum AuthConfig {
    /// API key authentication (keys are prefixed `cal_` or `cal_live_`).
    ApiKey {
        /// The opaque API key.
        api_key: String,
    },
    /// OAuth client credentials for platform customers.
    OauthClient {
        /// The OAuth client identifier.
        client_id: String,
        /// The OAuth client secret key.
        secret_key: String,
    },
    /// Access token for a platform managed user.
    ManagedUser {
        /// The managed user's access token.
        access_token: String,
        /// Refresh token, carried but not used by the engine (rotation is
        /// an explicit API call, see platform managed users).
        refresh_token: Option<String>,
    },
}

impl AuthConfig {
    /// Creates API key credentials.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            api_key: key.into(),
        }
    }

    /// Creates OAuth client credentials.
    pub fn oauth_client(client_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::OauthClient {
            client_id: client_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Creates managed user credentials.
    pub fn managed_user(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
    ) -> Self {
        Self::ManagedUser {
            access_token: access_token.into(),
            refresh_token,
        }
    }

    /// Builds the authentication headers for this variant.
    ///
    /// | variant | headers |
    /// |---|---|
    /// | `ApiKey` | `Authorization: Bearer <apiKey>` |
    /// | `OauthClient` | `x-cal-client-id`, `x-cal-secret-key` |
    /// | `ManagedUser` | `Authorization: Bearer <accessToken>` |
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ApiKey { api_key } => {
                vec![("Authorization", format!("Bearer {}", api_key))]
            }
            Self::OauthClient {
                client_id,
                secret_key,
            } => vec![
                ("x-cal-client-id", client_id.clone()),
                ("x-cal-secret-key", secret_key.clone()),
            ],
            Self::ManagedUser { access_token, .. } => {
                vec![("Authorization", format!("Bearer {}", access_token))]
            }
        }
    }

    /// Returns the OAuth client id, or a [`CalError::Config`] when the
    /// active variant is not `OauthClient`.
    ///
    /// Platform resources use this to build `/oauth-clients/{id}/...`
    /// paths.
    pub fn client_id(&self) -> CalResult<&str> {
        match self {
            Self::OauthClient { client_id, .. } => Ok(client_id),
            _ => Err(CalError::Config(
                "this API requires oauthClient authentication".into(),
            )),
        }
    }

    /// Returns a short name for the active variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey { .. } => "apiKey",
            Self::OauthClient { .. } => "oauthClient",
            Self::ManagedUser { .. } => "managedUser",
        }
    }
}
