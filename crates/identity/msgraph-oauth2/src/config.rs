//! Endpoint configuration and client credentials.

use serde::{Deserialize, Serialize};

/// Microsoft identity platform and Graph endpoint configuration.
///
/// Immutable once constructed; the [`GraphClient`](crate::GraphClient) holds
/// one copy and never mutates it. [`Default`] yields the common-tenant v2.0
/// endpoints. Tests substitute their own base URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicrosoftEndpoints {
    /// Authority base URL, e.g. `https://login.microsoftonline.com/common`.
    pub authority: String,
    /// Authorization endpoint path under the authority.
    pub authorize_path: String,
    /// Token endpoint path under the authority.
    pub token_path: String,
    /// Space-separated scope string requested on every authorization.
    pub scope: String,
    /// Path appended to the caller's request base URL to form the redirect URI.
    pub redirect_path: String,
    /// Base URL of the Graph API, e.g. `https://graph.microsoft.com`.
    pub graph_base_url: String,
}

impl Default for MicrosoftEndpoints {
    fn default() -> Self {
        Self {
            authority: "https://login.microsoftonline.com/common".to_string(),
            authorize_path: "/oauth2/v2.0/authorize".to_string(),
            token_path: "/oauth2/v2.0/token".to_string(),
            scope: "user.read directory.read.all offline_access".to_string(),
            redirect_path: "/oauth2callback".to_string(),
            graph_base_url: "https://graph.microsoft.com".to_string(),
        }
    }
}

impl MicrosoftEndpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full URL of the authorization endpoint.
    pub fn authorize_url(&self) -> String {
        format!("{}{}", self.authority, self.authorize_path)
    }

    /// Full URL of the token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.authority, self.token_path)
    }

    /// Redirect URI derived from the caller's request base URL.
    pub fn redirect_uri(&self, request_base_url: &str) -> String {
        format!("{}{}", request_base_url, self.redirect_path)
    }
}

/// OAuth2 client credentials, supplied by the caller per call.
///
/// The client never stores these.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}
