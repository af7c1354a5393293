//! OAuth2 protocol and Graph request types.

use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Token endpoint response (RFC 6749 §5.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub id_token: Option<String>,
}

/// Descriptor for one Graph API request.
///
/// Defaults to a GET against the configured Graph base URL; both can be
/// overridden per request.
#[derive(Debug)]
pub(crate) struct GraphRequest<'a> {
    pub path: &'a str,
    pub bearer_token: &'a str,
    pub method: Method,
    /// Overrides the configured Graph base URL when set.
    pub base_url: Option<&'a str>,
}

impl<'a> GraphRequest<'a> {
    pub fn get(path: &'a str, bearer_token: &'a str) -> Self {
        Self {
            path,
            bearer_token,
            method: Method::GET,
            base_url: None,
        }
    }
}
