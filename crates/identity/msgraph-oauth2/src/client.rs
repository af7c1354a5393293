//! OAuth2 authorization-code client and Graph request helper.

use crate::config::{ClientCredentials, MicrosoftEndpoints};
use crate::error::{GraphError, GraphResult};
use crate::nonce;
use crate::types::{GraphRequest, TokenResponse};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;
use uuid::Uuid;

const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Client for the Microsoft identity platform and the Graph user directory.
///
/// Wraps one `reqwest` client; cheap to clone. Client credentials are passed
/// per call and never stored.
#[derive(Clone)]
pub struct GraphClient {
    http_client: Client,
    endpoints: MicrosoftEndpoints,
}

impl GraphClient {
    /// Creates a client with the default HTTP timeout.
    pub fn new(endpoints: MicrosoftEndpoints) -> Self {
        Self::with_timeout(endpoints, DEFAULT_HTTP_TIMEOUT_SECONDS)
    }

    pub fn with_timeout(endpoints: MicrosoftEndpoints, http_timeout_seconds: u64) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(http_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &MicrosoftEndpoints {
        &self.endpoints
    }

    /// Builds the provider authorization URL.
    ///
    /// Returns the URL together with the freshly generated anti-forgery
    /// state. The caller must hold on to the state and pass it back to
    /// [`exchange_code`](Self::exchange_code) when the provider redirects.
    pub fn authorization_url(
        &self,
        credentials: &ClientCredentials,
        request_base_url: &str,
    ) -> GraphResult<(String, String)> {
        let mut url = Url::parse(&self.endpoints.authorize_url())?;
        let redirect_uri = self.endpoints.redirect_uri(request_base_url);
        let state = Uuid::new_v4().to_string();

        let mut params = url.query_pairs_mut();
        params.append_pair("response_type", "code");
        params.append_pair("client_id", &credentials.client_id);
        params.append_pair("redirect_uri", &redirect_uri);
        params.append_pair("scope", &self.endpoints.scope);
        params.append_pair("response_mode", "query");
        params.append_pair("nonce", &nonce::correlation_id());
        params.append_pair("state", &state);
        drop(params);

        let auth_url = url.to_string();
        debug!("Generated authorization URL for client {}", credentials.client_id);

        Ok((auth_url, state))
    }

    /// Exchanges an authorization code for tokens.
    ///
    /// `returned_state` is the state the provider sent back on the redirect,
    /// `expected_state` the one [`authorization_url`](Self::authorization_url)
    /// produced for this session. The two must agree before any request is
    /// issued.
    pub async fn exchange_code(
        &self,
        credentials: &ClientCredentials,
        code: &str,
        returned_state: &str,
        expected_state: &str,
        request_base_url: &str,
    ) -> GraphResult<TokenResponse> {
        if returned_state != expected_state {
            return Err(GraphError::StateMismatch {
                expected: expected_state.to_string(),
                returned: returned_state.to_string(),
            });
        }

        let redirect_uri = self.endpoints.redirect_uri(request_base_url);
        let correlation_id = nonce::correlation_id();

        let mut params = HashMap::new();
        params.insert("grant_type", "authorization_code");
        params.insert("code", code);
        params.insert("client_id", &credentials.client_id);
        params.insert("client_secret", &credentials.client_secret);
        params.insert("redirect_uri", &redirect_uri);
        params.insert("response_mode", "form_post");
        params.insert("nonce", &correlation_id);
        params.insert("state", returned_state);

        let token_response = self.token_request(params).await?;

        info!("Successfully exchanged authorization code for tokens");
        Ok(token_response)
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// Refresh-token rotation, if the provider performs any, shows up in the
    /// response's `refresh_token` field.
    pub async fn exchange_refresh_token(
        &self,
        credentials: &ClientCredentials,
        refresh_token: &str,
        request_base_url: &str,
    ) -> GraphResult<TokenResponse> {
        let redirect_uri = self.endpoints.redirect_uri(request_base_url);
        let correlation_id = nonce::correlation_id();

        let mut params = HashMap::new();
        params.insert("grant_type", "refresh_token");
        params.insert("refresh_token", refresh_token);
        params.insert("client_id", &credentials.client_id);
        params.insert("client_secret", &credentials.client_secret);
        params.insert("redirect_uri", &redirect_uri);
        params.insert("response_mode", "form_post");
        params.insert("nonce", &correlation_id);

        let token_response = self.token_request(params).await?;

        info!("Successfully refreshed access token");
        Ok(token_response)
    }

    /// Fetches the current user's profile from `/v1.0/me`.
    ///
    /// The provider's JSON is passed through unmodified.
    pub async fn fetch_current_user(&self, access_token: &str) -> GraphResult<serde_json::Value> {
        self.request_json(GraphRequest::get("/v1.0/me", access_token))
            .await
    }

    /// Fetches the current user's group memberships from `/v1.0/me/memberOf`.
    pub async fn fetch_current_user_groups(
        &self,
        access_token: &str,
    ) -> GraphResult<serde_json::Value> {
        self.request_json(GraphRequest::get("/v1.0/me/memberOf", access_token))
            .await
    }

    /// Issues one form-encoded POST to the token endpoint and decodes the
    /// token response.
    async fn token_request(&self, params: HashMap<&str, &str>) -> GraphResult<TokenResponse> {
        let response = self
            .http_client
            .post(self.endpoints.token_url())
            .form(&params)
            .send()
            .await
            .map_err(GraphError::from_reqwest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Token exchange failed: {}", error_text);
            return Err(GraphError::TokenExchangeFailed(error_text));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| GraphError::InvalidTokenResponse(e.to_string()))?;

        Ok(token_response)
    }

    /// Issues one Graph API request and parses the body as JSON.
    ///
    /// Exactly one outcome per call: the parsed body, a transport error, a
    /// distinct timeout error, a non-2xx status error, or a JSON parse
    /// error. No retries; redirects only as the transport follows them.
    async fn request_json(&self, request: GraphRequest<'_>) -> GraphResult<serde_json::Value> {
        let base_url = request
            .base_url
            .unwrap_or(self.endpoints.graph_base_url.as_str());
        let url = format!("{}{}", base_url, request.path);

        let response = self
            .http_client
            .request(request.method.clone(), &url)
            .bearer_auth(request.bearer_token)
            .send()
            .await
            .map_err(GraphError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(GraphError::from_reqwest)?;

        if !status.is_success() {
            error!("Graph request to {} failed with status {}", request.path, status);
            return Err(GraphError::ApiError { status, body });
        }

        let value = serde_json::from_str(&body)?;
        debug!("Graph request to {} succeeded", request.path);
        Ok(value)
    }
}
