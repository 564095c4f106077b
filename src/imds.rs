use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, TokenFetchCause};

/// Local-only Azure Instance Metadata Service token endpoint.
pub const IMDS_TOKEN_ENDPOINT: &str = "http://169.254.169.254/metadata/identity/oauth2/token";
pub const IMDS_API_VERSION: &str = "2018-02-01";

/// First-party application id of Azure Databricks, used as the token
/// resource for calls to the workspace API.
pub const DATABRICKS_RESOURCE_ID: &str = "2ff814a6-3304-4ab8-85cb-cd0e6f879c1d";

/// Azure Resource Manager resource URI, already percent-encoded for the
/// query string.
pub const MANAGEMENT_RESOURCE_ID: &str = "https%3A%2F%2Fmanagement.core.windows.net%2F";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Fetches managed-identity tokens from the instance metadata endpoint.
pub struct ImdsClient {
    http: Client,
    endpoint: String,
}

impl ImdsClient {
    pub fn new(http: Client) -> Self {
        Self::with_endpoint(http, IMDS_TOKEN_ENDPOINT)
    }

    /// Points the client at a different token endpoint, e.g. a mock server.
    pub fn with_endpoint(http: Client, endpoint: impl Into<String>) -> Self {
        ImdsClient {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Requests a bearer token for `resource`. The resource identifier goes
    /// into the query string as-is, so the caller percent-encodes it when
    /// needed. One request, fetched fresh each call; expiry is not tracked.
    pub async fn fetch_token(&self, resource: &str) -> Result<String, Error> {
        let url = format!(
            "{}?api-version={}&resource={}",
            self.endpoint, IMDS_API_VERSION, resource
        );
        debug!("requesting IMDS token from {}", url);

        self.request_token(&url)
            .await
            .map_err(|cause| Error::TokenFetchFailed {
                resource: resource.to_string(),
                cause,
            })
    }

    async fn request_token(&self, url: &str) -> Result<String, TokenFetchCause> {
        let response = self
            .http
            .get(url)
            .header("Metadata", "true")
            .send()
            .await?
            .error_for_status()?;

        let body: TokenResponse = response.json().await?;
        body.access_token.ok_or(TokenFetchCause::MissingAccessToken)
    }
}
