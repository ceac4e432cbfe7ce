//! HTTP client for network-based API calls

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::ErrorBody;

use crate::config::TokenProvider;
use crate::{ClientConfig, ClientError, ClientResult};

/// Authorization scheme expected by the backend's token auth
const AUTH_SCHEME: &str = "Token";

/// HTTP client for making network requests to the store backend
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: Url,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid base URL {}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base URL cannot hold paths: {}",
                config.base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            token_provider: config.token_provider.clone(),
        })
    }

    /// Build an endpoint URL from path segments, with the trailing slash
    /// the backend routes require. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config("base URL cannot hold paths".into()))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    fn auth_header(&self) -> Option<String> {
        self.token_provider
            .as_ref()
            .and_then(|p| p.token())
            .map(|t| format!("{AUTH_SCHEME} {t}"))
    }

    /// Make a GET request with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, ?query, "GET");
        let mut req = self.client.get(url).query(query);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Make a POST request with a JSON body, ignoring the response body
    pub async fn post_no_content<B: serde::Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<()> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "POST");
        let mut req = self.client.post(url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Turn non-success statuses into errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        Err(error_for_status(status, &text))
    }
}

/// Map a non-success status and its body to a client error
pub(crate) fn error_for_status(status: StatusCode, body: &str) -> ClientError {
    // DRF bodies carry `detail` or `message`; fall back to the raw text
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.text().map(str::to_owned))
        .unwrap_or_else(|| body.to_owned());

    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        _ => ClientError::Status {
            status: status.as_u16(),
            message,
        },
    }
}
