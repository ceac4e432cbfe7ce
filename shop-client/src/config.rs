//! Client configuration

use std::fmt;
use std::sync::Arc;

use crate::error::{ClientError, ClientResult};

/// Backend API root used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Supplies the auth token for each request.
///
/// Token storage lives outside this crate; the transport only asks for the
/// current value right before sending.
pub trait TokenProvider: Send + Sync + fmt::Debug {
    fn token(&self) -> Option<String>;
}

/// A token that never changes during the session
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

/// Client configuration for connecting to the store backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (e.g., "http://127.0.0.1:8000/api")
    pub base_url: String,

    /// Auth token source for authenticated endpoints
    pub token_provider: Option<Arc<dyn TokenProvider>>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Items per page, when known up front. Otherwise it is probed.
    pub page_size: Option<u32>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_provider: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            page_size: None,
        }
    }

    /// Use a fixed auth token
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.with_token_provider(Arc::new(StaticToken::new(token)))
    }

    /// Use a custom auth token source
    pub fn with_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Skip the page-size probe and use this page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Load configuration from the environment (and `.env`, if present)
    ///
    /// - `SHOP_API_URL` - API root, defaults to [`DEFAULT_BASE_URL`]
    /// - `SHOP_API_TOKEN` - auth token
    /// - `SHOP_HTTP_TIMEOUT` - request timeout in seconds
    /// - `SHOP_PAGE_SIZE` - known page size
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::new(var("SHOP_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()));

        if let Some(token) = var("SHOP_API_TOKEN") {
            config = config.with_token(token);
        }
        if let Some(timeout) = var("SHOP_HTTP_TIMEOUT") {
            config.timeout = parse_number("SHOP_HTTP_TIMEOUT", &timeout)?;
        }
        if let Some(page_size) = var("SHOP_PAGE_SIZE") {
            let page_size: u32 = parse_number("SHOP_PAGE_SIZE", &page_size)?;
            if page_size == 0 {
                return Err(ClientError::Config("SHOP_PAGE_SIZE must be at least 1".into()));
            }
            config.page_size = Some(page_size);
        }

        Ok(config)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<super::NetworkHttpClient> {
        super::NetworkHttpClient::new(self)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> ClientResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ClientError::Config(format!("{name} is not a valid number: {value}")))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
