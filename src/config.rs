//! Client configuration: host, credentials and connection settings.

use std::time::Duration;

use crate::error::ApiError;

/// Default base path of the management API.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Default per-attempt request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable connection settings for one management API endpoint.
///
/// Validated at construction; reconfiguration means building a new value.
/// There is no global client state anywhere in the crate.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    host: String,
    token: String,
    use_ssl: bool,
    base_path: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Builds a configuration with defaults: TLS on, `/api` base path,
    /// 30 second timeout.
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder(host, token).build()
    }

    pub fn builder(host: impl Into<String>, token: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            host: host.into(),
            token: token.into(),
            use_ssl: true,
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn use_ssl(&self) -> bool {
        self.use_ssl
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `Authorization` header value sent with every request.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Absolute base URL every request path is joined onto.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}{}", scheme, self.host, self.base_path)
    }
}

/// Builder for [`ClientConfig`]; validation happens in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct ClientConfigBuilder {
    host: String,
    token: String,
    use_ssl: bool,
    base_path: String,
    timeout: Duration,
}

impl ClientConfigBuilder {
    pub fn use_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self
    }

    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ClientConfig, ApiError> {
        let host = self.host.trim().trim_end_matches('/').to_string();
        if host.is_empty() {
            return Err(ApiError::config("host must not be empty"));
        }
        if host.contains("://") {
            return Err(ApiError::config(
                "host must be a bare hostname, without a scheme",
            ));
        }
        if self.token.trim().is_empty() {
            return Err(ApiError::config("API token must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout must be greater than zero"));
        }

        // Normalize to "/path" with no trailing slash; empty means API at the root.
        let trimmed = self.base_path.trim().trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };

        Ok(ClientConfig {
            host,
            token: self.token,
            use_ssl: self.use_ssl,
            base_path,
            timeout: self.timeout,
        })
    }
}
