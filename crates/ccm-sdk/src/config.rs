//! Client configuration.

use std::time::Duration;

use ccm_core::{CcmError, Result};
use url::Url;

/// Environment variable holding the CCM API base URL.
pub const API_HOST_ENV: &str = "API_HOST";

/// Settings for a [`CcmClient`](crate::CcmClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User id assigned when access to CCM was granted.
    pub user_id: String,

    /// Base URL of the CCM API. Outbound calls fail while this is unset.
    pub api_host: Option<Url>,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// Seed for mock data generation. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration with no API host.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            api_host: None,
            timeout: None,
            rng_seed: None,
        }
    }

    /// Start a configuration builder.
    pub fn builder(user_id: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(user_id)
    }

    /// Build a configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// An unset or empty [`API_HOST_ENV`] leaves the host unset.
    pub fn from_env(user_id: impl Into<String>) -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(user_id, |key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup(
        user_id: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut builder = Self::builder(user_id);
        if let Some(host) = lookup(API_HOST_ENV) {
            builder = builder.api_host(host);
        }
        builder.build()
    }
}

/// Builder for [`ClientConfig`] with a fluent API.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    user_id: String,
    api_host: Option<String>,
    timeout: Option<Duration>,
    rng_seed: Option<u64>,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            api_host: None,
            timeout: None,
            rng_seed: None,
        }
    }

    /// Set the API base URL.
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fix the seed used for mock data.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the configuration, validating the host.
    pub fn build(self) -> Result<ClientConfig> {
        if self.user_id.trim().is_empty() {
            return Err(CcmError::Config("user id cannot be empty".to_string()));
        }

        let api_host = match self.api_host.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(host) => Some(parse_host(host)?),
        };

        Ok(ClientConfig {
            user_id: self.user_id,
            api_host,
            timeout: self.timeout,
            rng_seed: self.rng_seed,
        })
    }
}

/// Parse an API base URL, accepting only `http`/`https` URLs with a host.
fn parse_host(host: &str) -> Result<Url> {
    let url = Url::parse(host)
        .map_err(|e| CcmError::Config(format!("invalid API host '{}': {}", host, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CcmError::Config(format!(
            "invalid API host '{}': scheme must be http or https",
            host
        )));
    }
    if url.host_str().is_none() {
        return Err(CcmError::Config(format!("invalid API host '{}': missing host", host)));
    }

    Ok(url)
}
