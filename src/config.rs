use serde::Deserialize;

/// Production REST endpoint used when none is configured.
pub const DEFAULT_REST_ENDPOINT: &str = "https://rest-ww.telesign.com";

/// Request timeout applied when none is configured, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Construction parameters for a [`PhoneIdClient`](crate::PhoneIdClient).
///
/// Only the credentials are required; everything else has a documented
/// default. The struct can also be deserialized from a config file, with
/// the same defaults filled in for missing fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TeleSign customer ID.
    pub customer_id: String,
    /// TeleSign API key. Held opaquely and passed to the transport;
    /// never written to logs.
    pub api_key: String,
    /// Base URL of the REST API, default [`DEFAULT_REST_ENDPOINT`].
    #[serde(default = "default_rest_endpoint")]
    pub rest_endpoint: String,
    /// Per-request timeout in milliseconds, default [`DEFAULT_TIMEOUT_MS`].
    /// Governs all requests uniformly; there is no per-call override.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Optional User-Agent header sent with every request. Unset by default.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_rest_endpoint() -> String {
    DEFAULT_REST_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Config {
    /// Creates a config with the given credentials and all defaults.
    pub fn new(customer_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            api_key: api_key.into(),
            rest_endpoint: default_rest_endpoint(),
            timeout_ms: default_timeout_ms(),
            user_agent: None,
        }
    }

    /// Overrides the base REST endpoint.
    pub fn with_rest_endpoint(mut self, rest_endpoint: impl Into<String>) -> Self {
        self.rest_endpoint = rest_endpoint.into();
        self
    }

    /// Overrides the request timeout, in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
