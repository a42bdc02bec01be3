use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::errors::Result;
use crate::params::Params;

/// Placeholder in resource templates replaced by the `phone_number`
/// parameter before dispatch.
pub const PHONE_NUMBER_PLACEHOLDER: &str = "{phone_number}";

/// A completed HTTP exchange: the status code and the JSON body exactly
/// as the server returned them.
///
/// Non-2xx statuses are delivered here rather than raised as errors:
/// the API reports request problems (bad credentials, malformed phone
/// numbers, unknown ucid) in the body, and interpreting that is the
/// caller's business.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Parsed JSON body, passed through without further interpretation.
    pub body: Value,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// REST execution helper shared by all lookup operations.
///
/// Holds a `reqwest::Client` configured once from [`Config`] (timeout,
/// optional User-Agent) plus the base endpoint and credentials. All
/// state is immutable after construction, so the client can be cloned
/// and used from concurrent tasks freely.
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    rest_endpoint: String,
    customer_id: String,
    api_key: String,
}

impl RestClient {
    /// Creates a new `RestClient` from the given config.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_millis(config.timeout_ms));
        if let Some(ref user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            rest_endpoint: config.rest_endpoint,
            customer_id: config.customer_id,
            api_key: config.api_key,
        })
    }

    /// Executes one request against `resource` with the given parameters.
    ///
    /// If `params` contains `phone_number`, its value is substituted for
    /// the [`PHONE_NUMBER_PLACEHOLDER`] in the resource template; the
    /// full parameter set is then sent as the query string. Credentials
    /// travel in the Authorization header, never in the URL, so the URL
    /// is safe to log.
    pub async fn execute(
        &self,
        method: Method,
        resource: &str,
        params: &Params,
    ) -> Result<ApiResponse> {
        let resource = render_resource(resource, params);
        let url = url::Url::parse_with_params(
            &format!("{}{}", self.rest_endpoint, resource),
            params.iter(),
        )?;

        tracing::debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, url)
            .basic_auth(&self.customer_id, Some(&self.api_key))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        tracing::debug!("Response status: {}", status);
        Ok(ApiResponse { status, body })
    }
}

/// Substitutes the phone number from `params` into the resource
/// template. Substitution reads the merged parameter set, so an
/// overwritten `phone_number` flows into the path as well as the query.
/// Templates without the placeholder, and parameter sets without the
/// key, pass through unchanged.
fn render_resource(template: &str, params: &Params) -> String {
    match params.get("phone_number") {
        Some(phone_number) => template.replace(PHONE_NUMBER_PLACEHOLDER, phone_number),
        None => template.to_string(),
    }
}
