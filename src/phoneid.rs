use reqwest::Method;

use crate::config::Config;
use crate::errors::Result;
use crate::params::Params;
use crate::rest::{ApiResponse, RestClient};

const STANDARD_RESOURCE: &str = "/v1/phoneid/standard/{phone_number}";
const SCORE_RESOURCE: &str = "/v1/phoneid/score/{phone_number}";
const CONTACT_RESOURCE: &str = "/v1/phoneid/contact/{phone_number}";
const LIVE_RESOURCE: &str = "/v1/phoneid/live/{phone_number}";
const NUMBER_DEACTIVATION_RESOURCE: &str = "/v1/phoneid/number_deactivation/{phone_number}";

/// Client for the TeleSign PhoneID API.
///
/// One async method per lookup product. Each call assembles the
/// required query parameters, merges any caller-supplied extras over
/// them (last-write-wins, see [`Params`]), and issues a single GET
/// through the shared [`RestClient`]. Nothing is validated locally:
/// phone numbers, ucids and extra parameters go to the server as given,
/// and the server's verdict comes back in the [`ApiResponse`].
///
/// The client holds no mutable state, so one instance can serve
/// concurrent lookups; it is also cheap to clone.
#[derive(Clone)]
pub struct PhoneIdClient {
    rest: RestClient,
}

impl PhoneIdClient {
    /// Creates a new `PhoneIdClient`.
    ///
    /// # Arguments
    ///
    /// * `config` - Credentials, endpoint, timeout and user agent; see
    ///   [`Config`] for the defaults.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    /// PhoneID Standard lookup: phone type and telecom carrier
    /// information, used to identify which numbers can receive SMS and
    /// to flag potential fraud risk.
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Phone number associated with the event.
    /// * `optional_params` - Extra query parameters, merged over the
    ///   required ones.
    pub async fn standard(
        &self,
        phone_number: &str,
        optional_params: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.set("phone_number", phone_number);
        if let Some(optional) = optional_params {
            params.extend(optional);
        }

        tracing::info!("PhoneID standard lookup for {}", phone_number);
        self.rest.execute(Method::GET, STANDARD_RESOURCE, &params).await
    }

    /// PhoneID Score lookup: a reputation score for the number, built
    /// from traffic patterns, machine learning and a global data
    /// consortium. `ucid` classifies the business transaction behind
    /// the request.
    pub async fn score(
        &self,
        phone_number: &str,
        ucid: &str,
        optional_params: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.set("phone_number", phone_number);
        params.set("ucid", ucid);
        if let Some(optional) = optional_params {
            params.extend(optional);
        }

        tracing::info!("PhoneID score lookup for {}", phone_number);
        self.rest.execute(Method::GET, SCORE_RESOURCE, &params).await
    }

    /// PhoneID Contact lookup: contact information tied to the
    /// subscriber's phone number, another indicator set for established
    /// risk engines.
    pub async fn contact(
        &self,
        phone_number: &str,
        ucid: &str,
        optional_params: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.set("phone_number", phone_number);
        params.set("ucid", ucid);
        if let Some(optional) = optional_params {
            params.extend(optional);
        }

        tracing::info!("PhoneID contact lookup for {}", phone_number);
        self.rest.execute(Method::GET, CONTACT_RESOURCE, &params).await
    }

    /// PhoneID Live lookup: whether the phone is active or
    /// disconnected, the device reachable or unreachable, and its
    /// roaming status.
    pub async fn live(
        &self,
        phone_number: &str,
        ucid: &str,
        optional_params: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.set("phone_number", phone_number);
        params.set("ucid", ucid);
        if let Some(optional) = optional_params {
            params.extend(optional);
        }

        tracing::info!("PhoneID live lookup for {}", phone_number);
        self.rest.execute(Method::GET, LIVE_RESOURCE, &params).await
    }

    /// PhoneID Number Deactivation lookup: whether and when the phone
    /// number was deactivated, from carrier phone number data and
    /// TeleSign's own analysis.
    pub async fn number_deactivation(
        &self,
        phone_number: &str,
        ucid: &str,
        optional_params: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.set("phone_number", phone_number);
        params.set("ucid", ucid);
        if let Some(optional) = optional_params {
            params.extend(optional);
        }

        tracing::info!("PhoneID number deactivation lookup for {}", phone_number);
        self.rest
            .execute(Method::GET, NUMBER_DEACTIVATION_RESOURCE, &params)
            .await
    }
}
