//! TeleSign PhoneID API client library
//!
//! This library provides an async client for the TeleSign PhoneID REST
//! API: standard, score, contact, live and number-deactivation lookups
//! on a phone number. Each lookup assembles its query parameters and
//! dispatches one GET request; results come back as the raw JSON the
//! API returned, with no local validation or interpretation.
//!
//! # Modules
//!
//! - `config`: Client construction parameters and their defaults.
//! - `errors`: Error handling types.
//! - `params`: Query parameter set with last-write-wins merge.
//! - `phoneid`: The PhoneID lookup client.
//! - `rest`: REST transport shared by all lookups.
//!
//! # Example
//!
//! ```no_run
//! use telesign_phoneid::{Config, Params, PhoneIdClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PhoneIdClient::new(Config::new("customer_id", "api_key"))?;
//!
//!     // Carrier and phone-type data for a number.
//!     let response = client.standard("+15558675309", None).await?;
//!     println!("{}: {}", response.status, response.body);
//!
//!     // Reputation score, with an extra query parameter.
//!     let extras = Params::from([("originating_ip", "203.0.113.45")]);
//!     let response = client.score("+15558675309", "BACS", Some(&extras)).await?;
//!     println!("{}: {}", response.status, response.body);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod params;
pub mod phoneid;
pub mod rest;

pub use config::{Config, DEFAULT_REST_ENDPOINT, DEFAULT_TIMEOUT_MS};
pub use errors::{Error, Result};
pub use params::Params;
pub use phoneid::PhoneIdClient;
pub use rest::{ApiResponse, RestClient};
