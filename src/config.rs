//! Client configuration: endpoint selection, retry budgets, and endpoint validation.

// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable that overrides the API endpoint.
pub const ENDPOINT_ENV: &str = "BADSEC_ENDPOINT";
/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8888";
/// Extra `/auth` attempts made while constructing a client.
pub const DEFAULT_AUTH_RETRIES: u32 = 3;
/// Extra `/users` attempts made by the command-line entry point.
pub const DEFAULT_USERS_RETRIES: u32 = 2;

/// Settings consumed by [`BadsecClient::from_config`](crate::flows::BadsecClient::from_config).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Base URL of the API, without a trailing slash.
	pub endpoint: String,
	/// Retry budget for token acquisition during construction.
	pub auth_retries: u32,
	/// Retry budget for the protected resource fetch.
	pub users_retries: u32,
}
impl ClientConfig {
	/// Loads the configuration from the process environment.
	///
	/// Only [`ENDPOINT_ENV`] is consulted; an unset or empty variable keeps the default
	/// endpoint.
	pub fn from_env() -> Self {
		Self::default().with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
	}

	/// Replaces the endpoint.
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();

		self
	}

	/// Replaces the endpoint when `endpoint` holds a non-empty value.
	pub fn with_endpoint_override(self, endpoint: Option<String>) -> Self {
		match endpoint {
			Some(value) if !value.is_empty() => self.with_endpoint(value),
			_ => self,
		}
	}

	/// Overrides the token acquisition retry budget.
	pub fn with_auth_retries(mut self, retries: u32) -> Self {
		self.auth_retries = retries;

		self
	}

	/// Overrides the resource fetch retry budget.
	pub fn with_users_retries(mut self, retries: u32) -> Self {
		self.users_retries = retries;

		self
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.into(),
			auth_retries: DEFAULT_AUTH_RETRIES,
			users_retries: DEFAULT_USERS_RETRIES,
		}
	}
}

/// Validates an endpoint and returns it without trailing slashes.
pub fn normalize_endpoint(endpoint: &str) -> Result<String, ConfigError> {
	let url = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
		endpoint: endpoint.to_owned(),
		source,
	})?;

	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::UnsupportedScheme { endpoint: endpoint.to_owned() });
	}

	Ok(endpoint.trim_end_matches('/').to_owned())
}
