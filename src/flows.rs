//! The BADSEC client and the request flows it serves.

pub mod auth_token;
pub mod common;
pub mod users;

pub use auth_token::*;
pub use users::*;

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	auth::Checksum,
	config::{self, ClientConfig, DEFAULT_AUTH_RETRIES},
	http::ApiHttpClient,
	obs::RequestKind,
};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestBadsecClient = BadsecClient<ReqwestHttpClient>;

/// Authenticated handle to a BADSEC API endpoint.
///
/// Construction performs the `/auth` handshake and derives the `/users` checksum once; the
/// token itself is dropped afterwards. The client never mutates after construction, so it
/// can serve any number of fetch calls.
pub struct BadsecClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	endpoint: String,
	checksum: Checksum,
}
impl<C> BadsecClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Authenticates against `endpoint` with the default token retry budget.
	pub fn with_http_client(endpoint: &str, http_client: impl Into<Arc<C>>) -> Result<Self> {
		Self::connect(endpoint, http_client, DEFAULT_AUTH_RETRIES)
	}

	/// Authenticates using the endpoint and token retry budget from `config`.
	pub fn from_config(config: &ClientConfig, http_client: impl Into<Arc<C>>) -> Result<Self> {
		Self::connect(&config.endpoint, http_client, config.auth_retries)
	}

	/// Validates `endpoint`, requests a session token with up to `auth_retries` extra
	/// attempts, and derives the `/users` checksum from it.
	///
	/// Token failures are wrapped in [`Error::Authentication`]; endpoint validation
	/// failures surface as [`Error::Config`].
	pub fn connect(
		endpoint: &str,
		http_client: impl Into<Arc<C>>,
		auth_retries: u32,
	) -> Result<Self> {
		let endpoint = config::normalize_endpoint(endpoint)?;
		let http_client = http_client.into();
		let token = fetch_auth_token(http_client.as_ref(), &endpoint, auth_retries)
			.map_err(Error::authentication)?;
		let checksum = Checksum::derive(&token, RequestKind::Users.path());

		Ok(Self { http_client, endpoint, checksum })
	}

	/// Builds a client around a checksum obtained earlier, skipping the handshake.
	pub fn with_checksum(
		endpoint: &str,
		http_client: impl Into<Arc<C>>,
		checksum: Checksum,
	) -> Result<Self> {
		let endpoint = config::normalize_endpoint(endpoint)?;

		Ok(Self { http_client: http_client.into(), endpoint, checksum })
	}

	/// Base URL every request is issued against.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Checksum attached to protected requests.
	pub fn checksum(&self) -> &Checksum {
		&self.checksum
	}
}
#[cfg(feature = "reqwest")]
impl BadsecClient<ReqwestHttpClient> {
	/// Authenticates against `endpoint` using a freshly built reqwest transport.
	pub fn new(endpoint: &str) -> Result<Self> {
		Self::with_http_client(endpoint, ReqwestHttpClient::try_new()?)
	}
}
impl<C> Debug for BadsecClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BadsecClient")
			.field("endpoint", &self.endpoint)
			.field("checksum", &self.checksum)
			.finish()
	}
}
