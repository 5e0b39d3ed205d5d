//! Token acquisition against the unauthenticated `/auth` endpoint.
//!
//! A 200 response is final: when it lacks the token header (or carries an empty value)
//! the flow fails with [`Error::MissingAuthToken`] instead of spending the retry budget.

// self
use crate::{
	_prelude::*,
	auth::{AUTH_TOKEN_HEADER, AuthToken},
	flows::{BadsecClient, common},
	http::{ApiHttpClient, HttpRequest},
	obs::{RequestKind, RequestSpan},
};

/// Requests a session token from `{endpoint}/auth`, retrying non-200 answers up to
/// `max_retries` times.
pub fn fetch_auth_token<C>(http_client: &C, endpoint: &str, max_retries: u32) -> Result<AuthToken>
where
	C: ?Sized + ApiHttpClient,
{
	const KIND: RequestKind = RequestKind::AuthToken;

	let _span = RequestSpan::new(KIND, "fetch_auth_token").entered();

	common::finish(KIND, request_auth_token(http_client, endpoint, max_retries))
}

fn request_auth_token<C>(http_client: &C, endpoint: &str, max_retries: u32) -> Result<AuthToken>
where
	C: ?Sized + ApiHttpClient,
{
	let kind = RequestKind::AuthToken;
	let request = HttpRequest::get(format!("{endpoint}{}", kind.path()));
	let response = common::send_with_retry(http_client, kind, &request, max_retries)?;

	match response.header(AUTH_TOKEN_HEADER) {
		Some(value) if !value.is_empty() => Ok(AuthToken::new(value)),
		_ => Err(Error::MissingAuthToken),
	}
}

impl<C> BadsecClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Requests a fresh session token from this client's endpoint.
	///
	/// The stored checksum is left untouched; the token is handed to the caller.
	pub fn get_auth_token(&self, max_retries: u32) -> Result<AuthToken> {
		fetch_auth_token(self.http_client.as_ref(), self.endpoint(), max_retries)
	}
}
