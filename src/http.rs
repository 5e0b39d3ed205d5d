//! Transport primitives for BADSEC API calls.
//!
//! The module exposes [`ApiHttpClient`] alongside the plain-data [`HttpRequest`] and
//! [`HttpResponse`] types so downstream crates can plug in any blocking HTTP stack.
//! Implementations only execute requests; status handling, retries, and header
//! interpretation stay inside the client flows.

// std
use std::io::Cursor;
// self
use crate::_prelude::*;

/// Abstraction over blocking HTTP transports capable of executing BADSEC requests.
///
/// The trait acts as the client's only dependency on an HTTP stack. A transport failure
/// (connection refused, DNS, TLS, timeout) must be reported through
/// [`ApiHttpClient::TransportError`]; any response that arrives, whatever its status,
/// must be returned as an [`HttpResponse`] so the caller can decide whether to retry.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Issues a `GET` for `request` and returns the response with an unread body.
	fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Self::TransportError>;
}

/// A `GET` request described as plain data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// Absolute URL including the resource path.
	pub url: String,
	/// Extra request headers, sent in order.
	pub headers: Vec<(String, String)>,
}
impl HttpRequest {
	/// Creates a request without extra headers.
	pub fn get(url: impl Into<String>) -> Self {
		Self { url: url.into(), headers: Vec::new() }
	}

	/// Appends a request header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}
}

/// An HTTP response whose body has not been consumed yet.
///
/// The body is owned by the response, so dropping the response releases the underlying
/// connection whether or not the body was read.
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers in wire order; value bytes that are not UTF-8 are replaced with U+FFFD.
	pub headers: Vec<(String, String)>,
	body: Box<dyn Read + Send>,
}
impl HttpResponse {
	/// Wraps a status, headers, and a streaming body.
	pub fn new(status: u16, headers: Vec<(String, String)>, body: impl 'static + Read + Send) -> Self {
		Self { status, headers, body: Box::new(body) }
	}

	/// Builds a response backed by an in-memory body.
	pub fn from_text(status: u16, headers: Vec<(String, String)>, body: impl Into<String>) -> Self {
		Self::new(status, headers, Cursor::new(body.into().into_bytes()))
	}

	/// Returns the first value of header `name`, compared case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Reads the remaining body into memory.
	pub fn read_body(&mut self) -> std::io::Result<Vec<u8>> {
		let mut buf = Vec::new();

		self.body.read_to_end(&mut buf)?;

		Ok(buf)
	}
}
impl Debug for HttpResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("HttpResponse")
			.field("status", &self.status)
			.field("headers", &self.headers)
			.finish_non_exhaustive()
	}
}

/// Thin wrapper around the blocking [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. The default client follows reqwest's own timeout and redirect policy.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing blocking reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client through reqwest's builder, surfacing TLS backend failures as errors.
	pub fn try_new() -> Result<Self> {
		let client = ReqwestClient::builder()
			.build()
			.map_err(crate::error::ConfigError::http_client_build)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Self::TransportError> {
		let mut builder = self.0.get(&request.url);

		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}

		let response = builder.send()?;
		let status = response.status().as_u16();
		let headers = response
			.headers()
			.iter()
			.map(|(name, value)| header_pair(name, value))
			.collect();

		Ok(HttpResponse::new(status, headers, response))
	}
}

/// Converts a header into owned text, decoding the value as lossy UTF-8.
#[cfg(feature = "reqwest")]
fn header_pair(
	name: &reqwest::header::HeaderName,
	value: &reqwest::header::HeaderValue,
) -> (String, String) {
	(name.as_str().to_owned(), String::from_utf8_lossy(value.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn header_lookup_ignores_case_and_keeps_first_value() {
		let response = HttpResponse::from_text(
			200,
			vec![
				("badsec-authentication-token".into(), "first".into()),
				("Badsec-Authentication-Token".into(), "second".into()),
			],
			"",
		);

		assert_eq!(response.header("Badsec-Authentication-Token"), Some("first"));
		assert_eq!(response.header("X-Request-Checksum"), None);
	}

	#[test]
	fn read_body_drains_in_memory_text() {
		let mut response = HttpResponse::from_text(200, Vec::new(), "a\nb");

		assert_eq!(response.read_body().expect("In-memory bodies must be readable."), b"a\nb");
		assert_eq!(format!("{response:?}"), "HttpResponse { status: 200, headers: [], .. }");
	}

	#[test]
	fn request_builder_appends_headers_in_order() {
		let request = HttpRequest::get("http://localhost:8888/users")
			.with_header("X-Request-Checksum", "abc")
			.with_header("Accept", "text/plain");

		assert_eq!(request.url, "http://localhost:8888/users");
		assert_eq!(
			request.headers,
			vec![
				("X-Request-Checksum".to_owned(), "abc".to_owned()),
				("Accept".to_owned(), "text/plain".to_owned()),
			]
		);
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn header_values_decode_as_lossy_utf8() {
		// crates.io
		use reqwest::header::{HeaderName, HeaderValue};

		let name = HeaderName::from_static("badsec-authentication-token");
		let utf8 = HeaderValue::from_bytes("tökén".as_bytes())
			.expect("UTF-8 bytes are valid obs-text.");
		let latin1 = HeaderValue::from_bytes(b"t\xf6k")
			.expect("Latin-1 bytes are valid obs-text.");

		assert_eq!(header_pair(&name, &utf8), (name.as_str().to_owned(), "tökén".to_owned()));
		assert_eq!(header_pair(&name, &latin1).1, "t\u{fffd}k");
	}
}
