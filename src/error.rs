//! Client-level error types shared across the handshake and resource flows.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS). Never retried.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The API kept answering with a non-200 status until the retry budget ran out.
	#[error("Invalid response from API: `{path}` returned HTTP {status} after {attempts} attempt(s).")]
	InvalidResponse {
		/// Resource path that was requested.
		path: &'static str,
		/// Status code of the final attempt.
		status: u16,
		/// Number of requests issued, including the first one.
		attempts: u32,
	},
	/// The auth endpoint answered 200 without a usable token header.
	#[error("No BADSEC auth in response.")]
	MissingAuthToken,
	/// The body of a successful response could not be read.
	#[error("Failed to read the `{path}` response body.")]
	BodyRead {
		/// Resource path that was requested.
		path: &'static str,
		/// Underlying read failure.
		#[source]
		source: std::io::Error,
	},
	/// The resource list could not be encoded as JSON.
	#[error("Failed to encode the resource list as JSON.")]
	Encode(#[source] serde_json::Error),
	/// The client could not obtain the token it needs to derive its checksum.
	#[error("Failed to obtain a BADSEC authentication token.")]
	Authentication {
		/// Failure raised by the token request.
		#[source]
		source: Box<Error>,
	},
}
impl Error {
	/// Wraps a token acquisition failure raised while constructing a client.
	pub fn authentication(source: Error) -> Self {
		Self::Authentication { source: Box::new(source) }
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint cannot be parsed as a URL.
	#[error("Endpoint `{endpoint}` is not a valid URL.")]
	InvalidEndpoint {
		/// Raw endpoint string supplied by the caller.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint uses a scheme other than http or https.
	#[error("Endpoint `{endpoint}` must use http or https.")]
	UnsupportedScheme {
		/// Raw endpoint string supplied by the caller.
		endpoint: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling `{path}`.")]
	Network {
		/// Resource path that was requested.
		path: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error raised for `path`.
	pub fn network(path: &'static str, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { path, source: Box::new(src) }
	}
}
