//! Optional observability helpers for client requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `badsec_client.request` with the `request`
//!   (resource) and `stage` (call site) fields, plus a `warn` event for every retry.
//! - Enable `metrics` to increment the `badsec_client_request_total` counter for every state a
//!   request passes through, labeled by `request` + `state`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// API calls observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
	/// `GET /auth` token acquisition.
	AuthToken,
	/// `GET /users` protected resource fetch.
	Users,
}
impl RequestKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestKind::AuthToken => "auth_token",
			RequestKind::Users => "users",
		}
	}

	/// Returns the resource path requested for this kind.
	pub const fn path(self) -> &'static str {
		match self {
			RequestKind::AuthToken => "/auth",
			RequestKind::Users => "/users",
		}
	}
}
impl Display for RequestKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// States a request passes through while the retry loop runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestState {
	/// An attempt is in flight.
	Pending,
	/// A non-200 status arrived and budget remains; the next attempt follows immediately.
	Retrying,
	/// A 200 response was accepted.
	Success,
	/// A non-200 status arrived with no budget left.
	ExhaustedFailure,
	/// The transport failed; never retried.
	TransportFailure,
	/// A 200 response arrived but its token or body could not be used; never retried.
	Rejected,
}
impl RequestState {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestState::Pending => "pending",
			RequestState::Retrying => "retrying",
			RequestState::Success => "success",
			RequestState::ExhaustedFailure => "exhausted_failure",
			RequestState::TransportFailure => "transport_failure",
			RequestState::Rejected => "rejected",
		}
	}
}
impl Display for RequestState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn kinds_map_to_resource_paths() {
		assert_eq!(RequestKind::AuthToken.path(), "/auth");
		assert_eq!(RequestKind::Users.path(), "/users");
		assert_eq!(RequestKind::Users.to_string(), "users");
	}

	#[test]
	fn state_labels_are_stable() {
		assert_eq!(RequestState::ExhaustedFailure.to_string(), "exhausted_failure");
		assert_eq!(RequestState::TransportFailure.as_str(), "transport_failure");
		assert_eq!(RequestState::Rejected.as_str(), "rejected");
	}
}
