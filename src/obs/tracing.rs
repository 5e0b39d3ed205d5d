// self
use crate::{_prelude::*, obs::RequestKind};

/// A span builder used by client requests.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the provided request kind + stage.
	pub fn new(kind: RequestKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("badsec_client.request", request = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for the rest of the blocking call.
	pub fn entered(self) -> RequestSpanGuard {
		#[cfg(feature = "tracing")]
		{
			RequestSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			RequestSpanGuard {}
		}
	}
}

/// RAII guard returned by [`RequestSpan::entered`].
pub struct RequestSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for RequestSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("RequestSpanGuard(..)")
	}
}

/// Logs a retry triggered by a non-200 status.
pub fn log_retry(kind: RequestKind, status: u16, remaining: u32) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			request = kind.as_str(),
			status,
			remaining,
			"Retrying after invalid response from API."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, status, remaining);
	}
}

/// Logs the error that ends a request.
pub fn log_failure(kind: RequestKind, err: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(request = kind.as_str(), error = %err, "Request failed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, err);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_span_noop_without_subscriber() {
		let _guard = RequestSpan::new(RequestKind::AuthToken, "test").entered();

		log_retry(RequestKind::AuthToken, 503, 2);
		log_failure(RequestKind::Users, &Error::MissingAuthToken);
	}
}
