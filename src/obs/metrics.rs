// self
use crate::obs::{RequestKind, RequestState};

/// Records a request state via the global metrics recorder (when enabled).
pub fn record_request_state(kind: RequestKind, state: RequestState) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"badsec_client_request_total",
			"request" => kind.as_str(),
			"state" => state.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, state);
	}
}
