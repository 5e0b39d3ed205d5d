//! Shared retry loop for API requests.
//!
//! Only non-200 statuses consume the retry budget. A transport failure ends the loop at
//! once, and whatever a 200 response carries is judged by the calling flow without
//! further retries.

// self
use crate::{
	_prelude::*,
	error::TransportError,
	http::{ApiHttpClient, HttpRequest, HttpResponse},
	obs::{self, RequestKind, RequestState},
};

/// Status accepted as a successful answer.
pub const STATUS_OK: u16 = 200;

/// Returns the state a request moves to after receiving `status` with `remaining` retries.
pub fn next_state(status: u16, remaining: u32) -> RequestState {
	if status == STATUS_OK {
		RequestState::Success
	} else if remaining > 0 {
		RequestState::Retrying
	} else {
		RequestState::ExhaustedFailure
	}
}

/// Sends `request` until it receives a 200 response, issuing at most `1 + max_retries`
/// requests.
pub(crate) fn send_with_retry<C>(
	http_client: &C,
	kind: RequestKind,
	request: &HttpRequest,
	max_retries: u32,
) -> Result<HttpResponse>
where
	C: ?Sized + ApiHttpClient,
{
	let mut remaining = max_retries;
	let mut attempts = 0_u32;

	loop {
		attempts += 1;

		obs::record_request_state(kind, RequestState::Pending);

		let response = match http_client.execute(request) {
			Ok(response) => response,
			Err(err) => {
				obs::record_request_state(kind, RequestState::TransportFailure);

				return Err(TransportError::network(kind.path(), err).into());
			},
		};
		let status = response.status;

		match next_state(status, remaining) {
			RequestState::Success => return Ok(response),
			RequestState::Retrying => {
				// Release the rejected response before the next attempt.
				drop(response);

				remaining -= 1;

				obs::record_request_state(kind, RequestState::Retrying);
				obs::log_retry(kind, status, remaining);
			},
			RequestState::ExhaustedFailure => {
				obs::record_request_state(kind, RequestState::ExhaustedFailure);

				return Err(Error::InvalidResponse { path: kind.path(), status, attempts });
			},
			state @ (RequestState::Pending
			| RequestState::TransportFailure
			| RequestState::Rejected) => {
				unreachable!("`next_state` never yields `{state}` for a received status")
			},
		}
	}
}

/// Returns the state a finished flow still has to record.
///
/// Transport and exhausted-budget failures were already recorded by [`send_with_retry`], so
/// they yield `None`; any other failure comes from an unusable 200 response.
pub fn closing_state<T>(result: &Result<T>) -> Option<RequestState> {
	match result {
		Ok(_) => Some(RequestState::Success),
		Err(Error::Transport(_) | Error::InvalidResponse { .. }) => None,
		Err(_) => Some(RequestState::Rejected),
	}
}

/// Records the terminal state of a flow and logs its failure, if any.
pub(crate) fn finish<T>(kind: RequestKind, result: Result<T>) -> Result<T> {
	if let Some(state) = closing_state(&result) {
		obs::record_request_state(kind, state);
	}
	if let Err(err) = &result {
		obs::log_failure(kind, err);
	}

	result
}
