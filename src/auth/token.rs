//! Session token wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Response header that carries the session token on `/auth`.
pub const AUTH_TOKEN_HEADER: &str = "Badsec-Authentication-Token";

/// Redacted session token issued by the `/auth` endpoint.
///
/// The client consumes the token once to derive its [`Checksum`](crate::auth::Checksum)
/// and never keeps it afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);
impl AuthToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for AuthToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AuthToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AuthToken").field(&"<redacted>").finish()
	}
}
impl Display for AuthToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_formatters_redact() {
		let token = AuthToken::new("JustAnotherMockToken");

		assert_eq!(format!("{token:?}"), "AuthToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
		assert_eq!(token.expose(), "JustAnotherMockToken");
	}
}
