//! Request checksum derivation.

// crates.io
use sha2::{Digest, Sha256};
// self
use crate::{_prelude::*, auth::AuthToken};

/// Request header that carries the checksum on protected calls.
pub const CHECKSUM_HEADER: &str = "X-Request-Checksum";

/// Lowercase hex SHA-256 digest of a token concatenated with a resource path.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Checksum(String);
impl Checksum {
	/// Derives the checksum that authorizes requests to `path` with `token`.
	pub fn derive(token: &AuthToken, path: &str) -> Self {
		Self(checksum(token.expose(), path))
	}

	/// Returns the hex digest.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Checksum {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Debug for Checksum {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Checksum({})", self.0)
	}
}
impl Display for Checksum {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Computes `lowercase_hex(SHA256(token || path))` with no separator.
pub fn checksum(token: &str, path: &str) -> String {
	let mut hasher = Sha256::new();

	hasher.update(token.as_bytes());
	hasher.update(path.as_bytes());

	format!("{:x}", hasher.finalize())
}
