//! Protected `/users` fetch authorized by the session checksum.

// self
use crate::{
	_prelude::*,
	auth::CHECKSUM_HEADER,
	flows::{BadsecClient, common},
	http::{ApiHttpClient, HttpRequest},
	obs::{RequestKind, RequestSpan},
};

/// User identifiers returned by `/users`, one entry per body line.
///
/// Lines are kept verbatim: surrounding whitespace, empty lines, and a trailing empty entry
/// after a final newline all survive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserList(Vec<String>);
impl UserList {
	/// Splits a raw body on `'\n'` without trimming.
	pub fn from_body(body: &str) -> Self {
		Self(body.split('\n').map(str::to_owned).collect())
	}

	/// Returns the lines in body order.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Consumes the list and returns the lines.
	pub fn into_inner(self) -> Vec<String> {
		self.0
	}

	/// Serializes the list as a JSON array of strings.
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).map_err(Error::Encode)
	}
}

impl<C> BadsecClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches `/users` and returns the lines as a JSON array string.
	pub fn get_users(&self, max_retries: u32) -> Result<String> {
		self.fetch_users(max_retries)?.to_json()
	}

	/// Fetches `/users` with the stored checksum, retrying non-200 answers up to
	/// `max_retries` times.
	pub fn fetch_users(&self, max_retries: u32) -> Result<UserList> {
		const KIND: RequestKind = RequestKind::Users;

		let _span = RequestSpan::new(KIND, "fetch_users").entered();

		common::finish(KIND, self.request_users(max_retries))
	}

	fn request_users(&self, max_retries: u32) -> Result<UserList> {
		let kind = RequestKind::Users;
		let request = HttpRequest::get(format!("{}{}", self.endpoint(), kind.path()))
			.with_header(CHECKSUM_HEADER, self.checksum().as_str());
		let mut response =
			common::send_with_retry(self.http_client.as_ref(), kind, &request, max_retries)?;
		let body = response
			.read_body()
			.map_err(|source| Error::BodyRead { path: kind.path(), source })?;

		Ok(UserList::from_body(&String::from_utf8_lossy(&body)))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn lines_are_kept_verbatim() {
		let users = UserList::from_body("9757263792576857988\n\t7789651288773276582\n\t1628388650278268240");

		assert_eq!(
			users.to_json().expect("String lists always encode."),
			r#"["9757263792576857988","\t7789651288773276582","\t1628388650278268240"]"#
		);
	}

	#[test]
	fn empty_and_trailing_lines_survive() {
		assert_eq!(UserList::from_body("").as_slice(), [String::new()]);
		assert_eq!(
			UserList::from_body("a\n\nb\n").into_inner(),
			vec!["a".to_owned(), String::new(), "b".to_owned(), String::new()]
		);
	}

	#[test]
	fn carriage_returns_are_not_stripped() {
		let users = UserList::from_body("a\r\nb");

		assert_eq!(users.to_json().expect("String lists always encode."), r#"["a\r","b"]"#);
	}

	#[test]
	fn markup_and_line_separators_are_emitted_raw() {
		let users = UserList::from_body("<a>&b\nx\u{2028}y\u{2029}z");

		assert_eq!(
			users.to_json().expect("String lists always encode."),
			"[\"<a>&b\",\"x\u{2028}y\u{2029}z\"]"
		);
	}
}
