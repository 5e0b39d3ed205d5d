#![cfg(feature = "reqwest")]

// std
use std::net::TcpListener;
// crates.io
use httpmock::prelude::*;
// self
use badsec_client::{
	ClientConfig, Error, ReqwestHttpClient,
	auth::checksum,
	error::{ConfigError, TransportError},
	flows::ReqwestBadsecClient,
};

#[test]
fn construction_derives_users_checksum() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path("/auth");
		then.status(200).header("Badsec-Authentication-Token", "JustAnotherMockToken");
	});
	let client = ReqwestBadsecClient::with_http_client(
		&server.base_url(),
		ReqwestHttpClient::default(),
	)
	.expect("Construction against a healthy endpoint should succeed.");

	assert_eq!(client.endpoint(), server.base_url());
	assert_eq!(client.checksum().as_str(), checksum("JustAnotherMockToken", "/users"));

	mock.assert();
}

#[test]
fn construction_fails_when_auth_stays_unavailable() {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET).path("/auth");
		then.status(503);
	});
	let err = ReqwestBadsecClient::with_http_client(
		&server.base_url(),
		ReqwestHttpClient::default(),
	)
	.expect_err("Construction must fail without a token.");

	match err {
		Error::Authentication { source } => assert!(matches!(
			*source,
			Error::InvalidResponse { path: "/auth", status: 503, attempts: 4 }
		)),
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_calls(4);
}

#[test]
fn construction_reports_refused_connection() {
	let listener =
		TcpListener::bind("127.0.0.1:0").expect("Failed to reserve a local port for the test.");
	let endpoint = format!(
		"http://{}",
		listener.local_addr().expect("Reserved listener should expose its address.")
	);

	drop(listener);

	let err = ReqwestBadsecClient::with_http_client(&endpoint, ReqwestHttpClient::default())
		.expect_err("Construction must fail when the endpoint is unreachable.");

	match err {
		Error::Authentication { source } =>
			assert!(matches!(*source, Error::Transport(TransportError::Network { .. }))),
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[test]
fn construction_rejects_invalid_endpoint_before_any_request() {
	let err = ReqwestBadsecClient::with_http_client("ftp://localhost:8888", ReqwestHttpClient::default())
		.expect_err("Non-HTTP endpoints must be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::UnsupportedScheme { .. })));
}

#[test]
fn config_budgets_drive_the_whole_exchange() {
	let server = MockServer::start();
	let auth = server.mock(|when, then| {
		when.method(GET).path("/auth");
		then.status(200).header("Badsec-Authentication-Token", "config-token");
	});
	let users = server.mock(|when, then| {
		when.method(GET).path("/users");
		then.status(500);
	});
	let config = ClientConfig::default()
		.with_endpoint(format!("{}/", server.base_url()))
		.with_auth_retries(0)
		.with_users_retries(1);
	let client = ReqwestBadsecClient::from_config(&config, ReqwestHttpClient::default())
		.expect("Construction from config should succeed.");

	assert_eq!(client.endpoint(), server.base_url(), "Trailing slashes should be trimmed.");

	let err = client
		.get_users(config.users_retries)
		.expect_err("A failing users endpoint must surface an error.");

	assert!(matches!(err, Error::InvalidResponse { path: "/users", status: 500, attempts: 2 }));

	auth.assert();
	users.assert_calls(2);
}
