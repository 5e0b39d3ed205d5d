//! Command-line entry point: authenticate against `BADSEC_ENDPOINT` and print the user list as
//! a JSON array on stdout.

// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use badsec_client::{ClientConfig, ReqwestHttpClient, flows::ReqwestBadsecClient};

fn main() -> Result<()> {
	color_eyre::install()?;
	init_tracing();

	let config = ClientConfig::from_env();
	let client = ReqwestBadsecClient::from_config(&config, ReqwestHttpClient::try_new()?)?;
	let users = client.get_users(config.users_retries)?;

	println!("{users}");

	Ok(())
}

/// Logs to stderr so stdout carries nothing but the JSON array.
fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn,badsec_client=info"));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.init();
}
