//! Blocking client for the BADSEC API: fetch a session token, derive the request checksum,
//! and pull the protected user list with bounded, status-only retries.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		io::Read,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Error as ReqwestError, blocking::Client as ReqwestClient};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use auth::{AuthToken, Checksum};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use flows::BadsecClient;
#[cfg(feature = "reqwest")] pub use http::ReqwestHttpClient;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(feature = "cli")] use {color_eyre as _, tracing_subscriber as _};
#[cfg(test)] use {color_eyre as _, httpmock as _};
