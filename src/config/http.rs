use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// HTTP server configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HttpConfig {
	/// The address the HTTP server is supposed to listen on.
	pub listen_on: SocketAddr,

	/// The status code sent alongside an error envelope when creating a meteorite fails.
	pub create_failure_status: CreateFailureStatus,
}

/// Which status code accompanies a failed `POST /meteorites`.
///
/// The response body is the same either way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreateFailureStatus {
	/// `200 OK`; clients are expected to look at the `status` field.
	#[default]
	Ok,

	/// `500 Internal Server Error`.
	InternalServerError,
}

impl CreateFailureStatus {
	pub fn status_code(self) -> http::StatusCode {
		match self {
			Self::Ok => http::StatusCode::OK,
			Self::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			listen_on: SocketAddr::from((Ipv4Addr::LOCALHOST, 8000)),
			create_failure_status: CreateFailureStatus::default(),
		}
	}
}
