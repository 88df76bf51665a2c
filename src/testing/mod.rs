//! Utilities for unit tests.

use http_body_util::BodyExt;

use crate::http::{Body, Request, Response};

mod macros;

pub(crate) use macros::{assert, assert_eq};

mod memory_store;
pub(crate) use memory_store::MemoryStore;

pub type Error = anyhow::Error;
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Builds a `GET` request for `uri`.
pub(crate) fn get(uri: &str) -> Request {
	Request::get(uri)
		.body(Body::empty())
		.unwrap_or_else(|error| panic!("invalid test request: {error}"))
}

/// Builds a `POST` request for `uri` with a JSON body.
pub(crate) fn post_json(uri: &str, body: &serde_json::Value) -> Request {
	Request::post(uri)
		.header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
		.body(Body::from(body.to_string()))
		.unwrap_or_else(|error| panic!("invalid test request: {error}"))
}

/// Buffers the response body and parses it as JSON.
pub(crate) async fn json_body(response: Response) -> Result<serde_json::Value> {
	let bytes = response.into_body().collect().await?.to_bytes();

	serde_json::from_slice(&bytes).map_err(Into::into)
}
