//! HTTP plumbing shared by all routes.

use axum::{Router, routing};
use serde::Serialize;

use crate::config::{HttpConfig, TracingConfig};
use crate::meteorites::store::RecordStore;

pub mod extract;
pub mod problem_details;
pub use problem_details::Problem;

pub mod responses;

mod middleware;

pub type Body = axum::body::Body;
pub type Request<B = Body> = http::Request<B>;
pub type Response<B = Body> = http::Response<B>;

/// Returns the top-level router.
///
/// This is what we pass to [`axum::serve()`].
pub fn router<S>(store: S, http_config: &HttpConfig, tracing_config: &TracingConfig) -> Router
where
	S: RecordStore,
{
	Router::new()
		.route("/", routing::get(hello))
		.merge(crate::meteorites::http::router(store, http_config.create_failure_status))
		.fallback(not_found)
		.layer(middleware::catch_panic::layer())
		.layer(middleware::trace::layer::<Body>(tracing_config.include_http_headers))
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
}

#[derive(Debug, Serialize)]
struct Hello {
	message: &'static str,
}

/// Liveness check.
async fn hello() -> axum::Json<Hello> {
	axum::Json(Hello { message: "meteorite service is running" })
}

async fn not_found() -> responses::ErrorResponse {
	responses::ErrorResponse::from(responses::NotFound)
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use tower::ServiceExt;

	use super::*;
	use crate::testing::{self, MemoryStore};

	fn test_router() -> Router {
		router(MemoryStore::new(), &HttpConfig::default(), &TracingConfig::default())
	}

	#[tokio::test]
	async fn hello_world() -> testing::Result {
		let response = test_router().oneshot(testing::get("/")).await?;

		testing::assert_eq!(response.status(), http::StatusCode::OK);

		let body = testing::json_body(response).await?;

		testing::assert_eq!(body, json!({ "message": "meteorite service is running" }));

		Ok(())
	}

	#[tokio::test]
	async fn responses_carry_request_id() -> testing::Result {
		let response = test_router().oneshot(testing::get("/")).await?;
		let request_id = response
			.headers()
			.get("x-request-id")
			.map(|value| value.to_str())
			.transpose()?;

		testing::assert!(request_id.is_some_and(|id| uuid::Uuid::try_parse(id).is_ok()));

		Ok(())
	}

	#[tokio::test]
	async fn request_id_is_propagated() -> testing::Result {
		let mut request = testing::get("/");
		request
			.headers_mut()
			.insert("x-request-id", http::HeaderValue::from_static("meteor-shower"));

		let response = test_router().oneshot(request).await?;

		testing::assert_eq!(
			response.headers().get("x-request-id"),
			Some(&http::HeaderValue::from_static("meteor-shower")),
		);

		Ok(())
	}

	#[tokio::test]
	async fn unknown_route_is_problem_details() -> testing::Result {
		let response = test_router().oneshot(testing::get("/comets")).await?;

		testing::assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
		testing::assert_eq!(
			response.headers().get(http::header::CONTENT_TYPE),
			Some(&http::HeaderValue::from_static("application/problem+json")),
		);

		Ok(())
	}
}
