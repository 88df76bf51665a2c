//! A middleware to catch panics and turn them into responses.
//!
//! See [`tower_http::catch_panic`] for more details.

use std::any::Any;
use std::borrow::Cow;

use axum::response::IntoResponse;
use problem_details::AsProblemDetails;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::problem_details::Problem;

/// Creates a [`tower::Layer`], which produces a middleware that will catch panics in its inner
/// service and turn them into HTTP responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicHandler> {
	CatchPanicLayer::custom(PanicHandler)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicHandler;

#[derive(Debug, Error)]
#[error("something went wrong; please report this incident")]
struct PanicRejection;

impl AsProblemDetails for PanicRejection {
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType {
		Problem::Internal
	}

	fn detail(&self) -> Cow<'static, str> {
		Cow::Borrowed("something went wrong; please report this incident")
	}
}

impl ResponseForPanic for PanicHandler {
	type ResponseBody = crate::http::Body;

	fn response_for_panic(
		&mut self,
		error: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody> {
		let panic_message = error
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| error.downcast_ref::<String>().map(String::as_str));

		error!(?panic_message, "http handler panicked");

		PanicRejection.as_problem_details().into_response()
	}
}

#[cfg(test)]
mod tests {
	use axum::Router;
	use axum::routing::get;
	use tower::ServiceExt;

	use super::*;
	use crate::testing;

	async fn boom() -> &'static str {
		panic!("the sky is falling")
	}

	#[tokio::test]
	async fn panics_become_internal_errors() -> testing::Result {
		let router = Router::new()
			.route("/", get(boom))
			.layer(layer());

		let response = router.oneshot(testing::get("/")).await?;

		testing::assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

		let body = testing::json_body(response).await?;

		testing::assert_eq!(body["type"], "/problems#internal");

		Ok(())
	}
}
