use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::ConnectInfo;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;
use tower_http::trace::{
	DefaultOnBodyChunk,
	DefaultOnEos,
	HttpMakeClassifier,
	MakeSpan,
	OnFailure,
	OnRequest,
	OnResponse,
	TraceLayer,
};
use tracing::field;

/// Creates a [`tower::Layer`], which produces a middleware that will emit tracing spans & events
/// for every HTTP request.
///
/// The `include_headers` parameter can be used to control whether request/response headers should
/// be included in the traces.
pub(crate) fn layer<B>(
	include_headers: bool,
) -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<B> + Clone,
	impl OnRequest<B> + Clone,
	impl OnResponse<B> + Clone,
	DefaultOnBodyChunk,
	DefaultOnEos,
	impl OnFailure<ServerErrorsFailureClass> + Clone,
> {
	let on_request = move |req: &http::Request<B>, span: &tracing::Span| {
		on_request(req, span, include_headers);
	};

	let on_response = move |res: &http::Response<B>, latency: Duration, span: &tracing::Span| {
		on_response(res, latency, span, include_headers);
	};

	TraceLayer::new_for_http()
		.make_span_with(make_span::<B>)
		.on_request(on_request)
		.on_response(on_response)
		.on_failure(on_failure)
}

/// Creates each request span.
///
/// The request ID is recorded even if headers are not. The client address is only known when the
/// router was turned into a service via `into_make_service_with_connect_info::<SocketAddr>()`.
fn make_span<B>(request: &http::Request<B>) -> tracing::Span {
	let request_id = request
		.extensions()
		.get::<RequestId>()
		.and_then(|request_id| request_id.header_value().to_str().ok());

	let client_addr = request
		.extensions()
		.get::<ConnectInfo<SocketAddr>>()
		.map(|&ConnectInfo(addr)| addr);

	let span = info_span! {
		target: "meteorite_api::http",
		"request",
		request.id = field::Empty,
		request.client_addr = field::Empty,
		request.method = field::Empty,
		request.uri = field::Empty,
		request.headers = field::Empty,
		response.status = field::Empty,
		response.headers = field::Empty,
		latency = field::Empty,
	};

	if let Some(request_id) = request_id {
		span.record("request.id", request_id);
	}

	if let Some(client_addr) = client_addr {
		span.record("request.client_addr", field::display(client_addr));
	}

	span
}

/// Records metadata about the request.
fn on_request<B>(request: &http::Request<B>, span: &tracing::Span, include_headers: bool) {
	span.record("request.method", field::display(request.method()));
	span.record("request.uri", field::display(request.uri()));

	if include_headers {
		span.record("request.headers", field::debug(request.headers()));
	}
}

/// Records metadata about the response.
fn on_response<B>(
	response: &http::Response<B>,
	latency: Duration,
	span: &tracing::Span,
	include_headers: bool,
) {
	span.record("response.status", field::display(response.status()));

	if include_headers {
		span.record("response.headers", field::debug(response.headers()));
	}

	span.record("latency", field::debug(latency));
}

/// Called whenever a request "failed".
fn on_failure(failure: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span) {
	match failure {
		ServerErrorsFailureClass::Error(error) => {
			error!(target: "meteorite_api::http", %error, ?latency, "error occurred during request");
		},
		ServerErrorsFailureClass::StatusCode(status) if status.is_server_error() => {
			error!(target: "meteorite_api::http", %status, ?latency, "server error");
		},
		ServerErrorsFailureClass::StatusCode(status) => {
			debug!(target: "meteorite_api::http", %status, ?latency, "request failed");
		},
	}
}
