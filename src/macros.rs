/// Implements [`IntoResponse`] for an error type in terms of its [`AsProblemDetails`] impl.
///
/// [`IntoResponse`]: axum::response::IntoResponse
/// [`AsProblemDetails`]: problem_details::AsProblemDetails
macro_rules! impl_into_response {
	($ty:ty) => {
		impl ::axum::response::IntoResponse for $ty {
			fn into_response(self) -> ::axum::response::Response {
				::axum::response::IntoResponse::into_response(
					::problem_details::AsProblemDetails::as_problem_details(&self),
				)
			}
		}
	};
}
