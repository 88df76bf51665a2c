//! The [`Path`] [extractor] and related types.
//!
//! [extractor]: axum::extract

use axum::extract::FromRequestParts;
use problem_details::AsProblemDetails;

use crate::http::problem_details::Problem;

mod base {
	pub use axum::extract::Path as Extractor;
	pub use axum::extract::path::ErrorKind;
	pub use axum::extract::rejection::PathRejection as Rejection;
}

/// An extractor for URI path parameters.
///
/// See [`axum::extract::Path`] for more details.
#[derive(Debug, FromRequestParts)]
#[from_request(via(base::Extractor), rejection(PathRejection))]
pub struct Path<T>(pub T);

/// Rejection for the [`Path`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct PathRejection(#[from] base::Rejection);

impl AsProblemDetails for PathRejection {
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType {
		use base::Rejection as R;

		match self.0 {
			R::FailedToDeserializePathParams(_) => Problem::InvalidPathParameters,
			R::MissingPathParams(_) => Problem::Internal,
			_ => Problem::BadRequest,
		}
	}

	/// Reports the segment that failed to parse as `value`.
	fn add_extension_members(&self, extension_members: &mut problem_details::ExtensionMembers) {
		use base::ErrorKind as E;

		let base::Rejection::FailedToDeserializePathParams(ref error) = self.0 else {
			return;
		};

		if let E::ParseErrorAtKey { value, .. } | E::ParseError { value, .. } = error.kind() {
			_ = extension_members.add("value", value);
		}
	}
}

impl_into_response!(PathRejection);
