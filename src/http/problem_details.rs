//! Our implementation of [`problem_details::ProblemType`].
//!
//! See the [`problem_details`] documentation for more details.

/// The various types of problems that could be referenced by a "problem details" error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
	BadRequest,
	InvalidPathParameters,
	MissingHeader,
	InvalidRequestBody,
	ResourceNotFound,
	StoreUnavailable,
	Internal,
}

impl problem_details::ProblemType for Problem {
	fn base_uri() -> http::Uri {
		http::Uri::from_static("/problems")
	}

	fn fragment(&self) -> &str {
		match self {
			Self::BadRequest => "bad-request",
			Self::InvalidPathParameters => "invalid-path-parameters",
			Self::MissingHeader => "missing-header",
			Self::InvalidRequestBody => "invalid-request-body",
			Self::ResourceNotFound => "resource-not-found",
			Self::StoreUnavailable => "store-unavailable",
			Self::Internal => "internal",
		}
	}

	fn status(&self) -> http::StatusCode {
		match self {
			Self::BadRequest | Self::InvalidPathParameters | Self::MissingHeader => {
				http::StatusCode::BAD_REQUEST
			},
			Self::InvalidRequestBody => http::StatusCode::UNPROCESSABLE_ENTITY,
			Self::ResourceNotFound => http::StatusCode::NOT_FOUND,
			Self::StoreUnavailable => http::StatusCode::SERVICE_UNAVAILABLE,
			Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn title(&self) -> &str {
		match self {
			Self::BadRequest => "bad request",
			Self::InvalidPathParameters => "invalid path parameter(s)",
			Self::MissingHeader => "missing header",
			Self::InvalidRequestBody => "invalid request body",
			Self::ResourceNotFound => "resource not found",
			Self::StoreUnavailable => "record store unavailable",
			Self::Internal => "internal server error",
		}
	}
}
