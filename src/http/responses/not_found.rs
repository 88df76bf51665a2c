use problem_details::AsProblemDetails;

use crate::http::problem_details::Problem;

/// The requested route does not exist.
#[derive(Debug, Clone, Copy, Error)]
#[error("there is nothing here")]
pub struct NotFound;

impl AsProblemDetails for NotFound {
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType {
		Problem::ResourceNotFound
	}
}
