//! Reading meteorites.

use problem_details::AsProblemDetails;

use super::Meteorite;
use super::session::Session;
use super::store::RecordStore;
use crate::database::DatabaseError;
use crate::http::extract::{Json, Path};
use crate::http::problem_details::Problem;

pub(super) type Response = Json<Vec<Meteorite>>;

/// Errors that can occur when reading meteorites.
#[derive(Debug, Error)]
pub(super) enum Error {
	#[error("something went wrong; please report this incident")]
	Database(#[from] DatabaseError),
}

/// `GET /meteorites/all`
#[instrument(skip(session), err(Debug, level = "debug"))]
pub(super) async fn get_all<S: RecordStore>(mut session: Session<S>) -> Result<Response, Error> {
	let meteorites = session.fetch_all().await?;

	Ok(Json(meteorites))
}

/// `GET /meteorites/{limit}`
///
/// The path is parsed before a connection is acquired, so malformed limits never reach the store.
#[instrument(skip(session), err(Debug, level = "debug"))]
pub(super) async fn get_limited<S: RecordStore>(
	Path(limit): Path<u64>,
	mut session: Session<S>,
) -> Result<Response, Error> {
	let meteorites = session.fetch_limited(limit).await?;

	Ok(Json(meteorites))
}

impl AsProblemDetails for Error {
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType {
		match self {
			Self::Database(_) => Problem::Internal,
		}
	}
}

impl_into_response!(Error);
