use std::fmt;

use axum::extract::FromRequestParts;
use problem_details::AsProblemDetails;

use super::http::MeteoriteState;
use super::store::RecordStore;
use super::{Meteorite, NewMeteorite};
use crate::database::DatabaseError;
use crate::http::problem_details::Problem;

/// A store connection scoped to a single request.
///
/// This is an [extractor]: handlers that take a `Session` get a connection acquired before they
/// run. The connection is released when the session is dropped, which happens when the handler
/// returns, whichever way it returns.
///
/// [extractor]: axum::extract
pub struct Session<S: RecordStore> {
	store: S,
	conn: S::Connection,
}

/// Rejection for the [`Session`] extractor.
#[derive(Debug, Error)]
#[error("failed to acquire a store connection: {0}")]
pub struct AcquireRejection(#[from] DatabaseError);

impl<S: RecordStore> Session<S> {
	/// Acquires a connection from `store`.
	pub async fn acquire(store: &S) -> Result<Self, AcquireRejection> {
		let conn = store.acquire().await?;

		trace!("acquired store connection");

		Ok(Self { store: store.clone(), conn })
	}

	pub async fn fetch_all(&mut self) -> Result<Vec<Meteorite>, DatabaseError> {
		self.store.fetch_all(&mut self.conn).await
	}

	pub async fn fetch_limited(&mut self, limit: u64) -> Result<Vec<Meteorite>, DatabaseError> {
		self.store.fetch_limited(&mut self.conn, limit).await
	}

	pub async fn insert(&mut self, meteorite: &NewMeteorite) -> Result<Meteorite, DatabaseError> {
		self.store.insert(&mut self.conn, meteorite).await
	}
}

impl<S: RecordStore> fmt::Debug for Session<S> {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.debug_struct("Session").finish_non_exhaustive()
	}
}

impl<S: RecordStore> Drop for Session<S> {
	fn drop(&mut self) {
		trace!("releasing store connection");
	}
}

impl<S: RecordStore> FromRequestParts<MeteoriteState<S>> for Session<S> {
	type Rejection = AcquireRejection;

	async fn from_request_parts(
		_parts: &mut http::request::Parts,
		state: &MeteoriteState<S>,
	) -> Result<Self, Self::Rejection> {
		Self::acquire(&state.store).await
	}
}

impl AcquireRejection {
	pub fn into_database_error(self) -> DatabaseError {
		self.0
	}
}

impl AsProblemDetails for AcquireRejection {
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType {
		Problem::StoreUnavailable
	}
}

impl_into_response!(AcquireRejection);
