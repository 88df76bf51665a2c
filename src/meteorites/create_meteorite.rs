//! Adding meteorites.
//!
//! Unlike the read endpoints, this one reports store failures in its regular response body
//! ([`Envelope`]) instead of problem details. Malformed payloads are still rejected by the
//! [`Json`] extractor.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::http::MeteoriteState;
use super::session::Session;
use super::store::RecordStore;
use super::{MeteoriteId, NewMeteorite};
use crate::database::DatabaseError;
use crate::http::extract::Json;

/// The response body of `POST /meteorites`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Envelope {
	pub status: Status,
	pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
	Success,
	Error,
}

impl Envelope {
	pub fn created(name: &str, id: MeteoriteId) -> Self {
		Self {
			status: Status::Success,
			message: format!("meteorite {name} added successfully (ID: {id})."),
		}
	}

	pub fn failed(error: &DatabaseError) -> Self {
		Self {
			status: Status::Error,
			message: format!("failed to add meteorite: {error}"),
		}
	}
}

/// `POST /meteorites`
///
/// The payload is validated before a connection is acquired. Acquiring the connection and
/// inserting the row are attempted exactly once.
#[instrument(skip_all, fields(name = meteorite.name()))]
pub(super) async fn create<S: RecordStore>(
	State(state): State<MeteoriteState<S>>,
	Json(meteorite): Json<NewMeteorite>,
) -> Response {
	let result = match Session::acquire(&state.store).await {
		Ok(mut session) => session.insert(&meteorite).await,
		Err(rejection) => Err(rejection.into_database_error()),
	};

	match result {
		Ok(created) => Json(Envelope::created(meteorite.name(), created.id)).into_response(),
		Err(error) => {
			error!(%error, "failed to create meteorite");

			let status = state.create_failure_status.status_code();

			(status, Json(Envelope::failed(&error))).into_response()
		},
	}
}
