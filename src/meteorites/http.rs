//! HTTP routes for meteorites.

use axum::{Router, routing};

use super::store::RecordStore;
use super::{create_meteorite, get_meteorites};
use crate::config::CreateFailureStatus;

/// State shared by all meteorite handlers.
#[derive(Debug, Clone)]
pub struct MeteoriteState<S> {
	pub(super) store: S,
	pub(super) create_failure_status: CreateFailureStatus,
}

/// Returns a router with the meteorite routes.
///
/// `/meteorites/all` is a static route and therefore takes precedence over `/meteorites/{limit}`.
pub fn router<S>(store: S, create_failure_status: CreateFailureStatus) -> Router
where
	S: RecordStore,
{
	let state = MeteoriteState { store, create_failure_status };

	Router::new()
		.route("/meteorites", routing::post(create_meteorite::create::<S>))
		.route("/meteorites/all", routing::get(get_meteorites::get_all::<S>))
		.route("/meteorites/{limit}", routing::get(get_meteorites::get_limited::<S>))
		.with_state(state)
}
