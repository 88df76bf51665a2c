//! Persistence for meteorite records.
//!
//! Handlers never talk to the database directly; they go through a [`RecordStore`] using a
//! connection acquired for the duration of the request (see [`Session`]).
//!
//! [`Session`]: super::Session

use std::future::Future;

use super::{Meteorite, NewMeteorite};
use crate::database::DatabaseError;

mod postgres;
pub use postgres::PgRecordStore;

/// A place meteorite records are stored in.
pub trait RecordStore: Clone + Send + Sync + 'static {
	/// A connection to the store, held for the duration of one request.
	///
	/// Dropping the connection releases it.
	type Connection: Send + 'static;

	/// Acquires a connection.
	fn acquire(&self) -> impl Future<Output = Result<Self::Connection, DatabaseError>> + Send;

	/// Returns every record, in storage order.
	fn fetch_all(
		&self,
		conn: &mut Self::Connection,
	) -> impl Future<Output = Result<Vec<Meteorite>, DatabaseError>> + Send;

	/// Returns at most `limit` records, in storage order.
	fn fetch_limited(
		&self,
		conn: &mut Self::Connection,
		limit: u64,
	) -> impl Future<Output = Result<Vec<Meteorite>, DatabaseError>> + Send;

	/// Inserts a new record and returns it as stored.
	///
	/// Either the whole record is persisted or nothing is.
	fn insert(
		&self,
		conn: &mut Self::Connection,
		meteorite: &NewMeteorite,
	) -> impl Future<Output = Result<Meteorite, DatabaseError>> + Send;
}
