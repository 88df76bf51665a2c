use std::fmt;

use sqlx::pool::PoolOptions;

use crate::config::{DatabaseConfig, DatabaseUrlError};
use crate::database::{self, DatabaseError, PoolConnection};

/// A pool of database connections.
#[derive(Clone)]
pub struct ConnectionPool(sqlx::Pool<database::Driver>);

/// Errors that can occur when opening a [`ConnectionPool`].
#[derive(Debug, Error)]
pub enum ConnectError {
	#[error(transparent)]
	MissingUrl(#[from] DatabaseUrlError),

	#[error(transparent)]
	Database(#[from] DatabaseError),
}

impl ConnectionPool {
	/// Initializes a new pool by connecting to the configured database.
	///
	/// `min_connections` connections will be opened (and kept around) immediately.
	/// The pool will never open more than `max_connections`.
	#[instrument(err)]
	pub async fn new(config: &DatabaseConfig) -> Result<Self, ConnectError> {
		let url = config.url()?;
		let pool = PoolOptions::new()
			.min_connections(config.min_connections)
			.max_connections(config.max_connections.get())
			.acquire_timeout(config.acquire_timeout)
			.connect(url.as_str())
			.await
			.map_err(DatabaseError::from)?;

		Ok(Self(pool))
	}

	/// Gets a connection from the pool.
	///
	/// The returned [`PoolConnection`] will be returned to the pool automatically on drop.
	#[instrument(level = "trace", skip_all, err)]
	pub async fn get_connection(&self) -> database::Result<PoolConnection> {
		self.0.acquire().await.map_err(Into::into)
	}

	/// Closes every connection in the pool, waiting for checked out ones to be returned.
	pub async fn close(&self) {
		self.0.close().await;
	}
}

impl fmt::Debug for ConnectionPool {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.debug_struct("ConnectionPool")
			.field("size", &self.0.size())
			.field("idle", &self.0.num_idle())
			.finish()
	}
}
