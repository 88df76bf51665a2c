//! Database plumbing shared by everything that talks to PostgreSQL.

mod error;
pub use error::DatabaseError;

mod pool;
pub use pool::{ConnectError, ConnectionPool};

/// The database driver we use.
pub type Driver = sqlx::Postgres;

/// A raw database connection.
pub type Connection = <Driver as sqlx::Database>::Connection;

/// A connection checked out of a [`ConnectionPool`].
///
/// The connection is returned to the pool when this value is dropped.
pub type PoolConnection = sqlx::pool::PoolConnection<Driver>;

pub type QueryBuilder<'args> = sqlx::QueryBuilder<'args, Driver>;

pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;
