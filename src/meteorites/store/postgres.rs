use std::sync::Arc;

use sqlx::Connection;

use super::RecordStore;
use crate::database::{ConnectionPool, DatabaseError, PoolConnection, QueryBuilder};
use crate::geometry::postgis;
use crate::meteorites::schema::{self, Field, quote_ident};
use crate::meteorites::{Meteorite, NewMeteorite};

/// A [`RecordStore`] backed by a PostGIS table.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
	pool: ConnectionPool,
	queries: Arc<Queries>,
}

/// SQL that only depends on the table name.
#[derive(Debug)]
struct Queries {
	select_all: String,
	select_limited: String,
	insert_prefix: String,
	returning: String,
}

impl PgRecordStore {
	/// Creates a store reading from / writing to `table`.
	pub fn new(pool: ConnectionPool, table: &str) -> Self {
		let table = quote_ident(table);
		let select_list = schema::select_list();
		let id = quote_ident(Field::Id.column());
		let select_all = format!("SELECT {select_list} FROM {table} ORDER BY {id}");
		let select_limited = format!("{select_all} LIMIT $1");
		let insert_prefix = format!("INSERT INTO {table} ({}) VALUES (", schema::insert_columns());
		let returning = format!(") RETURNING {select_list}");

		Self {
			pool,
			queries: Arc::new(Queries { select_all, select_limited, insert_prefix, returning }),
		}
	}
}

impl RecordStore for PgRecordStore {
	type Connection = PoolConnection;

	async fn acquire(&self) -> Result<Self::Connection, DatabaseError> {
		self.pool.get_connection().await
	}

	#[instrument(level = "debug", skip(self, conn), err(level = "debug"))]
	async fn fetch_all(&self, conn: &mut Self::Connection) -> Result<Vec<Meteorite>, DatabaseError> {
		let meteorites = sqlx::query_as::<_, Meteorite>(&self.queries.select_all)
			.fetch_all(&mut **conn)
			.await?;

		debug!(count = meteorites.len(), "fetched meteorites");

		Ok(meteorites)
	}

	#[instrument(level = "debug", skip(self, conn), err(level = "debug"))]
	async fn fetch_limited(
		&self,
		conn: &mut Self::Connection,
		limit: u64,
	) -> Result<Vec<Meteorite>, DatabaseError> {
		let limit = i64::try_from(limit).unwrap_or(i64::MAX);
		let meteorites = sqlx::query_as::<_, Meteorite>(&self.queries.select_limited)
			.bind(limit)
			.fetch_all(&mut **conn)
			.await?;

		debug!(count = meteorites.len(), "fetched meteorites");

		Ok(meteorites)
	}

	#[instrument(
		level = "debug",
		skip(self, conn, meteorite),
		fields(name = meteorite.name()),
		err(level = "debug"),
	)]
	async fn insert(
		&self,
		conn: &mut Self::Connection,
		meteorite: &NewMeteorite,
	) -> Result<Meteorite, DatabaseError> {
		let mut query = QueryBuilder::new(&self.queries.insert_prefix);
		let mut values = query.separated(", ");

		values.push_bind(meteorite.name().to_owned());
		values.push_bind(meteorite.classification().to_owned());
		values.push_bind(meteorite.year().map(str::to_owned));
		values.push_bind(meteorite.mass().map(str::to_owned));
		values.push_bind(meteorite.latitude());
		values.push_bind(meteorite.longitude());
		values.push_unseparated(", ");

		postgis::push_make_point(&mut query, meteorite.point());
		query.push(&self.queries.returning);

		let mut txn = conn.begin().await?;
		let meteorite = query.build_query_as::<Meteorite>().fetch_one(&mut *txn).await?;

		txn.commit().await?;

		info!(id = %meteorite.id, "created meteorite");

		Ok(meteorite)
	}
}
