//! The mapping between [`Meteorite`] fields and the columns of the table they are stored in.
//!
//! Every SQL statement the [`PgRecordStore`] runs is generated from [`Field::ALL`], so this is the
//! only place that knows column names.
//!
//! [`Meteorite`]: super::Meteorite
//! [`PgRecordStore`]: super::store::PgRecordStore

use std::collections::HashMap;

use crate::database::{self, DatabaseError};
use crate::geometry::postgis;

/// A field of a meteorite record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Id,
	Name,
	Classification,
	Year,
	Mass,
	Latitude,
	Longitude,
	Geometry,
}

/// Errors returned by [`verify()`].
#[derive(Debug, Error)]
pub enum SchemaError {
	#[error("table `{table}` does not exist or has no visible columns")]
	MissingTable { table: Box<str> },

	#[error("table `{table}` is missing column(s) {}", fmt_columns(.columns))]
	MissingColumns {
		table: Box<str>,
		columns: Vec<&'static str>,
	},

	#[error("column `{column}` should be a PostGIS geometry, but is `{udt_name}`")]
	NotAGeometry { column: &'static str, udt_name: String },

	#[error(transparent)]
	Database(#[from] DatabaseError),
}

impl Field {
	/// Every field, in the order they appear in `SELECT` lists.
	pub const ALL: [Self; 8] = [
		Self::Id,
		Self::Name,
		Self::Classification,
		Self::Year,
		Self::Mass,
		Self::Latitude,
		Self::Longitude,
		Self::Geometry,
	];

	/// The fields a client supplies when creating a record.
	pub const WRITABLE: [Self; 7] = [
		Self::Name,
		Self::Classification,
		Self::Year,
		Self::Mass,
		Self::Latitude,
		Self::Longitude,
		Self::Geometry,
	];

	/// The name of the field on [`Meteorite`](super::Meteorite).
	pub const fn name(self) -> &'static str {
		match self {
			Self::Id => "id",
			Self::Name => "name",
			Self::Classification => "classification",
			Self::Year => "year",
			Self::Mass => "mass",
			Self::Latitude => "latitude",
			Self::Longitude => "longitude",
			Self::Geometry => "geom",
		}
	}

	/// The (unquoted) name of the column this field is stored in.
	pub const fn column(self) -> &'static str {
		match self {
			Self::Id => "ogc_fid",
			Self::Name => "name",
			Self::Classification => "recclass",
			Self::Year => "year",
			Self::Mass => "mass (g)",
			Self::Latitude => "reclat",
			Self::Longitude => "reclong",
			Self::Geometry => "geom",
		}
	}

	/// The inverse of [`Field::column()`].
	pub fn from_column(column: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|field| field.column() == column)
	}

	/// The expression used to read this field.
	///
	/// Everything is cast to the type [`Meteorite`](super::Meteorite) decodes, so `numeric` or
	/// `varchar` coordinate columns work just as well as `double precision` ones.
	fn select_expr(self) -> String {
		let column = quote_ident(self.column());

		match self {
			Self::Id => format!("{column}::integer"),
			Self::Name | Self::Classification | Self::Year | Self::Mass => {
				format!("{column}::text")
			},
			Self::Latitude | Self::Longitude => format!("{column}::double precision"),
			Self::Geometry => postgis::as_text(&column),
		}
	}
}

/// Quotes an SQL identifier, escaping embedded quotes.
///
/// Column names like `mass (g)` are not valid unquoted identifiers.
pub fn quote_ident(ident: &str) -> String {
	format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Returns `<expr> AS <field>, ...` for every field, suitable for `SELECT` / `RETURNING`.
pub(crate) fn select_list() -> String {
	Field::ALL
		.into_iter()
		.map(|field| format!("{} AS {}", field.select_expr(), field.name()))
		.collect::<Vec<_>>()
		.join(", ")
}

/// Returns the quoted column names of [`Field::WRITABLE`], comma separated.
pub(crate) fn insert_columns() -> String {
	Field::WRITABLE
		.into_iter()
		.map(|field| quote_ident(field.column()))
		.collect::<Vec<_>>()
		.join(", ")
}

/// Checks the columns reported by the database against the mapping.
///
/// `columns` maps column names to their `udt_name`.
pub fn check_columns(table: &str, columns: &HashMap<String, String>) -> Result<(), SchemaError> {
	if columns.is_empty() {
		return Err(SchemaError::MissingTable { table: table.into() });
	}

	let missing = Field::ALL
		.into_iter()
		.map(Field::column)
		.filter(|column| !columns.contains_key(*column))
		.collect::<Vec<_>>();

	if !missing.is_empty() {
		return Err(SchemaError::MissingColumns { table: table.into(), columns: missing });
	}

	let geometry = Field::Geometry.column();

	match columns.get(geometry).map(String::as_str) {
		Some("geometry") | None => Ok(()),
		Some(udt_name) => Err(SchemaError::NotAGeometry {
			column: geometry,
			udt_name: udt_name.to_owned(),
		}),
	}
}

/// Makes sure `table` has every column we are going to query.
#[instrument(skip(conn), err)]
pub async fn verify(conn: &mut database::Connection, table: &str) -> Result<(), SchemaError> {
	let columns = sqlx::query_as::<_, (String, String)>(
		"SELECT column_name::text, udt_name::text
		 FROM information_schema.columns
		 WHERE table_name = $1
		 AND table_schema = ANY(current_schemas(false))",
	)
	.bind(table)
	.fetch_all(&mut *conn)
	.await
	.map_err(DatabaseError::from)?
	.into_iter()
	.collect::<HashMap<_, _>>();

	debug!(?columns, "fetched columns");

	check_columns(table, &columns)
}

fn fmt_columns(columns: &[&str]) -> String {
	columns
		.iter()
		.map(|column| format!("`{column}`"))
		.collect::<Vec<_>>()
		.join(", ")
}
