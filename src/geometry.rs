//! Point geometries and their text representation.
//!
//! Points are stored by PostGIS; everything here either renders the SQL that asks PostGIS to
//! build / format a geometry, or converts the resulting [WKT] text on our side.
//!
//! [WKT]: https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry

use wkt::{ToWkt, TryFromWkt};

/// The spatial reference system all points are stored in (WGS 84).
pub const SRID: i32 = 4326;

/// A 2D point in [`SRID`] coordinates; `x` is the longitude, `y` the latitude.
pub type Point = geo::Point<f64>;

/// Returned when WKT text does not describe a single 2D point.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("invalid point geometry `{wkt}`: {reason}")]
pub struct ParseWktError {
	wkt: Box<str>,
	reason: Box<str>,
}

/// Renders a point as WKT, e.g. `POINT(-64.95 50.77)`.
pub fn to_wkt(point: Point) -> String {
	point.wkt_string()
}

/// Parses WKT as returned by `ST_AsText()`.
pub fn from_wkt(wkt: &str) -> Result<Point, ParseWktError> {
	<Point as TryFromWkt<f64>>::try_from_wkt_str(wkt).map_err(|error| ParseWktError {
		wkt: wkt.into(),
		reason: error.to_string().into_boxed_str(),
	})
}

/// Checks whether two points are equal within `epsilon` on both axes.
pub fn approx_eq(left: Point, right: Point, epsilon: f64) -> bool {
	let delta = left - right;

	delta.x().abs() <= epsilon && delta.y().abs() <= epsilon
}

/// SQL fragments for PostGIS.
pub mod postgis {
	use super::{Point, SRID};
	use crate::database::QueryBuilder;

	/// Pushes `ST_SetSRID(ST_MakePoint($x, $y), 4326)` with both coordinates bound.
	pub fn push_make_point(query: &mut QueryBuilder<'_>, point: Point) {
		query.push("ST_SetSRID(ST_MakePoint(");
		query.push_bind(point.x());
		query.push(", ");
		query.push_bind(point.y());
		query.push(format_args!("), {SRID})"));
	}

	/// Wraps a (quoted) column in `ST_AsText()`.
	pub fn as_text(column: &str) -> String {
		format!("ST_AsText({column})")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_like_postgis() {
		assert_eq!(to_wkt(Point::new(-64.95, 50.77)), "POINT(-64.95 50.77)");
		assert_eq!(to_wkt(Point::new(6.08333, 50.775)), "POINT(6.08333 50.775)");
		assert_eq!(to_wkt(Point::new(10.0, -33.0)), "POINT(10 -33)");
	}

	#[test]
	fn parses_wkt() {
		assert_eq!(from_wkt("POINT(-64.95 50.77)"), Ok(Point::new(-64.95, 50.77)));
		assert_eq!(from_wkt("POINT (1.5 -2)"), Ok(Point::new(1.5, -2.0)));
		assert_eq!(from_wkt("POINT(0 0)"), Ok(Point::new(0.0, 0.0)));
	}

	#[test]
	fn rejects_garbage() {
		assert!(from_wkt("LINESTRING(0 0, 1 1)").is_err());
		assert!(from_wkt("POINT(1 2").is_err());
		assert!(from_wkt("POINT(north 2)").is_err());
		assert!(from_wkt("POINT EMPTY").is_err());
		assert!(from_wkt("").is_err());
	}

	#[test]
	fn round_trips() {
		let point = Point::new(-0.1, 51.123456789);

		assert!(approx_eq(from_wkt(&to_wkt(point)).unwrap(), point, f64::EPSILON));
	}

	#[test]
	fn approx_eq_respects_epsilon() {
		let point = Point::new(-105.31667, 26.96667);

		assert!(approx_eq(point, Point::new(-105.31667, 26.966670001), 1e-6));
		assert!(!approx_eq(point, Point::new(-105.3, 26.96667), 1e-6));
	}

	#[test]
	fn make_point_binds_longitude_first() {
		let mut query = crate::database::QueryBuilder::new("SELECT ");

		postgis::push_make_point(&mut query, Point::new(-64.95, 50.77));

		assert_eq!(query.sql(), "SELECT ST_SetSRID(ST_MakePoint($1, $2), 4326)");
	}
}
