//! Meteorite landing records.
//!
//! A [`Meteorite`] is a row in the configured table; a [`NewMeteorite`] is what clients send us
//! when they want to add one. The point geometry of a record is never supplied by clients, it is
//! always derived from `reclat` / `reclong` when the row is inserted.

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::geometry::{self, ParseWktError, Point};

pub mod schema;
pub mod store;

mod session;
pub use session::{AcquireRejection, Session};

mod get_meteorites;
mod create_meteorite;

pub mod http;

/// An ID uniquely identifying a meteorite.
///
/// IDs are assigned by the database on insertion.
#[derive(
	Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct MeteoriteId(i32);

impl MeteoriteId {
	pub const fn new(value: i32) -> Self {
		Self(value)
	}

	pub const fn get(self) -> i32 {
		self.0
	}
}

impl fmt::Debug for MeteoriteId {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.debug_tuple("MeteoriteId").field(&self.0).finish()
	}
}

/// A stored meteorite landing.
///
/// Field names are logical; the JSON keys match the column names clients know from the original
/// dataset (`recclass`, `mass (g)`, ...).
///
/// Rows created through this service always have every field except `year` and `mass` set, but
/// imported rows may lack any of them (e.g. landings with unknown coordinates). Missing values
/// are served as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Meteorite {
	pub id: MeteoriteId,
	pub name: Option<String>,

	/// The compositional class, e.g. `L5`.
	#[serde(rename = "recclass")]
	pub classification: Option<String>,

	pub year: Option<String>,

	/// Mass in grams.
	#[serde(rename = "mass (g)")]
	pub mass: Option<String>,

	#[serde(rename = "reclat")]
	pub latitude: Option<f64>,

	#[serde(rename = "reclong")]
	pub longitude: Option<f64>,

	/// The stored point geometry, as WKT.
	pub geom: Option<String>,
}

impl Meteorite {
	/// Parses [`Meteorite::geom`], if the row has one.
	pub fn point(&self) -> Result<Option<Point>, ParseWktError> {
		self.geom.as_deref().map(geometry::from_wkt).transpose()
	}
}

/// Request payload for adding a meteorite.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewMeteorite {
	name: String,

	#[serde(rename = "recclass")]
	classification: String,

	#[serde(default)]
	year: Option<String>,

	#[serde(default, alias = "mass (g)")]
	mass: Option<String>,

	#[serde(rename = "reclat")]
	latitude: f64,

	#[serde(rename = "reclong")]
	longitude: f64,
}

impl NewMeteorite {
	pub fn new(
		name: impl Into<String>,
		classification: impl Into<String>,
		latitude: f64,
		longitude: f64,
	) -> Self {
		Self {
			name: name.into(),
			classification: classification.into(),
			year: None,
			mass: None,
			latitude,
			longitude,
		}
	}

	#[must_use]
	pub fn with_year(mut self, year: impl Into<String>) -> Self {
		self.year = Some(year.into());
		self
	}

	#[must_use]
	pub fn with_mass(mut self, mass: impl Into<String>) -> Self {
		self.mass = Some(mass.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn classification(&self) -> &str {
		&self.classification
	}

	pub fn year(&self) -> Option<&str> {
		self.year.as_deref()
	}

	pub fn mass(&self) -> Option<&str> {
		self.mass.as_deref()
	}

	pub fn latitude(&self) -> f64 {
		self.latitude
	}

	pub fn longitude(&self) -> f64 {
		self.longitude
	}

	/// The point this meteorite will be stored at.
	pub fn point(&self) -> Point {
		Point::new(self.longitude, self.latitude)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn serializes_with_dataset_keys() {
		let meteorite = Meteorite {
			id: MeteoriteId::new(1),
			name: Some(String::from("Aachen")),
			classification: Some(String::from("L5")),
			year: Some(String::from("1880")),
			mass: None,
			latitude: Some(50.775),
			longitude: Some(6.08333),
			geom: Some(String::from("POINT(6.08333 50.775)")),
		};

		assert_eq!(serde_json::to_value(&meteorite).unwrap(), json!({
			"id": 1,
			"name": "Aachen",
			"recclass": "L5",
			"year": "1880",
			"mass (g)": null,
			"reclat": 50.775,
			"reclong": 6.08333,
			"geom": "POINT(6.08333 50.775)",
		}));

		assert_eq!(meteorite.point(), Ok(Some(Point::new(6.08333, 50.775))));
	}

	#[test]
	fn missing_values_serialize_as_null() {
		let meteorite = Meteorite {
			id: MeteoriteId::new(2),
			name: Some(String::from("Northwest Africa 859")),
			classification: Some(String::from("Iron, ungrouped")),
			year: None,
			mass: None,
			latitude: None,
			longitude: None,
			geom: None,
		};

		assert_eq!(serde_json::to_value(&meteorite).unwrap(), json!({
			"id": 2,
			"name": "Northwest Africa 859",
			"recclass": "Iron, ungrouped",
			"year": null,
			"mass (g)": null,
			"reclat": null,
			"reclong": null,
			"geom": null,
		}));

		assert_eq!(meteorite.point(), Ok(None));
	}

	#[test]
	fn deserializes_new_meteorite() {
		let new = serde_json::from_value::<NewMeteorite>(json!({
			"name": "Odessa",
			"recclass": "Iron, IIIAB",
			"year": "1922",
			"mass": "1000",
			"reclat": 50.77,
			"reclong": -64.95,
			"fell": "Found",
		}))
		.unwrap();

		assert_eq!(
			new,
			NewMeteorite::new("Odessa", "Iron, IIIAB", 50.77, -64.95)
				.with_year("1922")
				.with_mass("1000"),
		);
		assert_eq!(new.point(), Point::new(-64.95, 50.77));
	}

	#[test]
	fn accepts_column_name_for_mass() {
		let new = serde_json::from_value::<NewMeteorite>(json!({
			"name": "Gibeon",
			"recclass": "Iron, IVA",
			"mass (g)": "26000000",
			"reclat": -25.5,
			"reclong": 18.0,
		}))
		.unwrap();

		assert_eq!(new.mass(), Some("26000000"));
		assert_eq!(new.year(), None);
	}

	#[test]
	fn rejects_missing_and_mistyped_fields() {
		assert!(serde_json::from_value::<NewMeteorite>(json!({
			"recclass": "L5",
			"reclat": 0.0,
			"reclong": 0.0,
		}))
		.is_err());

		assert!(serde_json::from_value::<NewMeteorite>(json!({
			"name": "Aachen",
			"recclass": "L5",
			"reclat": "north",
			"reclong": 0.0,
		}))
		.is_err());

		assert!(serde_json::from_value::<NewMeteorite>(json!({
			"name": "Aachen",
			"recclass": "L5",
			"year": 1880,
			"reclat": 0.0,
			"reclong": 0.0,
		}))
		.is_err());
	}
}
