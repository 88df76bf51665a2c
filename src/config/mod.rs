//! Configuration for the service.
//!
//! The [`Config`] is usually read from a TOML file (see [`Config::load_from_file()`]), but every
//! section has sensible defaults, so an empty file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;

mod http;
pub use http::{CreateFailureStatus, HttpConfig};

mod database;
pub use database::{DatabaseConfig, DatabaseUrlError};

pub mod tracing;
pub use self::tracing::TracingConfig;

mod runtime;
pub use runtime::RuntimeConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
	pub http: HttpConfig,
	pub database: DatabaseConfig,
	pub tracing: TracingConfig,
	pub runtime: RuntimeConfig,
}

/// Errors returned by [`Config::load_from_file()`].
#[derive(Debug, Error)]
pub enum LoadConfigError {
	#[error("failed to read configuration file at {path:?}: {source}")]
	Read {
		path: PathBuf,

		#[source]
		source: io::Error,
	},

	#[error("failed to parse configuration file: {0}")]
	Parse(#[from] toml::de::Error),
}

impl Config {
	/// Reads and parses a TOML file at the given `path`.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadConfigError> {
		let path = path.as_ref();
		let file = fs::read_to_string(path)
			.map_err(|source| LoadConfigError::Read { path: path.to_owned(), source })?;

		toml::from_str(&file).map_err(Into::into)
	}
}
