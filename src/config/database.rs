use std::num::NonZero;
use std::time::Duration;
use std::{env, fmt, thread};

use serde::{Deserialize, Deserializer};
use url::Url;

/// Database configuration.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DatabaseConfig {
	/// The URL of the PostgreSQL database.
	///
	/// Falls back to the `DATABASE_URL` environment variable.
	pub url: Option<Url>,

	/// The minimum number of pool connections to keep open.
	pub min_connections: u32,

	/// The maximum number of pool connections to open.
	///
	/// Defaults to the amount of available CPUs.
	#[serde(deserialize_with = "deserialize_non_zero_u32")]
	pub max_connections: NonZero<u32>,

	/// How long a request waits for a free connection before giving up (in seconds).
	#[serde(deserialize_with = "deserialize_duration")]
	pub acquire_timeout: Duration,

	/// The table holding the meteorite records.
	pub table: Box<str>,

	/// Check the table's columns against the column mapping on startup.
	pub verify_schema: bool,
}

/// Errors returned by [`DatabaseConfig::url()`].
#[derive(Debug, Error)]
pub enum DatabaseUrlError {
	#[error("no database URL configured; set `database.url` or `DATABASE_URL`")]
	Missing,

	#[error("`DATABASE_URL` is not a valid URL: {0}")]
	Invalid(#[from] url::ParseError),
}

impl DatabaseConfig {
	/// Returns the configured URL, or the value of `DATABASE_URL`.
	pub fn url(&self) -> Result<Url, DatabaseUrlError> {
		if let Some(url) = &self.url {
			return Ok(url.clone());
		}

		let url = env::var("DATABASE_URL").map_err(|_| DatabaseUrlError::Missing)?;

		Url::parse(&url).map_err(Into::into)
	}
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self {
			url: None,
			min_connections: 0,
			max_connections: default_max_connections(),
			acquire_timeout: Duration::from_secs(5),
			table: Box::from("meteorites"),
			verify_schema: true,
		}
	}
}

impl fmt::Debug for DatabaseConfig {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		let url = self.url.as_ref().map(|url| {
			let mut url = url.clone();

			if url.password().is_some() {
				let _ = url.set_password(Some("****"));
			}

			url
		});

		fmt.debug_struct("DatabaseConfig")
			.field("url", &url.as_ref().map(Url::as_str))
			.field("min_connections", &self.min_connections)
			.field("max_connections", &self.max_connections)
			.field("acquire_timeout", &self.acquire_timeout)
			.field("table", &self.table)
			.field("verify_schema", &self.verify_schema)
			.finish()
	}
}

fn default_max_connections() -> NonZero<u32> {
	thread::available_parallelism()
		.ok()
		.and_then(|n| u32::try_from(n.get()).ok())
		.and_then(NonZero::new)
		.unwrap_or(NonZero::<u32>::MIN)
}

fn deserialize_non_zero_u32<'de, D>(deserializer: D) -> Result<NonZero<u32>, D::Error>
where
	D: Deserializer<'de>,
{
	u32::deserialize(deserializer).map(|n| NonZero::new(n).unwrap_or_else(default_max_connections))
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	f64::deserialize(deserializer)
		.and_then(|secs| Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom))
}
