use std::num::NonZero;

use serde::{Deserialize, Deserializer};

/// Tokio configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct RuntimeConfig {
	/// The amount of worker threads to spawn.
	///
	/// If this value is omitted or 0, tokio will choose the amount.
	#[serde(deserialize_with = "deserialize_threads")]
	pub worker_threads: Option<NonZero<usize>>,

	/// The maximum amount of threads to spawn in the blocking thread pool.
	///
	/// If this value is omitted or 0, tokio will choose the amount.
	#[serde(deserialize_with = "deserialize_threads")]
	pub max_blocking_threads: Option<NonZero<usize>>,
}

fn deserialize_threads<'de, D>(deserializer: D) -> Result<Option<NonZero<usize>>, D::Error>
where
	D: Deserializer<'de>,
{
	usize::deserialize(deserializer).map(NonZero::new)
}
