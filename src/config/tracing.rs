//! [`tracing`] related configuration.
//!
//! Every output can be enabled individually.
//!
//! [`tracing`]: ::tracing

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, de};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

/// Tracing configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig {
	/// Initialize a tracing subscriber.
	pub enable: bool,

	/// Record request headers on HTTP spans.
	pub include_http_headers: bool,

	/// Filter directives that apply to all outputs, in addition to `RUST_LOG`.
	pub filter: Vec<Filter>,

	/// Configuration for the layer emitting to stderr.
	pub stderr: StderrConfig,

	/// Configuration for the layer emitting to files.
	pub files: FilesConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct StderrConfig {
	/// Emit traces to stderr.
	pub enable: bool,

	/// Emit ANSI escape codes for colors and other formatting.
	pub ansi: bool,
}

/// Tracing configuration for emitting JSON logs to daily rotated files.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilesConfig {
	/// Emit traces to files.
	pub enable: bool,

	/// Directory to store log files in.
	pub directory: Box<Path>,
}

/// A filter directive.
#[derive(Debug)]
pub struct Filter(pub Directive);

impl TracingConfig {
	/// Constructs an [`EnvFilter`] from `RUST_LOG` and the directives specified in the config.
	pub fn env_filter(&self) -> EnvFilter {
		let filter = EnvFilter::builder()
			.with_default_directive(LevelFilter::INFO.into())
			.from_env_lossy();

		self.filter
			.iter()
			.map(|Filter(directive)| directive.clone())
			.fold(filter, EnvFilter::add_directive)
	}
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			enable: true,
			include_http_headers: false,
			filter: Vec::new(),
			stderr: StderrConfig::default(),
			files: FilesConfig::default(),
		}
	}
}

impl Default for StderrConfig {
	fn default() -> Self {
		Self { enable: true, ansi: true }
	}
}

impl Default for FilesConfig {
	fn default() -> Self {
		Self { enable: false, directory: PathBuf::from("logs").into_boxed_path() }
	}
}

impl<'de> Deserialize<'de> for Filter {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer)?
			.parse()
			.map(Self)
			.map_err(de::Error::custom)
	}
}
