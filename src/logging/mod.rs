//! Wiring for [`tracing`] outputs.
//!
//! [`tracing`]: ::tracing

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TracingConfig;

mod files;
mod stderr;

/// Installs the global subscriber.
///
/// The returned guard flushes pending file output when dropped, so keep it alive until shutdown.
pub(crate) fn init(config: &TracingConfig) -> io::Result<Option<WorkerGuard>> {
	if !config.enable {
		return Ok(None);
	}

	let stderr = stderr::layer(&config.stderr);
	let (files, guard) = files::layer(&config.files)?.unzip();
	let layer = Layer::and_then(stderr, files).with_filter(config.env_filter());

	tracing_subscriber::registry()
		.with(layer)
		.try_init()
		.map_err(io::Error::other)?;

	info!("initialized tracing");

	Ok(guard)
}
