//! The tokio runtime the service runs on.

use std::io;

use tokio::runtime::{Builder, Runtime};

use crate::config::RuntimeConfig;

/// Builds a multi-threaded runtime according to the given `config`.
pub fn build(config: &RuntimeConfig) -> io::Result<Runtime> {
	let mut builder = Builder::new_multi_thread();

	builder.enable_all();

	if let Some(count) = config.worker_threads {
		builder.worker_threads(count.get());
	}

	if let Some(count) = config.max_blocking_threads {
		builder.max_blocking_threads(count.get());
	}

	builder.build()
}
