use std::error::Error;

use tokio::signal::ctrl_c;

/// Resolves once the OS asks us to shut down (SIGINT, or SIGTERM on unix).
pub(crate) async fn shutdown() {
	tokio::select! {
		ctrl_c_result = ctrl_c() => match ctrl_c_result {
			Ok(()) => debug!("received SIGINT"),
			Err(error) => {
				error!(error = &error as &dyn Error, "failed listening for SIGINT");
				std::future::pending::<()>().await;
			},
		},

		() = sigterm() => {},
	}

	info!("shutting down; waiting for in-flight requests");
}

#[cfg(unix)]
async fn sigterm() {
	use tokio::signal::unix::{SignalKind, signal};

	match signal(SignalKind::terminate()) {
		Ok(mut signal) => match signal.recv().await {
			Some(()) => debug!("received SIGTERM"),
			None => {
				warn!("cannot receive more SIGTERM signals");
				std::future::pending::<()>().await;
			},
		},
		Err(error) => {
			error!(error = &error as &dyn Error, "failed listening for SIGTERM");
			std::future::pending::<()>().await;
		},
	}
}

#[cfg(not(unix))]
async fn sigterm() {
	std::future::pending().await
}
