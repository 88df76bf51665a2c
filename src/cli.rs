use std::net::IpAddr;
use std::path::Path;

use meteorite_api::Config;

pub(crate) fn args() -> Args {
	<Args as clap::Parser>::parse()
}

/// Meteorite API
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
	/// Path to the configuration file
	///
	/// Defaults to `meteorite-api.toml` in the current directory, if it exists.
	#[arg(long = "config")]
	pub config_path: Option<Box<Path>>,

	/// The IP address the server should listen on
	#[arg(long = "ip")]
	pub ip_addr: Option<IpAddr>,

	/// The port the server should listen on
	#[arg(long)]
	pub port: Option<u16>,
}

impl Args {
	/// Overrides config values with the ones passed on the command line.
	pub(crate) fn apply_to_config(&self, config: &mut Config) {
		if let Some(ip_addr) = self.ip_addr {
			config.http.listen_on.set_ip(ip_addr);
		}

		if let Some(port) = self.port {
			config.http.listen_on.set_port(port);
		}
	}
}
