//! Meteorite API - read and record meteorite landings.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::path::Path;

use anyhow::Context;
use meteorite_api::Config;

mod cli;

/// Used when `--config` is not specified.
const DEFAULT_CONFIG_PATH: &str = "meteorite-api.toml";

fn main() -> anyhow::Result<()> {
	if dotenvy::dotenv().is_err() {
		// `.env` files missing is not necessarily an issue (e.g. when `DATABASE_URL` is set
		// directly), but we log it to stderr just in case.
		eprintln!("WARNING: no `.env` file found");
	}

	let args = cli::args();
	let mut config = match args.config_path.as_deref() {
		Some(path) => Config::load_from_file(path).context("load config")?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
			Config::load_from_file(DEFAULT_CONFIG_PATH).context("load config")?
		},
		None => Config::default(),
	};

	args.apply_to_config(&mut config);

	meteorite_api::runtime::build(&config.runtime)
		.context("build tokio runtime")?
		.block_on(meteorite_api::run(config))
		.context("run server")
}
