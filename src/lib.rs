//! The Meteorite API.
//!
//! A small HTTP service for reading and recording meteorite landings stored in a PostGIS table.

/*
 * Meteorite API
 *
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use std::io;
use std::net::SocketAddr;

#[macro_use]
extern crate tracing as _;

#[macro_use]
extern crate thiserror as _;

#[cfg(test)]
mod testing;

#[macro_use]
mod macros;

mod logging;
mod signals;

pub mod config;
pub use config::Config;

pub mod database;
pub mod geometry;
pub mod http;
pub mod meteorites;
pub mod runtime;

use crate::meteorites::schema::{self, SchemaError};
use crate::meteorites::store::PgRecordStore;

/// Runs the HTTP server.
pub async fn run(config: Config) -> Result<(), RunError> {
	let tracing_guard = logging::init(&config.tracing).map_err(RunError::InitializeLogging)?;

	info!(?config, "starting up");

	let pool = database::ConnectionPool::new(&config.database).await?;

	if config.database.verify_schema {
		let mut conn = pool.get_connection().await?;
		schema::verify(&mut conn, &config.database.table).await?;
		info!(table = %config.database.table, "verified column mapping");
	}

	let store = PgRecordStore::new(pool.clone(), &config.database.table);
	let service = http::router(store, &config.http, &config.tracing)
		.into_make_service_with_connect_info::<SocketAddr>();

	let tcp_listener = tokio::net::TcpListener::bind(config.http.listen_on).await?;
	let addr = tcp_listener.local_addr()?;

	info!(%addr, "listening for http requests");

	axum::serve(tcp_listener, service)
		.with_graceful_shutdown(signals::shutdown())
		.await?;

	warn!("closing database connections");
	pool.close().await;

	drop(tracing_guard);

	Ok(())
}

/// Errors returned by [`run()`].
#[derive(Debug, Error)]
pub enum RunError {
	/// We failed to set up logging.
	#[error("failed to initialize logging: {0}")]
	InitializeLogging(#[source] io::Error),

	/// We failed to establish a database connection.
	#[error("failed to establish database connection: {0}")]
	EstablishDatabaseConnection(#[from] database::ConnectError),

	/// We failed to acquire a connection for the startup checks.
	#[error(transparent)]
	Database(#[from] database::DatabaseError),

	/// The live schema does not match the column mapping.
	#[error(transparent)]
	Schema(#[from] SchemaError),

	/// Some other I/O failure.
	#[error(transparent)]
	Io(#[from] io::Error),
}
