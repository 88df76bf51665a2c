use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};

use tokio::sync::Mutex;

use crate::database::DatabaseError;
use crate::geometry;
use crate::meteorites::store::RecordStore;
use crate::meteorites::{Meteorite, MeteoriteId, NewMeteorite};

/// A [`RecordStore`] keeping records in memory.
///
/// Geometry is rendered the way PostGIS would, and failures can be switched on to exercise error
/// paths.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore {
	inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
	rows: Mutex<Vec<Meteorite>>,
	last_id: AtomicI32,
	unavailable: AtomicBool,
	failing_inserts: AtomicBool,
	acquisitions: AtomicUsize,
	open_connections: AtomicUsize,
}

/// A "connection" to a [`MemoryStore`].
#[derive(Debug)]
pub(crate) struct MemoryConnection {
	inner: Arc<Inner>,
}

impl MemoryStore {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Makes every future `acquire()` fail.
	pub(crate) fn set_unavailable(&self, unavailable: bool) {
		self.inner.unavailable.store(unavailable, Ordering::SeqCst);
	}

	/// Makes every future `insert()` fail without storing anything.
	pub(crate) fn set_failing_inserts(&self, failing: bool) {
		self.inner.failing_inserts.store(failing, Ordering::SeqCst);
	}

	/// How many connections have been acquired so far.
	pub(crate) fn acquisitions(&self) -> usize {
		self.inner.acquisitions.load(Ordering::SeqCst)
	}

	/// How many connections are currently checked out.
	pub(crate) fn open_connections(&self) -> usize {
		self.inner.open_connections.load(Ordering::SeqCst)
	}

	pub(crate) async fn len(&self) -> usize {
		self.inner.rows.lock().await.len()
	}

	/// Inserts records directly, bypassing failure switches.
	pub(crate) async fn seed(&self, meteorites: impl IntoIterator<Item = NewMeteorite>) {
		let mut rows = self.inner.rows.lock().await;

		for meteorite in meteorites {
			rows.push(self.inner.realize(&meteorite));
		}
	}

	/// Stores rows exactly as given, like an import that bypassed this service would.
	pub(crate) async fn seed_rows(&self, meteorites: impl IntoIterator<Item = Meteorite>) {
		let mut rows = self.inner.rows.lock().await;

		for meteorite in meteorites {
			self.inner.last_id.fetch_max(meteorite.id.get(), Ordering::SeqCst);
			rows.push(meteorite);
		}
	}
}

impl Inner {
	fn realize(&self, meteorite: &NewMeteorite) -> Meteorite {
		let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;

		Meteorite {
			id: MeteoriteId::new(id),
			name: Some(meteorite.name().to_owned()),
			classification: Some(meteorite.classification().to_owned()),
			year: meteorite.year().map(str::to_owned),
			mass: meteorite.mass().map(str::to_owned),
			latitude: Some(meteorite.latitude()),
			longitude: Some(meteorite.longitude()),
			geom: Some(geometry::to_wkt(meteorite.point())),
		}
	}
}

impl Drop for MemoryConnection {
	fn drop(&mut self) {
		self.inner.open_connections.fetch_sub(1, Ordering::SeqCst);
	}
}

impl RecordStore for MemoryStore {
	type Connection = MemoryConnection;

	async fn acquire(&self) -> Result<Self::Connection, DatabaseError> {
		self.inner.acquisitions.fetch_add(1, Ordering::SeqCst);

		if self.inner.unavailable.load(Ordering::SeqCst) {
			return Err(sqlx::Error::PoolTimedOut.into());
		}

		self.inner.open_connections.fetch_add(1, Ordering::SeqCst);

		Ok(MemoryConnection { inner: Arc::clone(&self.inner) })
	}

	async fn fetch_all(&self, conn: &mut Self::Connection) -> Result<Vec<Meteorite>, DatabaseError> {
		Ok(conn.inner.rows.lock().await.clone())
	}

	async fn fetch_limited(
		&self,
		conn: &mut Self::Connection,
		limit: u64,
	) -> Result<Vec<Meteorite>, DatabaseError> {
		let limit = usize::try_from(limit).unwrap_or(usize::MAX);
		let rows = conn.inner.rows.lock().await;

		Ok(rows.iter().take(limit).cloned().collect())
	}

	async fn insert(
		&self,
		conn: &mut Self::Connection,
		meteorite: &NewMeteorite,
	) -> Result<Meteorite, DatabaseError> {
		if conn.inner.failing_inserts.load(Ordering::SeqCst) {
			return Err(sqlx::Error::Protocol(String::from("connection reset by peer")).into());
		}

		let mut rows = conn.inner.rows.lock().await;
		let meteorite = conn.inner.realize(meteorite);

		rows.push(meteorite.clone());

		Ok(meteorite)
	}
}
