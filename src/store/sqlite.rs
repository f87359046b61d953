use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{ffi, params, Connection};

use crate::record::{ProductId, RecordId, SalesRecord};
use crate::store::{Store, StoreError};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS sales_data (
    id INTEGER NOT NULL UNIQUE,
    date TEXT NOT NULL,
    amount REAL NOT NULL,
    product_id INTEGER NOT NULL,
    region TEXT NOT NULL
)";

const INSERT: &str =
    "INSERT INTO sales_data (id, date, amount, product_id, region) VALUES (?1, ?2, ?3, ?4, ?5)";

/// A store persisting records in a SQLite database
///
/// Batches are written in a single transaction. Totals are plain float sums
/// computed in process over the rows in insertion order, not SQLite's `SUM`.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens the database at `path`, creating it and its table if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_owned(),
            source,
        })?;
        log::info!("opened sales database at {}", path.display());

        Self::with_connection(conn)
    }

    /// A database living only as long as the store
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(CREATE_TABLE, [])?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn insert_into(conn: &Connection, record: &SalesRecord) -> Result<(), StoreError> {
    let mut stmt = conn.prepare_cached(INSERT)?;
    stmt.execute(params![
        record.id.get(),
        record.date,
        record.amount,
        record.product_id.get(),
        record.region,
    ])
    .map_err(|err| match err {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            StoreError::Duplicate(record.id)
        }
        err => StoreError::Sqlite(err),
    })?;

    Ok(())
}

impl Store for SqliteStore {
    fn insert(&self, record: &SalesRecord) -> Result<(), StoreError> {
        insert_into(&self.conn.lock(), record)
    }

    fn insert_batch(&self, records: &[SalesRecord]) -> Result<(), StoreError> {
        let mut conn = self.conn.lock();
        // dropping the transaction without a commit rolls it back
        let tx = conn.transaction()?;
        for record in records {
            insert_into(&tx, record)?;
        }
        tx.commit()?;

        log::debug!("committed {} records", records.len());
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<SalesRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached("SELECT id, date, amount, product_id, region FROM sales_data ORDER BY rowid")?;
        let records = stmt
            .query_map([], |row| {
                Ok(SalesRecord {
                    id: RecordId::new(row.get(0)?),
                    date: row.get(1)?,
                    amount: row.get(2)?,
                    product_id: ProductId::new(row.get(3)?),
                    region: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

}
