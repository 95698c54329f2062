// src/store.rs
//
// SQLite contact store. Rows are unique by email; inserting a known email is
// ignored, not an error. A connection lives only for the duration of one call.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};

use crate::config::options::StoreOptions;
use crate::contact::{Record, StoredContact};
use crate::error::StoreError;

const CREATE_CONTACTS: &str = "
    CREATE TABLE IF NOT EXISTS contacts (
        id    INTEGER PRIMARY KEY AUTOINCREMENT,
        name  TEXT NOT NULL,
        title TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE
    )";

const INSERT_CONTACT: &str =
    "INSERT OR IGNORE INTO contacts (name, title, email) VALUES (?1, ?2, ?3)";

const SELECT_CONTACTS: &str =
    "SELECT id, name, title, email FROM contacts ORDER BY id ASC";

/// What one `persist` call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersistSummary {
    pub inserted: usize,
    /// Records whose email was already stored.
    pub skipped: usize,
}

pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(opts: &StoreOptions) -> Self {
        Self { path: opts.path().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> rusqlite::Result<Connection> {
        Connection::open(&self.path)
    }

    /// Create the contacts table if it isn't there yet. Safe on every start.
    pub fn initialize(&self) -> Result<(), StoreError> {
        let conn = self.open().map_err(StoreError::Init)?;
        conn.execute(CREATE_CONTACTS, []).map_err(StoreError::Init)?;
        logd!("Store: ready at {}", self.path.display());
        Ok(())
    }

    /// Insert the batch in one transaction, skipping emails already stored.
    /// On any failure nothing from this batch is kept.
    pub fn persist(&self, records: &[Record]) -> Result<PersistSummary, StoreError> {
        let mut conn = self.open().map_err(StoreError::Persist)?;
        let summary = insert_batch(&mut conn, records).map_err(StoreError::Persist)?;
        logf!(
            "Store: {} inserted, {} skipped → {}",
            summary.inserted, summary.skipped, self.path.display()
        );
        Ok(summary)
    }

    /// Every stored contact, oldest first.
    pub fn load_all(&self) -> Result<Vec<StoredContact>, StoreError> {
        let conn = self.open().map_err(StoreError::Read)?;
        conn.execute(CREATE_CONTACTS, []).map_err(StoreError::Read)?;
        let mut stmt = conn.prepare(SELECT_CONTACTS).map_err(StoreError::Read)?;
        let rows = stmt
            .query_map([], |row| {
                let name: String = row.get(1)?;
                let title: String = row.get(2)?;
                let email: String = row.get(3)?;
                Ok(StoredContact {
                    id: row.get(0)?,
                    record: Record::new(&name, &title, &email),
                })
            })
            .map_err(StoreError::Read)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::Read)?;
        Ok(rows)
    }
}

fn insert_batch(conn: &mut Connection, records: &[Record]) -> rusqlite::Result<PersistSummary> {
    let tx = conn.transaction()?;
    tx.execute(CREATE_CONTACTS, [])?;

    let mut summary = PersistSummary::default();
    {
        let mut stmt = tx.prepare(INSERT_CONTACT)?;
        for r in records {
            match stmt.execute(params![r.name(), r.title(), r.email()])? {
                0 => {
                    summary.skipped += 1;
                    logd!("Store: skip duplicate {}", r.email());
                }
                _ => summary.inserted += 1,
            }
        }
    }
    tx.commit()?;
    Ok(summary)
}
