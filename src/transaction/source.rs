//! Defines where request handlers get their snapshot of transaction records from.

use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;

use crate::{
    Error,
    transaction::core::{TransactionRecord, get_all_records},
};

/// Supplies the full collection of transaction records.
///
/// Handlers call [RecordSource::get_all_records] once per request and do all
/// filtering in memory on the returned snapshot. Implementers must not
/// filter records on behalf of the caller.
pub trait RecordSource: Debug + Send + Sync {
    /// Fetch every transaction record.
    ///
    /// # Errors
    /// Returns an error if the underlying storage could not be read.
    fn get_all_records(&self) -> Result<Vec<TransactionRecord>, Error>;
}

/// Reads transaction records from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteRecordSource {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteRecordSource {
    /// Create a new record source for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl RecordSource for SQLiteRecordSource {
    /// Get every record in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the database lock is poisoned,
    /// - or [Error::SqlError] if there is an SQL error.
    fn get_all_records(&self) -> Result<Vec<TransactionRecord>, Error> {
        let connection = self
            .connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_all_records(&connection)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        db::initialize,
        transaction::{TransactionRecord, core::insert_record},
    };

    use super::{RecordSource, SQLiteRecordSource};

    #[test]
    fn returns_all_records_without_filtering() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        let want = vec![
            TransactionRecord::build(1, "Jacket", "2021-12-27").finalize(),
            TransactionRecord::build(2, "Laptop", "2022-03-27").finalize(),
        ];
        for record in &want {
            insert_record(record, &conn).unwrap();
        }
        let source = SQLiteRecordSource::new(Arc::new(Mutex::new(conn)));

        let got = source.get_all_records().expect("Could not get records");

        assert_eq!(want, got);
    }

    #[test]
    fn fails_when_table_is_missing() {
        let conn = Connection::open_in_memory().unwrap();
        let source = SQLiteRecordSource::new(Arc::new(Mutex::new(conn)));

        assert!(source.get_all_records().is_err());
    }
}
