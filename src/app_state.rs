//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    pagination::PaginationConfig,
    transaction::{RecordSource, SQLiteRecordSource},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Where request handlers read their snapshot of transaction records from.
    pub record_source: Arc<dyn RecordSource>,

    /// The config that controls how to page the transaction listing.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] that reads records from a SQLite database.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, pagination_config: PaginationConfig) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::with_record_source(
            Arc::new(SQLiteRecordSource::new(connection)),
            pagination_config,
        ))
    }

    /// Create a new [AppState] that reads records from `record_source`.
    pub fn with_record_source(
        record_source: Arc<dyn RecordSource>,
        pagination_config: PaginationConfig,
    ) -> Self {
        Self {
            record_source,
            pagination_config,
        }
    }
}
