#![allow(missing_docs)]

use crate::{Error, transaction::RecordSource, transaction::TransactionRecord};

/// A record source that returns a fixed list of records.
#[derive(Debug, Clone)]
pub(crate) struct InMemoryRecordSource(pub Vec<TransactionRecord>);

impl RecordSource for InMemoryRecordSource {
    fn get_all_records(&self) -> Result<Vec<TransactionRecord>, Error> {
        Ok(self.0.clone())
    }
}

/// A record source that always fails, like a database that cannot be read.
#[derive(Debug, Clone)]
pub(crate) struct FailingRecordSource;

impl RecordSource for FailingRecordSource {
    fn get_all_records(&self) -> Result<Vec<TransactionRecord>, Error> {
        Err(Error::DatabaseLockError)
    }
}
